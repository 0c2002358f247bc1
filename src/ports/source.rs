// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, which is the primary port (interface)
//! for implementing configuration sources. Any configuration source (environment
//! variables, in-memory test fixtures, etc.) must implement this trait.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for configuration sources.
///
/// This trait defines the interface that all configuration sources must implement.
/// A source maps keys to string values; an absent key is `Ok(None)`, never an
/// error. Failing loudly on absence is the job of the required-lookup path in
/// the service layer, not of a source.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the assembled service can be shared
/// freely for the lifetime of the process.
///
/// # Examples
///
/// ```rust
/// use hexapp::ports::ConfigSource;
/// use hexapp::domain::{ConfigKey, ConfigValue, Result};
///
/// struct MySource;
///
/// impl ConfigSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok(None)
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and debugging. It should be a short,
    /// descriptive identifier like "env" or "mock".
    fn name(&self) -> &str;

    /// Retrieves a configuration value for the given key.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - The value was found (it may be empty)
    /// * `Ok(None)` - The key does not exist in this source
    /// * `Err(ConfigError)` - An error occurred
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hexapp::ports::ConfigSource;
    /// # use hexapp::domain::{ConfigKey, ConfigValue, Result};
    /// # struct MySource;
    /// # impl ConfigSource for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
    /// #         if key.as_str() == "APP_NAME" {
    /// #             Ok(Some(ConfigValue::from("MyApp")))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// #     fn all_keys(&self) -> Result<Vec<ConfigKey>> { Ok(vec![]) }
    /// # }
    /// let source = MySource;
    /// let key = ConfigKey::from("APP_NAME");
    /// let value = source.get(&key).unwrap();
    /// assert!(value.is_some());
    /// ```
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Returns all configuration keys available in this source.
    ///
    /// Useful for discovering available configuration options and debugging.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;

    /// Retrieves a configuration value for the given key string.
    ///
    /// This is a convenience method that automatically converts a string slice
    /// into a `ConfigKey`. It's equivalent to calling `get(&ConfigKey::from(key))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hexapp::ports::ConfigSource;
    /// # use hexapp::domain::{ConfigKey, ConfigValue, Result};
    /// # struct MySource;
    /// # impl ConfigSource for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
    /// #         if key.as_str() == "APP_NAME" {
    /// #             Ok(Some(ConfigValue::from("MyApp")))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// #     fn all_keys(&self) -> Result<Vec<ConfigKey>> { Ok(vec![]) }
    /// # }
    /// let source = MySource;
    /// let value = source.get_str("APP_NAME").unwrap();
    /// assert!(value.is_some());
    /// ```
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}
