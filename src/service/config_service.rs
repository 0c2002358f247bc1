// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service implementation.
//!
//! This module provides the configuration service that aggregates configuration
//! sources and exposes both an absence-tolerant lookup and the required-value
//! lookup that fails with a typed error.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;

/// Aggregates configuration sources into a queryable key-value mapping.
///
/// Sources are queried in insertion order and the first value found wins. The
/// default wiring holds a single environment variable source, but the seam for
/// layering additional sources stays open.
///
/// # Examples
///
/// ```rust
/// use hexapp::service::DefaultConfigService;
///
/// # fn main() -> hexapp::domain::Result<()> {
/// let config = DefaultConfigService::builder()
///     .with_env_vars()
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct DefaultConfigService {
    /// Configuration sources in query order
    sources: Vec<Box<dyn ConfigSource>>,
}

impl DefaultConfigService {
    /// Creates a new empty configuration service.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates a new configuration service builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexapp::service::DefaultConfigService;
    ///
    /// # fn main() -> hexapp::domain::Result<()> {
    /// let config = DefaultConfigService::builder()
    ///     .with_env_vars()
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Adds a configuration source to the service.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Retrieves a configuration value, returning an absence marker when the
    /// key exists in no source.
    ///
    /// This lookup never fails on a missing key by itself; use
    /// [`get_required`](Self::get_required) for lookups that must succeed.
    pub fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => continue,
                Err(e) => {
                    // A failing source is treated as absence, not a hard error
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        Ok(None)
    }

    /// Retrieves a required configuration value.
    ///
    /// Returns the value verbatim when present, including the empty string,
    /// which is a valid value distinct from absence. Fails with
    /// [`ConfigError::RequiredKeyMissing`] carrying the queried key when the
    /// key exists in no source. No side effects; deterministic given the same
    /// source contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexapp::adapters::EnvVarAdapter;
    /// use hexapp::domain::ConfigKey;
    /// use hexapp::service::DefaultConfigService;
    /// use std::collections::HashMap;
    ///
    /// # fn main() -> hexapp::domain::Result<()> {
    /// let mut values = HashMap::new();
    /// values.insert("TEMP_FOLDER".to_string(), "/tmp".to_string());
    ///
    /// let mut config = DefaultConfigService::new();
    /// config.add_source(Box::new(EnvVarAdapter::with_values(values)));
    ///
    /// let value = config.get_required(&ConfigKey::from("TEMP_FOLDER"))?;
    /// assert_eq!(value.as_str(), "/tmp");
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_required(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.get(key)?
            .ok_or_else(|| ConfigError::RequiredKeyMissing {
                key: key.as_str().to_string(),
            })
    }

    /// Retrieves a required configuration value by key string.
    ///
    /// Convenience wrapper over [`get_required`](Self::get_required).
    pub fn get_required_str(&self, key: &str) -> Result<ConfigValue> {
        self.get_required(&ConfigKey::from(key))
    }

    /// Checks whether a key exists in any source.
    pub fn has(&self, key: &ConfigKey) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

impl Default for DefaultConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`DefaultConfigService`].
///
/// # Examples
///
/// ```rust
/// use hexapp::service::ConfigBuilder;
///
/// # fn main() -> hexapp::domain::Result<()> {
/// let config = ConfigBuilder::new()
///     .with_env_vars()
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a configuration source to the builder.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds a snapshot of the process environment as a configuration source.
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Builds the configuration service.
    pub fn build(self) -> Result<DefaultConfigService> {
        let mut service = DefaultConfigService::new();

        for source in self.sources {
            service.add_source(source);
        }

        Ok(service)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
