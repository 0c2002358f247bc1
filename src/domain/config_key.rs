// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, which is a newtype wrapper around `String`
//! that provides type safety for configuration keys and prevents accidental string confusion.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for configuration keys.
///
/// `ConfigKey` is a newtype that wraps a `String` to provide type safety when working
/// with configuration keys. Keys are passed through verbatim; case sensitivity follows
/// the host environment-variable convention.
///
/// # Examples
///
/// ```
/// use hexapp::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("TEMP_FOLDER");
/// let key2 = ConfigKey::from("LOG_LEVEL".to_string());
///
/// assert_eq!(key.as_str(), "TEMP_FOLDER");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("APP_NAME".to_string());
    /// assert_eq!(key.as_str(), "APP_NAME");
    /// ```
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("APP_VERSION");
    /// assert_eq!(key.as_str(), "APP_VERSION");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("APP_DEBUG");
    /// let inner = key.into_string();
    /// assert_eq!(inner, "APP_DEBUG");
    /// ```
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("TEST_KEY".to_string());
        assert_eq!(key.as_str(), "TEST_KEY");
    }

    #[test]
    fn test_config_key_from_string() {
        let key = ConfigKey::from("TEST_KEY".to_string());
        assert_eq!(key.as_str(), "TEST_KEY");
    }

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("TEST_KEY");
        assert_eq!(key.as_str(), "TEST_KEY");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("TEST_KEY");
        let inner = key.into_string();
        assert_eq!(inner, "TEST_KEY");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("TEST_KEY");
        assert_eq!(format!("{}", key), "TEST_KEY");
    }

    #[test]
    fn test_config_key_equality() {
        let key1 = ConfigKey::from("TEST_KEY");
        let key2 = ConfigKey::from("TEST_KEY");
        let key3 = ConfigKey::from("OTHER_KEY");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_config_key_case_sensitive() {
        let upper = ConfigKey::from("TEMP_FOLDER");
        let lower = ConfigKey::from("temp_folder");
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_config_key_hash() {
        let key1 = ConfigKey::from("TEST_KEY");
        let key2 = ConfigKey::from("TEST_KEY");
        let key3 = ConfigKey::from("OTHER_KEY");

        let mut map = HashMap::new();
        map.insert(key1.clone(), "value1");

        assert_eq!(map.get(&key2), Some(&"value1"));
        assert_eq!(map.get(&key3), None);
    }

    #[test]
    fn test_config_key_as_ref() {
        let key = ConfigKey::from("TEST_KEY");
        let s: &str = key.as_ref();
        assert_eq!(s, "TEST_KEY");
    }

    #[test]
    fn test_config_key_empty() {
        let key = ConfigKey::from("");
        assert_eq!(key.as_str(), "");
    }
}
