// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, which wraps resolved configuration
//! values. Values are plain strings; the empty string is a valid value, distinct
//! from an absent key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wrapper for resolved configuration values.
///
/// `ConfigValue` stores configuration values as strings. Configuration sources
/// return a uniform type, and a value resolved through the required-lookup path
/// is guaranteed present (though it may be empty) at the point of use.
///
/// # Examples
///
/// ```
/// use hexapp::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("/tmp".to_string());
/// assert_eq!(value.as_str(), "/tmp");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::new("hello".to_string());
    /// assert_eq!(value.as_str(), "hello");
    /// ```
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("world");
    /// assert_eq!(value.as_str(), "world");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into an owned `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexapp::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("test");
    /// assert_eq!(value.as_string(), "test");
    /// ```
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns `true` if the value is the empty string.
    ///
    /// An empty value is still a present value; absence is represented by
    /// `Option::None` at the source level, never by an empty `ConfigValue`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
