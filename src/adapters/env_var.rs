// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from
//! process environment variables.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Configuration source adapter for environment variables.
///
/// The adapter snapshots the process environment at construction time, so the
/// dotenv loader must run before the adapter is built for file-supplied values
/// to be visible. Keys are looked up verbatim, with no prefixing or case
/// transformation; case sensitivity follows the host platform convention.
///
/// Lookups are deterministic given the same snapshot.
///
/// # Examples
///
/// ```rust
/// use hexapp::adapters::EnvVarAdapter;
/// use hexapp::ports::ConfigSource;
///
/// let adapter = EnvVarAdapter::new();
/// let value = adapter.get_str("PATH").unwrap();
/// ```
#[derive(Debug)]
pub struct EnvVarAdapter {
    /// Snapshot of environment variables taken at construction
    values: HashMap<String, String>,
}

impl EnvVarAdapter {
    /// Creates a new adapter over a snapshot of the current process environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexapp::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::new();
    /// ```
    pub fn new() -> Self {
        let values: HashMap<String, String> = env::vars().collect();
        tracing::debug!("Snapshotted {} environment variables", values.len());
        Self { values }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This constructor is primarily intended for tests that want
    /// specific values without mutating the process environment. Use `new()`
    /// for normal usage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hexapp::adapters::EnvVarAdapter;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("TEMP_FOLDER".to_string(), "/tmp".to_string());
    ///
    /// let adapter = EnvVarAdapter::with_values(values);
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_adapter_name() {
        let adapter = EnvVarAdapter::new();
        assert_eq!(adapter.name(), "env");
    }

    #[test]
    fn test_env_adapter_get() {
        let mut guard = EnvGuard::new();
        guard.set("HEXAPP_TEST_VAR", "test_value");

        let adapter = EnvVarAdapter::new();
        let key = ConfigKey::from("HEXAPP_TEST_VAR");
        let value = adapter.get(&key).unwrap();

        assert!(value.is_some());
        assert_eq!(value.unwrap().as_str(), "test_value");
    }

    #[test]
    fn test_env_adapter_get_nonexistent() {
        let adapter = EnvVarAdapter::new();
        let key = ConfigKey::from("NONEXISTENT_VAR_12345");
        let value = adapter.get(&key).unwrap();

        assert!(value.is_none());
    }

    #[test]
    fn test_env_adapter_snapshot_is_fixed() {
        let mut guard = EnvGuard::new();
        guard.set("HEXAPP_SNAPSHOT_VAR", "before");

        let adapter = EnvVarAdapter::new();
        guard.set("HEXAPP_SNAPSHOT_VAR", "after");

        // The snapshot was taken at construction, later mutation is invisible
        let value = adapter.get_str("HEXAPP_SNAPSHOT_VAR").unwrap();
        assert_eq!(value.unwrap().as_str(), "before");
    }

    #[test]
    fn test_env_adapter_with_values() {
        let mut values = HashMap::new();
        values.insert("TEMP_FOLDER".to_string(), "/tmp".to_string());

        let adapter = EnvVarAdapter::with_values(values);
        let value = adapter.get_str("TEMP_FOLDER").unwrap();

        assert_eq!(value.unwrap().as_str(), "/tmp");
    }

    #[test]
    fn test_env_adapter_empty_value_is_present() {
        let mut values = HashMap::new();
        values.insert("EMPTY_VAR".to_string(), String::new());

        let adapter = EnvVarAdapter::with_values(values);
        let value = adapter.get_str("EMPTY_VAR").unwrap();

        assert!(value.is_some());
        assert!(value.unwrap().is_empty());
    }

    #[test]
    fn test_env_adapter_all_keys() {
        let mut values = HashMap::new();
        values.insert("KEY_1".to_string(), "value1".to_string());
        values.insert("KEY_2".to_string(), "value2".to_string());

        let adapter = EnvVarAdapter::with_values(values);
        let keys = adapter.all_keys().unwrap();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&ConfigKey::from("KEY_1")));
        assert!(keys.contains(&ConfigKey::from("KEY_2")));
    }

    #[test]
    fn test_env_adapter_default() {
        let adapter = EnvVarAdapter::default();
        assert_eq!(adapter.name(), "env");
    }
}
