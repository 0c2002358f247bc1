// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use hexapp::domain::{ConfigKey, ConfigValue, Result};
use hexapp::ports::{ConfigSource, Console};
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

/// Serializes tests that mutate the process environment.
///
/// Tests in one binary run concurrently and the environment is process-global,
/// so every test touching shared variable names must hold this lock.
#[allow(dead_code)]
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Helper to set and clean up environment variables.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets a variable and remembers to remove it on drop.
    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    /// Removes a variable now and keeps it removed on drop.
    pub fn remove(&mut self, key: &str) {
        env::remove_var(key);
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

/// A mock configuration source with predefined values.
#[derive(Debug, Clone)]
pub struct MockConfigSource {
    name: String,
    values: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockConfigSource {
    /// Creates a new mock source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
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

/// A console that captures output instead of writing to the terminal.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct BufferConsole {
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written through `line`, `success`, or `emphasis`.
    pub fn out_lines(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    /// Lines written through `error`.
    pub fn err_lines(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) {
        self.out.lock().unwrap().push(text.to_string());
    }

    fn success(&self, text: &str) {
        self.out.lock().unwrap().push(text.to_string());
    }

    fn emphasis(&self, text: &str) {
        self.out.lock().unwrap().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.err.lock().unwrap().push(text.to_string());
    }
}
