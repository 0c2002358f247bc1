// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the core domain types for the scaffold. It is independent
//! of any external concerns and defines the fundamental concepts used throughout
//! the crate.

pub mod config_key;
pub mod config_value;
pub mod errors;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
