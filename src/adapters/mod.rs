// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the ports: the environment
//! variable configuration source, the `.env` file loader that feeds it, and the
//! ANSI console output sink.

pub mod ansi;
pub mod dotenv;
pub mod env_var;

// Re-export commonly used types
pub use ansi::{AnsiConsole, ColorMode};
pub use env_var::EnvVarAdapter;
