// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture console application scaffold.
//!
//! This crate is a minimal template for building a console application: it
//! loads environment variables from an optional `.env` file, builds a
//! configuration service over the process environment, wires singleton
//! services through explicit construction, and runs a single application
//! object that reads one required configuration value and prints formatted
//! output.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and errors (`ConfigKey`, `ConfigValue`, `ConfigError`)
//! - **Ports**: Trait definitions that define interfaces (`ConfigSource`, `Console`)
//! - **Adapters**: Implementations for specific concerns (env vars, `.env` loader, ANSI console)
//! - **Service**: The configuration service, the registry, and the application
//! - **Bootstrap**: Process orchestration and outcome-to-exit-code mapping
//!
//! # Behavior
//!
//! - The `.env` loader is deliberately minimal: `key=value` lines, no quoting,
//!   escaping, or interpolation; malformed lines are silently skipped; a
//!   missing file is a no-op.
//! - A required lookup returns the value verbatim (the empty string is valid)
//!   or fails with a typed error naming the key, which the bootstrap maps to
//!   exit code 1 with a clean message.
//! - Console styling auto-detects terminal capability and degrades to plain
//!   text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexapp::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     std::process::exit(hexapp::bootstrap::run().await);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod bootstrap;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{AnsiConsole, ColorMode, EnvVarAdapter};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
    pub use crate::ports::{ConfigSource, Console};
    pub use crate::service::{
        Application, ConfigBuilder, DefaultConfigService, ServiceRegistry, TEMP_FOLDER_KEY,
    };
}
