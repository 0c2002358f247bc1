// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service and the application wiring.
//!
//! This module contains the configuration service that implements the
//! required-lookup contract, the registry that assembles the singleton object
//! graph, and the application object itself.

pub mod application;
pub mod config_service;
pub mod registry;

// Re-export commonly used types
pub use application::{Application, TEMP_FOLDER_KEY};
pub use config_service::{ConfigBuilder, DefaultConfigService};
pub use registry::ServiceRegistry;
