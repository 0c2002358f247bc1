// SPDX-License-Identifier: MIT OR Apache-2.0

//! The application object.
//!
//! This module holds the one unit of business logic in the scaffold: read a
//! required configuration value and report it on the console.

use crate::domain::Result;
use crate::ports::Console;
use crate::service::DefaultConfigService;
use std::sync::Arc;

/// The configuration key the application requires.
pub const TEMP_FOLDER_KEY: &str = "TEMP_FOLDER";

/// The single application object.
///
/// Stateless beyond its two injected collaborators; constructed once per
/// process and run exactly once. All failures are propagated, never generated
/// here.
pub struct Application {
    config: Arc<DefaultConfigService>,
    console: Arc<dyn Console>,
}

impl Application {
    /// Creates the application with its injected collaborators.
    pub fn new(config: Arc<DefaultConfigService>, console: Arc<dyn Console>) -> Self {
        Self { config, console }
    }

    /// Runs the application.
    ///
    /// Resolves the required `TEMP_FOLDER` value, writes a greeting and a line
    /// reporting the resolved value, and returns exit code 0. A missing key
    /// propagates upward uncaught; mapping it to a user-facing message is the
    /// entry point's job.
    ///
    /// The async signature is interface uniformity for future workloads; the
    /// body never suspends and there is no cancellation support.
    pub async fn run(&self) -> Result<i32> {
        let temp = self.config.get_required_str(TEMP_FOLDER_KEY)?;

        self.console.success("Hello, World! from hexapp");
        self.console
            .emphasis(&format!("Temporary folder is: {temp}"));

        Ok(0)
    }
}
