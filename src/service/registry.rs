// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service registry wiring the singleton object graph.
//!
//! Explicit construction of the process-lifetime singletons: the console sink
//! (with detected capability) and the application object, with the
//! configuration service injected into it. No reflection, no teardown logic
//! beyond normal process exit.

use crate::adapters::AnsiConsole;
use crate::ports::Console;
use crate::service::{Application, DefaultConfigService};
use std::sync::Arc;

/// Owns the singleton services for the lifetime of the process.
///
/// # Examples
///
/// ```rust
/// use hexapp::service::{DefaultConfigService, ServiceRegistry};
///
/// # fn main() -> hexapp::domain::Result<()> {
/// let config = DefaultConfigService::builder().with_env_vars().build()?;
/// let registry = ServiceRegistry::bootstrap(config);
/// let app = registry.application();
/// # Ok(())
/// # }
/// ```
pub struct ServiceRegistry {
    console: Arc<dyn Console>,
    application: Arc<Application>,
}

impl ServiceRegistry {
    /// Constructs the singleton graph with an auto-detecting ANSI console.
    pub fn bootstrap(config: DefaultConfigService) -> Self {
        Self::with_console(config, Arc::new(AnsiConsole::new()))
    }

    /// Constructs the singleton graph with a caller-supplied console.
    ///
    /// The seam tests use to capture output instead of writing to the
    /// process stdout.
    pub fn with_console(config: DefaultConfigService, console: Arc<dyn Console>) -> Self {
        let config = Arc::new(config);
        let application = Arc::new(Application::new(config, console.clone()));

        Self {
            console,
            application,
        }
    }

    /// The application singleton.
    pub fn application(&self) -> Arc<Application> {
        self.application.clone()
    }

    /// The console singleton.
    pub fn console(&self) -> Arc<dyn Console> {
        self.console.clone()
    }
}
