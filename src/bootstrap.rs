// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process bootstrap and outcome-to-exit-code mapping.
//!
//! The sequence is: load the optional `.env` file, snapshot the environment
//! into a configuration service, assemble the singleton graph, run the
//! application, and map the outcome to an exit code. Lower layers never catch
//! errors; this is the one place failures become user-facing messages.

use crate::adapters::{dotenv, AnsiConsole};
use crate::domain::{ConfigError, Result};
use crate::ports::Console;
use crate::service::{DefaultConfigService, ServiceRegistry};
use std::error::Error;
use std::sync::Arc;

/// Runs the full application sequence with an auto-detecting console.
///
/// Never returns an error; every failure is already mapped to an exit code
/// and reported on the console.
pub async fn run() -> i32 {
    run_with_console(Arc::new(AnsiConsole::new())).await
}

/// Runs the full application sequence against a caller-supplied console.
///
/// The seam integration tests use to capture output and assert on exit codes
/// without spawning a process.
pub async fn run_with_console(console: Arc<dyn Console>) -> i32 {
    let outcome = try_run(console.clone()).await;
    exit_code_for(outcome, console.as_ref())
}

/// The happy path: loader, configuration, registry, application run.
async fn try_run(console: Arc<dyn Console>) -> Result<i32> {
    dotenv::load()?;

    let config = DefaultConfigService::builder().with_env_vars().build()?;

    let registry = ServiceRegistry::with_console(config, console);
    registry.application().run().await
}

/// Maps an application outcome to a process exit code, reporting failures.
///
/// A missing required key gets a single clean error line naming the key; any
/// other error gets a shortened diagnostic of the error and its source chain.
/// Both failure classes exit with code 1.
pub fn exit_code_for(outcome: Result<i32>, console: &dyn Console) -> i32 {
    match outcome {
        Ok(code) => code,
        Err(ConfigError::RequiredKeyMissing { key }) => {
            console.error(&format!(
                "Configuration Error: Missing required configuration key: {key}"
            ));
            1
        }
        Err(err) => {
            console.error(&format!("Error: {err}"));
            let mut source = err.source();
            while let Some(cause) = source {
                console.error(&format!("  Caused by: {cause}"));
                source = cause.source();
            }
            1
        }
    }
}
