// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process entry point.

use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics are opt-in via RUST_LOG; the scaffold stays quiet by default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = hexapp::bootstrap::run().await;
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
