// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal `.env` file loader.
//!
//! This module applies `key=value` assignments from an optional local file to the
//! process environment. It deliberately supports none of the richer dotenv
//! features: no quoting, no escaping, no multi-line values, no interpolation.

use crate::domain::Result;
use std::env;
use std::fs;
use std::path::Path;

/// The default file name looked up in the current working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads environment variables from `./.env`.
///
/// A missing file is a silent no-op. See [`load_from`] for the line format.
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> hexapp::domain::Result<()> {
/// let applied = hexapp::adapters::dotenv::load()?;
/// # Ok(())
/// # }
/// ```
pub fn load() -> Result<usize> {
    load_from(DEFAULT_ENV_FILE)
}

/// Loads environment variables from the given file path.
///
/// Each line is split on `'='` with empty segments discarded; only lines that
/// yield exactly two non-empty segments are applied. Everything else (blank
/// lines, comments, `NOTVALID`, `B=2=3`, `A=`) is silently skipped, as are
/// pairs the platform rejects: an empty key or a NUL byte in either half.
/// Key and value are whitespace-trimmed, then set on the process environment,
/// unconditionally overwriting any pre-existing value. Variables set this way
/// are visible to the current process and subsequently spawned children.
///
/// Returns the number of variables applied. A missing file returns `Ok(0)`;
/// any other read failure is an I/O error.
pub fn load_from(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No env file at {}, skipping", path.display());
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    let mut applied = 0;
    for line in contents.lines() {
        let segments: Vec<&str> = line.split('=').filter(|s| !s.is_empty()).collect();

        if segments.len() != 2 {
            continue;
        }

        let key = segments[0].trim();
        let value = segments[1].trim();

        // set_var rejects empty names, '=' in names, and NUL bytes in either half
        if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
            continue;
        }

        env::set_var(key, value);
        applied += 1;
    }

    tracing::debug!(
        "Applied {} variables from env file {}",
        applied,
        path.display()
    );

    Ok(applied)
}
