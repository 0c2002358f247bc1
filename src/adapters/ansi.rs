// SPDX-License-Identifier: MIT OR Apache-2.0

//! ANSI console output adapter.
//!
//! Renders semantically tagged lines with color when the output target
//! supports it, and falls back to plain text otherwise. Capability detection
//! is a runtime check, honoring the `NO_COLOR` and `FORCE_COLOR` conventions
//! alongside TTY detection; the detected mode drives the `colored` rendering
//! override so styling never depends on that crate's own heuristics.

use crate::ports::Console;
use colored::{control, Color, Colorize};
use std::io::IsTerminal;

/// Whether color styling is used for console output.
///
/// Detection order (first match wins):
/// 1. `NO_COLOR` set (<https://no-color.org/>) -> Disabled
/// 2. `FORCE_COLOR=0` -> Disabled
/// 3. `FORCE_COLOR` set (non-zero) -> Enabled
/// 4. stdout is a TTY -> Enabled
/// 5. Default -> Disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Styled text is emitted with color escape sequences.
    Enabled,
    /// Plain text only, no escape sequences.
    Disabled,
}

impl ColorMode {
    /// Detects the color mode for the current process.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    fn detect_with<F>(get_env: F, stdout_is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if get_env("NO_COLOR").is_some() {
            return Self::Disabled;
        }

        let force_color = get_env("FORCE_COLOR");
        let force_color_on = force_color.as_deref().map(|value| value.trim() != "0");
        match force_color_on {
            Some(false) => return Self::Disabled,
            Some(true) => return Self::Enabled,
            None => {}
        }

        if stdout_is_tty {
            return Self::Enabled;
        }

        Self::Disabled
    }

    /// Returns `true` when styling is enabled.
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Console adapter writing to the process stdout/stderr.
///
/// Informational lines go to stdout; `error` goes to stderr so piped output
/// stays parseable.
#[derive(Debug)]
pub struct AnsiConsole {
    mode: ColorMode,
}

impl AnsiConsole {
    /// Creates a console with auto-detected capability.
    pub fn new() -> Self {
        Self::with_mode(ColorMode::detect())
    }

    /// Creates a console with an explicit color mode.
    ///
    /// The mode overrides `colored`'s own environment detection so the
    /// capability decision is made in exactly one place.
    pub fn with_mode(mode: ColorMode) -> Self {
        control::set_override(mode.is_enabled());
        Self { mode }
    }

    /// Returns the color mode this console renders with.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.mode.is_enabled() {
            text.color(color).to_string()
        } else {
            text.normal().to_string()
        }
    }
}

impl Default for AnsiConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for AnsiConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn success(&self, text: &str) {
        println!("{}", self.paint(Color::Green, text));
    }

    fn emphasis(&self, text: &str) {
        println!("{}", self.paint(Color::Yellow, text));
    }

    fn error(&self, text: &str) {
        eprintln!("{}", self.paint(Color::Red, text));
    }
}

/// Serializes tests that construct consoles: the `colored` override is
/// process-global state.
#[cfg(test)]
pub(crate) static COLOR_OVERRIDE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
