// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console output trait definition.
//!
//! This module defines the `Console` trait, the port through which the application
//! writes user-facing output. Implementations decide how (and whether) to style
//! the text; callers only express intent.

/// A trait for console output sinks.
///
/// The application writes semantically tagged lines through this port and an
/// adapter renders them, with styling degrading to plain text when the output
/// target does not support it.
///
/// Informational lines (`line`, `success`, `emphasis`) target stdout; `error`
/// targets stderr.
///
/// # Examples
///
/// ```rust
/// use hexapp::ports::Console;
///
/// struct PlainConsole;
///
/// impl Console for PlainConsole {
///     fn line(&self, text: &str) {
///         println!("{text}");
///     }
///
///     fn success(&self, text: &str) {
///         println!("{text}");
///     }
///
///     fn emphasis(&self, text: &str) {
///         println!("{text}");
///     }
///
///     fn error(&self, text: &str) {
///         eprintln!("{text}");
///     }
/// }
/// ```
pub trait Console: Send + Sync {
    /// Writes an unstyled line.
    fn line(&self, text: &str);

    /// Writes a line styled as a success message (green where supported).
    fn success(&self, text: &str);

    /// Writes a line styled for emphasis (yellow where supported).
    fn emphasis(&self, text: &str);

    /// Writes an error line to stderr (red where supported).
    fn error(&self, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingConsole {
        lines: Mutex<Vec<String>>,
    }

    impl Console for RecordingConsole {
        fn line(&self, text: &str) {
            self.lines.lock().unwrap().push(format!("line:{text}"));
        }

        fn success(&self, text: &str) {
            self.lines.lock().unwrap().push(format!("success:{text}"));
        }

        fn emphasis(&self, text: &str) {
            self.lines.lock().unwrap().push(format!("emphasis:{text}"));
        }

        fn error(&self, text: &str) {
            self.lines.lock().unwrap().push(format!("error:{text}"));
        }
    }

    #[test]
    fn test_console_records_semantic_writes() {
        let console = RecordingConsole {
            lines: Mutex::new(Vec::new()),
        };

        console.line("a");
        console.success("b");
        console.emphasis("c");
        console.error("d");

        let lines = console.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec!["line:a", "success:b", "emphasis:c", "error:d"]
        );
    }

    #[test]
    fn test_console_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Console>>();
    }
}
