//! Plain UI for CI/headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive output.
///
/// Writes unstyled lines to stdout. Findings are reported as warnings, so
/// they stay on stdout next to the summary; only errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", title);
    }

    fn show_field(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", msg);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
