//! Status-line reporting for terminal output.
//!
//! Provides a spinner-style in-progress line that is rewritten with a green
//! checkmark on completion. Writes to stderr so piped stdout stays clean;
//! disabled in tests.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Renders one in-progress status line at a time.
pub struct StatusLine {
    /// Whether a line is currently displayed and needs clearing.
    active: Mutex<bool>,
    /// If false, all output is suppressed.
    enabled: bool,
}

impl StatusLine {
    pub fn new(enabled: bool) -> Self {
        Self {
            active: Mutex::new(false),
            enabled,
        }
    }

    /// Print an in-progress line: `  ◌ message`.
    pub fn start(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut active = self.active.lock().unwrap();
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        if *active {
            let _ = write!(handle, "\x1b[1A\x1b[2K");
        }
        let _ = writeln!(handle, "  {} {}", "◌".cyan().bold(), message);
        let _ = handle.flush();
        *active = true;
    }

    /// Replace the in-progress line with `  ✔ message`.
    pub fn succeed(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut active = self.active.lock().unwrap();
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        if *active {
            let _ = write!(handle, "\x1b[1A\x1b[2K");
        }
        let _ = writeln!(handle, "  {} {}", "✔".green().bold(), message);
        let _ = handle.flush();
        *active = false;
    }
}
