//! Confirmation and notification capability
//!
//! Deleting a month or an expense asks for confirmation, and a rejected
//! duplicate month is announced to the user. The registry and ledgers call
//! through [`Prompt`] so they stay free of any terminal handling.

use std::io::{self, BufRead, Write};

/// User-facing confirmations and notices
pub trait Prompt {
    /// Ask a yes/no question; `true` means proceed
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking notice
    fn notify(&self, message: &str);
}

/// Confirms everything and records notices in the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, "auto-confirmed");
        true
    }

    fn notify(&self, message: &str) {
        tracing::info!(message, "notice");
    }
}

/// Asks on stdin, prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N]: ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
