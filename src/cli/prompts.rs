//! Centralized warning and error messages for CLI output.

use crossterm::style::{Stylize, style};
use crossterm::tty::IsTty;

use super::quiet;

fn colored() -> bool {
    std::io::stderr().is_tty()
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if colored() {
        eprintln!("{}", style(msg).yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if colored() {
        eprintln!("{}", style(msg).red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn usage_hint() {
    eprintln!("Run 'passgen help' for usage.");
}
