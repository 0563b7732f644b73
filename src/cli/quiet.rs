//! Global quiet mode state for CLI.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag - suppresses warnings, prompts and the report
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// True when quiet mode is enabled OR stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
