//! Centralized warning and prompt messages for CLI output.
//!
//! Everything here goes to stderr; stdout carries only passwords.

use std::io::{self, IsTerminal, Write};

use super::quiet;
use crate::pass::Strength;
use crate::pass::strength;
use crate::terminal::{RED, RESET, YELLOW, strength_color};

/// Whether stderr is a terminal, i.e. whether escape codes belong in it.
pub fn stderr_color() -> bool {
    io::stderr().is_terminal()
}

fn paint(color: &str, msg: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", paint(YELLOW, msg, stderr_color()));
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg, stderr_color()));
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Warning: length {requested} is out of range, using {used}"
    ));
}

pub fn count_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Warning: count {requested} is out of range, using {used}"
    ));
}

pub fn no_classes_selected() {
    warn("Warning: no character classes selected, using uppercase letters");
}

pub fn weak_source(name: &str) {
    warn(&format!(
        "Warning: random source `{name}` is not cryptographically strong"
    ));
}

/// Entropy summary and strength label - suppressed in quiet mode
pub fn report(entropy_bits: f64) {
    if quiet::enabled() {
        return;
    }
    let _ = write_report(&mut io::stderr().lock(), entropy_bits, stderr_color());
}

/// Write the two report lines; the label is colored by tier when `color` is set.
pub fn write_report<W: Write>(out: &mut W, entropy_bits: f64, color: bool) -> io::Result<()> {
    let tier = Strength::from_bits(entropy_bits);
    writeln!(out, "{}", strength::summary(entropy_bits))?;
    writeln!(out, "{}", paint(strength_color(tier), &tier.label(), color))
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize, via_terminal: bool) {
    if !quiet::enabled() {
        let how = if via_terminal { " (terminal)" } else { "" };
        eprintln!("*** {count} password(s) copied to clipboard{how} ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to
/// stdout, false to abort. In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true; // Fallback on read error
    }

    eprintln!("\nAborted.");
    false
}
