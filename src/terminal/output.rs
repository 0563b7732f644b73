//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Lines are built into a [`Frame`] and written
//! in one go with `\r\n` endings so they render correctly in raw mode.

use std::io::{self, Write};

use crate::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

pub fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => RED,
        Strength::Medium => YELLOW,
        Strength::Strong => GREEN,
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// A screenful of lines.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn box_top(&mut self, title: &str) {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// │ content                                        │
    pub fn box_line(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// │          content          │
    pub fn box_line_center(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// ├───────────────────────────────────────────────────────┤
    pub fn rule(&mut self) {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    /// └───────────────────────────────────────────────────────┘
    pub fn box_bottom(&mut self) {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clear the screen and draw the frame.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"\x1b[2J\x1b[H")?;
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Split `s` into chunks of at most `width` characters.
pub fn wrap_chars(s: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_codes_have_no_width() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn box_lines_are_full_width() {
        let mut frame = Frame::new();
        frame.box_top("Password");
        frame.box_line("hello");
        frame.box_line_center(&format!("{GREEN}Strong{RESET}"));
        frame.rule();
        frame.box_bottom();
        for line in frame.lines() {
            assert_eq!(console_width(line), BOX_WIDTH, "{line}");
        }
    }

    #[test]
    fn wraps_long_passwords() {
        let long = "x".repeat(150);
        let parts = wrap_chars(&long, 70);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 10);
        assert!(wrap_chars("", 70).is_empty());
    }
}
