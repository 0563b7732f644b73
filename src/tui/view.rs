//! Screen rendering.

use super::input::KEY_HELP;
use super::session::{NoticeKind, Session};
use crate::pass::strength::{self, Strength};
use crate::pass::{CharacterClass, MAX_LENGTH};
use crate::rand::RandomSource;
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, Frame, GREEN, RED, RESET, strength_color, wrap_chars,
};

const METER_WIDTH: usize = 40;

/// Bar filled in proportion to entropy, full at 128 bits.
fn meter(bits: f64) -> String {
    let filled = ((bits / 128.0).clamp(0.0, 1.0) * METER_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn render<R: RandomSource + ?Sized>(session: &Session<R>) -> Frame {
    let mut frame = Frame::new();

    frame.box_top("Password");
    match session.password() {
        Some(password) => {
            for chunk in wrap_chars(password.value(), BOX_WIDTH - 4) {
                frame.box_line(&format!("{BOLD}{chunk}{RESET}"));
            }
        }
        None => frame.box_line(""),
    }
    frame.box_bottom();
    frame.blank();

    frame.box_top("Strength");
    if let Some(password) = session.password() {
        let bits = password.entropy_bits();
        let tier = Strength::from_bits(bits);
        let color = strength_color(tier);
        frame.box_line(&format!("{color}{}{RESET} {}", meter(bits), tier));
        frame.box_line(&strength::summary(bits));
        frame.box_line(&format!(
            "{DIM}Alphabet: {} chars • Source: {}{RESET}",
            password.alphabet_size(),
            session.source_name()
        ));
    }
    frame.box_bottom();
    frame.blank();

    frame.box_top("Options");
    frame.box_line(&format!(
        "Length: {} (1-{MAX_LENGTH})",
        session.length()
    ));
    frame.rule();
    let classes = session.classes();
    for (i, class) in CharacterClass::ALL.into_iter().enumerate() {
        frame.box_line(&format!(
            "{}) {} {}",
            i + 1,
            checkbox(classes.contains(class)),
            class
        ));
    }
    frame.box_bottom();
    frame.blank();

    match session.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Copied => GREEN,
                NoticeKind::Error => RED,
            };
            frame.box_line_center(&format!("{color}{}{RESET}", notice.text));
        }
        None => frame.blank(),
    }
    for line in KEY_HELP {
        frame.box_line_center(&format!("{DIM}{line}{RESET}"));
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::CopyOutcome;
    use crate::pass::{ClassSet, GenerationRequest};
    use crate::rand::SeededSource;
    use crate::terminal::console_width;
    use crate::tui::session::Action;

    #[test]
    fn meter_scales_with_entropy() {
        assert_eq!(meter(0.0), "░".repeat(METER_WIDTH));
        assert_eq!(meter(500.0), "█".repeat(METER_WIDTH));
        assert_eq!(meter(64.0).chars().filter(|&c| c == '█').count(), 20);
    }

    #[test]
    fn renders_password_and_report() {
        let mut session = Session::new(
            GenerationRequest::new(12, ClassSet::all()),
            Box::new(SeededSource::new(2)),
        )
        .unwrap();
        session
            .apply(Action::Copy, |_| Ok(CopyOutcome::System))
            .unwrap();

        let frame = render(&session);
        let text = frame.lines().join("\n");
        let password = session.password().unwrap().value();
        assert!(text.contains(password));
        assert!(text.contains("Entropy: 74 bits."));
        assert!(text.contains("Strong"));
        assert!(text.contains("1) [x] uppercase"));
        assert!(text.contains("Copied to clipboard"));
        assert!(
            frame
                .lines()
                .iter()
                .all(|l| l.is_empty() || console_width(l) == BOX_WIDTH)
        );
    }

    #[test]
    fn long_passwords_wrap() {
        let session = Session::new(
            GenerationRequest::new(128, ClassSet::all()),
            Box::new(SeededSource::new(2)),
        )
        .unwrap();
        let frame = render(&session);
        let password = session.password().unwrap().value();
        let shown: String = frame
            .lines()
            .iter()
            .skip(1)
            .take(2)
            .map(|l| {
                l.trim_start_matches("│ ")
                    .trim_end_matches(" │")
                    .trim_end()
                    .replace(BOLD, "")
                    .replace(RESET, "")
            })
            .collect();
        assert_eq!(shown, password);
    }
}
