//! Key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::session::Action;
use crate::pass::CharacterClass;

/// Map a terminal event to a session action.
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => action_for_key(key),
        // Coming back to the window gets a fresh password.
        Event::FocusGained => Some(Action::Regenerate),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('g') if ctrl => Some(Action::Regenerate),
        KeyCode::Char('c') if ctrl => Some(Action::Copy),
        _ if ctrl => None,
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Some(Action::Regenerate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => Some(Action::Shorter),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            Some(Action::Longer)
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            Some(Action::Toggle(CharacterClass::ALL[idx]))
        }
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Help footer lines.
pub const KEY_HELP: [&str; 2] = [
    "[-/+] length   [1-4] toggle classes   [g/Enter/Ctrl+G] new password",
    "[c/Ctrl+C] copy   [Esc/q] quit",
];
