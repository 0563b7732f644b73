//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;

/// Raw mode on an alternate screen with a hidden cursor and focus reporting.
/// Everything is undone when the guard drops.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { was_enabled: true };
        #[cfg(unix)]
        crate::exits::mark_screen(true);
        execute!(io::stdout(), EnterAlternateScreen, Hide, EnableFocusChange)?;
        Ok(guard)
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = execute!(io::stdout(), DisableFocusChange, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            #[cfg(unix)]
            crate::exits::mark_screen(false);
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
