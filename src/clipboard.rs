//! Clipboard copy with a terminal fallback.
//!
//! The system clipboard is tried first. When it is unavailable (no display
//! server, headless session) the text is sent as an OSC 52 escape, which most
//! modern terminal emulators and multiplexers turn into a clipboard write.

use std::io::{self, IsTerminal, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Where the text ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    System,
    Terminal,
}

pub trait ClipboardBackend {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard via `copypasta`.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Some providers hand back an owned copy; wipe it.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// OSC 52 clipboard escape written to a terminal.
pub struct Osc52<W: Write> {
    out: W,
    is_terminal: bool,
}

impl Osc52<io::Stdout> {
    pub fn stdout() -> Self {
        let out = io::stdout();
        let is_terminal = out.is_terminal();
        Self { out, is_terminal }
    }
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardBackend for Osc52<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        if !self.is_terminal {
            return Err(Error::Clipboard("stdout is not a terminal".into()));
        }
        let mut payload = STANDARD.encode(text.as_bytes());
        let written = write!(self.out, "\x1b]52;c;{payload}\x07").and_then(|_| self.out.flush());
        payload.zeroize();
        written.map_err(Error::from)
    }
}

/// Copy `text`, falling back to `fallback` when `primary` fails.
pub fn copy_with<P, F>(text: &str, primary: &mut P, fallback: &mut F) -> Result<CopyOutcome>
where
    P: ClipboardBackend + ?Sized,
    F: ClipboardBackend + ?Sized,
{
    match primary.write(text) {
        Ok(()) => Ok(CopyOutcome::System),
        Err(primary_err) => {
            tracing::warn!(error = %primary_err, "system clipboard failed, trying terminal escape");
            fallback.write(text).map(|_| CopyOutcome::Terminal).map_err(|fallback_err| {
                tracing::error!(error = %fallback_err, "terminal clipboard fallback failed");
                Error::Clipboard(format!("{primary_err}; fallback: {fallback_err}"))
            })
        }
    }
}

/// Copy `text` to the system clipboard, or via OSC 52 on stdout.
pub fn copy(text: &str) -> Result<CopyOutcome> {
    copy_with(text, &mut SystemClipboard, &mut Osc52::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl ClipboardBackend for Failing {
        fn write(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("no display".into()))
        }
    }

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl ClipboardBackend for Recording {
        fn write(&mut self, text: &str) -> Result<()> {
            self.0.push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let (mut primary, mut fallback) = (Recording::default(), Recording::default());
        let outcome = copy_with("secret", &mut primary, &mut fallback).unwrap();
        assert_eq!(outcome, CopyOutcome::System);
        assert_eq!(primary.0, ["secret"]);
        assert!(fallback.0.is_empty());
    }

    #[test]
    fn falls_back_when_primary_fails() {
        let mut fallback = Recording::default();
        let outcome = copy_with("secret", &mut Failing, &mut fallback).unwrap();
        assert_eq!(outcome, CopyOutcome::Terminal);
        assert_eq!(fallback.0, ["secret"]);
    }

    #[test]
    fn both_failing_is_an_error() {
        let err = copy_with("secret", &mut Failing, &mut Failing).unwrap_err();
        assert!(matches!(err, Error::Clipboard(msg) if msg.contains("fallback")));
    }

    #[test]
    fn osc52_sequence() {
        let mut osc = Osc52::new(Vec::new(), true);
        osc.write("hi").unwrap();
        assert_eq!(osc.into_inner(), b"\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_refuses_non_terminal() {
        let mut osc = Osc52::new(Vec::new(), false);
        assert!(osc.write("hi").is_err());
        assert!(osc.into_inner().is_empty());
    }
}
