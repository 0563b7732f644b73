//! Interactive session state.
//!
//! Everything the screen shows is held here and changed only through
//! [`Session::apply`], so the key handling can be exercised without a
//! terminal.

use std::time::{Duration, Instant};

use crate::clipboard::CopyOutcome;
use crate::error::Result;
use crate::pass::{self, CharacterClass, ClassSet, GeneratedPassword, GenerationRequest, charset};
use crate::rand::RandomSource;

/// How long the copy notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    Toggle(CharacterClass),
    Regenerate,
    Copy,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Copied,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_TTL
    }
}

/// What the caller should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R: RandomSource + ?Sized> {
    request: GenerationRequest,
    password: Option<GeneratedPassword>,
    notice: Option<Notice>,
    source: Box<R>,
}

impl<R: RandomSource + ?Sized> Session<R> {
    /// Start a session and generate the first password.
    pub fn new(request: GenerationRequest, source: Box<R>) -> Result<Self> {
        let mut session = Self {
            request,
            password: None,
            notice: None,
            source,
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn length(&self) -> usize {
        self.request.length
    }

    pub fn classes(&self) -> ClassSet {
        self.request.classes
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Drop the notice once it has been visible long enough. Returns true if
    /// the screen needs redrawing.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.expired(now)) {
            self.notice = None;
            return true;
        }
        false
    }

    /// Apply an action. `copy` performs the clipboard write so tests can
    /// substitute it.
    pub fn apply<C>(&mut self, action: Action, copy: C) -> Result<Flow>
    where
        C: FnOnce(&str) -> Result<CopyOutcome>,
    {
        match action {
            Action::Shorter => {
                if self.request.length > pass::MIN_LENGTH {
                    self.request.length -= 1;
                    self.regenerate()?;
                }
            }
            Action::Longer => {
                if self.request.length < pass::MAX_LENGTH {
                    self.request.length += 1;
                    self.regenerate()?;
                }
            }
            Action::Toggle(class) => {
                self.request.classes.toggle(class);
                // Clearing the last class re-selects the default one.
                self.request.classes = charset::effective(self.request.classes);
                self.regenerate()?;
            }
            Action::Regenerate => self.regenerate()?,
            Action::Copy => self.copy(copy),
            Action::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn regenerate(&mut self) -> Result<()> {
        // Drop (and wipe) the old value before sampling the next.
        self.password = None;
        self.password = Some(pass::run(&self.request, &mut self.source)?);
        Ok(())
    }

    fn copy<C>(&mut self, copy: C)
    where
        C: FnOnce(&str) -> Result<CopyOutcome>,
    {
        let Some(password) = &self.password else {
            return;
        };
        self.notice = Some(match copy(password.value()) {
            Ok(CopyOutcome::System) => Notice::new(NoticeKind::Copied, "Copied to clipboard"),
            Ok(CopyOutcome::Terminal) => {
                Notice::new(NoticeKind::Copied, "Copied via terminal (OSC 52)")
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not copy password");
                Notice::new(NoticeKind::Error, format!("Could not copy: {e}"))
            }
        });
    }
}
