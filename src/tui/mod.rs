//! Interactive terminal UI.

mod input;
mod session;
mod view;

pub use input::action_for;
pub use session::{Action, Flow, Notice, NoticeKind, Session};
pub use view::render;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event;

use crate::clipboard;
use crate::error::Result;
use crate::pass::GenerationRequest;
use crate::rand::RandomSource;
use crate::terminal::RawModeGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the interactive session until the user quits.
pub fn run(request: GenerationRequest, source: Box<dyn RandomSource>) -> Result<()> {
    let mut session = Session::new(request, source)?;
    let _guard = RawModeGuard::new()?;
    let mut stdout = io::stdout();

    tracing::debug!(length = request.length, "interactive session started");
    render(&session).draw(&mut stdout)?;

    loop {
        if !event::poll(POLL_INTERVAL)? {
            if session.expire_notice(Instant::now()) {
                render(&session).draw(&mut stdout)?;
            }
            continue;
        }

        let ev = event::read()?;
        if let event::Event::Resize(..) = ev {
            render(&session).draw(&mut stdout)?;
            continue;
        }
        let Some(action) = action_for(&ev) else {
            continue;
        };

        if session.apply(action, clipboard::copy)? == Flow::Exit {
            break;
        }
        session.expire_notice(Instant::now());
        render(&session).draw(&mut stdout)?;
    }

    tracing::debug!("interactive session finished");
    Ok(())
}
