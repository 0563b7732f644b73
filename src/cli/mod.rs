//! Command-line entry point.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Result;

/// Run with parsed flags. `interactive` selects the TUI.
pub fn run(flags: CliFlags, interactive: bool) -> Result<()> {
    let mut ctx = Context::new(flags)?;
    ctx.run(interactive)
}
