use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use neopass::cli::{self, CliFlags, prompts, quiet};
use neopass::logging;

fn main() -> ExitCode {
    #[cfg(unix)]
    {
        neopass::exits::install_handlers();
        neopass::exits::disable_core_dumps();
    }

    let flags = CliFlags::parse();
    // Bare `neopass` at a terminal opens the interactive screen.
    let interactive = flags.interactive
        || (!flags.has_explicit_args()
            && quiet::is_interactive()
            && std::io::stdout().is_terminal());

    // Log lines would tear the interactive screen.
    logging::init(if interactive { "off" } else { "neopass=warn" });

    match cli::run(flags, interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "neopass failed");
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
