//! One-shot command line mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::{CliError, Context};
pub use flags::CliFlags;

/// Parse `args` and run once. Argument errors exit through clap.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = CliFlags::parse_from(args);
    let mut ctx = Context::new(flags);

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("cli run failed: {e:?}");
            ctx.report(&e);
            ExitCode::FAILURE
        }
    }
}
