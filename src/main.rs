use std::env;
use std::process::ExitCode;

use passgen::cli::{self, prompts, quiet};
use passgen::{exits, tui};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if quiet::is_interactive() => match tui::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                prompts::error(&e.to_string());
                ExitCode::FAILURE
            }
        },
        _ => cli::run(args),
    }
}
