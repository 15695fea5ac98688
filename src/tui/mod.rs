//! Interactive password widget.

mod input;
mod text;
mod widget;

pub use input::*;
pub use text::*;
pub use widget::*;

use thiserror::Error;

use crate::cli::{prompts, quiet};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("Interactive mode needs a terminal; pass flags instead (see --help)")]
    NotATerminal,
}

/// Run the widget with saved settings.
pub fn run() -> Result<(), TuiError> {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    });
    run_with(settings)
}

/// Run the widget starting from `settings`. A password is generated on open.
pub fn run_with(settings: Settings) -> Result<(), TuiError> {
    require_terminal(quiet::is_interactive())?;

    reset_terminal();
    let mut widget = Widget::new(settings);
    widget.generate();

    loop {
        print_widget(&widget);
        match widget.apply(read_action()) {
            Flow::Continue => {}
            Flow::ShowFaq => {
                print_faq();
                wait_for_key();
            }
            Flow::Quit => break,
        }
    }

    reset_terminal();
    clear();
    Ok(())
}

fn require_terminal(interactive: bool) -> Result<(), TuiError> {
    if interactive {
        Ok(())
    } else {
        Err(TuiError::NotATerminal)
    }
}
