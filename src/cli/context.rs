//! CLI context - bundles settings and flags for one run.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use zeroize::Zeroizing;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{self, ClipboardError};
use crate::faq;
use crate::pass::{self, ConfigError, Password};
use crate::settings::{self, Settings, SettingsError};
use crate::tui::{self, TuiError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tui(#[from] TuiError),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Start from saved settings (or defaults with `-d`) and layer the flags on top.
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let base = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        Self {
            settings: flags.apply(base),
            flags,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.flags.save {
            self.save_settings_to(&settings::default_path())?;
        }

        if self.flags.faq {
            print_faq();
            return Ok(());
        }

        if self.flags.interactive {
            tui::run_with(self.settings)?;
            return Ok(());
        }

        let passwords = pass::generate_batch(&self.settings.config(), self.flags.count())?;

        if self.flags.clipboard {
            self.copy_to_clipboard(&passwords)
        } else {
            print_passwords(&passwords);
            Ok(())
        }
    }

    /// Report an error the way the user expects for its kind.
    pub fn report(&self, err: &CliError) {
        match err {
            CliError::Config(e) => prompts::config_error(e, self.settings.language),
            CliError::Clipboard(e) => prompts::clipboard_error(&e.to_string()),
            CliError::Settings(e) => prompts::error(&e.to_string()),
            CliError::Tui(e) => prompts::error(&e.to_string()),
        }
    }

    /// Only a config that can generate is written.
    fn save_settings_to(&self, path: &Path) -> Result<(), CliError> {
        pass::validate(&self.settings.config())?;
        self.settings.save_to(path)?;
        prompts::settings_saved(self.settings.language, &path.display().to_string());
        Ok(())
    }

    fn copy_to_clipboard(&self, passwords: &[Password]) -> Result<(), CliError> {
        let joined = Zeroizing::new(
            passwords
                .iter()
                .map(Password::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
        );

        match clipboard::copy(&joined) {
            Ok(()) => {
                prompts::clipboard_copied(self.settings.language);
                Ok(())
            }
            Err(ClipboardError::Unavailable(reason)) => {
                log::warn!("clipboard unavailable: {reason}");
                if prompts::clipboard_fallback_prompt() {
                    print_passwords(passwords);
                    Ok(())
                } else {
                    Err(ClipboardError::Unavailable(reason).into())
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn print_passwords(passwords: &[Password]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pass in passwords {
        let _ = out.write_all(pass.as_str().as_bytes());
        let _ = out.write_all(b"\n");
    }
    let _ = out.flush();
}

fn print_faq() {
    println!("{}", faq::TITLE);
    println!();
    for entry in faq::ENTRIES {
        println!("{}", entry.question);
        println!("  {}", entry.answer);
        println!();
    }
}
