//! Centralized notices and prompts for CLI output.

use std::io::Write;

use super::quiet;
use crate::i18n::{Language, Message};
use crate::pass::ConfigError;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Localized text for a generation error.
pub fn config_error_text(err: &ConfigError, lang: Language) -> String {
    match err {
        ConfigError::NoClassSelected => lang.text(Message::NoClassSelected).to_string(),
        ConfigError::LengthOutOfRange { .. } => format!("{}: {err}", lang.text(Message::PasswordLength)),
    }
}

pub fn config_error(err: &ConfigError, lang: Language) {
    error(&config_error_text(err, lang));
}

/// Clipboard confirmation on stderr so stdout stays clean - suppressed in quiet mode
pub fn clipboard_copied(lang: Language) {
    if !quiet::enabled() {
        eprintln!("{GREEN}{}{RESET}", lang.text(Message::Copied));
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Confirm a settings save - suppressed in quiet mode
pub fn settings_saved(lang: Language, path: &str) {
    if !quiet::enabled() {
        eprintln!("{} \u{2192} {path}", lang.text(Message::SettingsSaved));
    }
}
