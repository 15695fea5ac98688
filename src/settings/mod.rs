//! Generator preferences.

mod file;

use std::path::Path;

use thiserror::Error;

use crate::i18n::Language;
use crate::pass::{CharClasses, DEFAULT_LENGTH, GenerationConfig};

pub use file::default_path;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings line: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: CharClasses,
    pub language: Language,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&default_path())
    }

    /// Load from `path`, writing defaults there when the file is missing,
    /// empty or malformed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.classes, self.length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClasses::all(),
            language: Language::English,
        }
    }
}
