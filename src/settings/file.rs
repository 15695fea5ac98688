//! Settings file persistence.
//!
//! One comma separated line: `length,lowercase,uppercase,numbers,symbols,lang`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{Settings, SettingsError};
use crate::pass::{CharacterClass, MAX_LENGTH, MIN_LENGTH};

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(format_line(settings).as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    match parse_line(line.trim()) {
        Ok(settings) => {
            log::debug!("loaded settings from {}", path.display());
            Ok(settings)
        }
        Err(e) => {
            log::warn!("{e}; resetting {} to defaults", path.display());
            let settings = Settings::default();
            save(&settings, path)?;
            Ok(settings)
        }
    }
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn format_line(settings: &Settings) -> String {
    let flags: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|&c| settings.classes.contains(c).to_string())
        .collect();
    format!(
        "{},{},{}\n",
        settings.length,
        flags.join(","),
        settings.language.code()
    )
}

fn parse_line(line: &str) -> Result<Settings, SettingsError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return Err(SettingsError::Malformed(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    let length: usize = parts[0]
        .parse()
        .map_err(|_| SettingsError::Malformed(format!("bad length: {}", parts[0])))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(SettingsError::Malformed(format!(
            "length {length} is outside {MIN_LENGTH}..={MAX_LENGTH}"
        )));
    }

    let mut settings = Settings {
        length,
        ..Default::default()
    };
    for (class, raw) in CharacterClass::ALL.iter().zip(&parts[1..5]) {
        let enabled: bool = raw
            .parse()
            .map_err(|_| SettingsError::Malformed(format!("bad {class} flag: {raw}")))?;
        settings.classes.set(*class, enabled);
    }
    settings.language = parts[5]
        .parse()
        .map_err(|e| SettingsError::Malformed(format!("{e}")))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::pass::CharClasses;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let mut classes = CharClasses::all();
        classes.remove(CharacterClass::Symbols);
        let settings = Settings {
            length: 42,
            classes,
            language: Language::Arabic,
        };

        save(&settings, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42,true,true,true,false,ar\n");
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        assert_eq!(load(&path).unwrap(), Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,true,true,true,true,en\n");
    }

    #[test]
    fn malformed_file_resets_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        for bad in [
            "garbage",
            "16,true,true",
            "x,true,true,true,true,en",
            "16,yes,true,true,true,en",
            "16,true,true,true,true,fr",
            "500,true,true,true,true,en",
            "5,true,true,true,true,en",
        ] {
            fs::write(&path, bad).unwrap();
            assert_eq!(load(&path).unwrap(), Settings::default(), "{bad}");
        }
    }

    #[test]
    fn length_bounds_are_accepted() {
        assert_eq!(parse_line("6,true,true,true,true,en").unwrap().length, MIN_LENGTH);
        assert_eq!(parse_line("100,true,true,true,true,en").unwrap().length, MAX_LENGTH);
        assert!(matches!(
            parse_line("101,true,true,true,true,en"),
            Err(SettingsError::Malformed(_))
        ));
    }

    #[test]
    fn all_classes_disabled_is_kept() {
        let line = "20,false,false,false,false,en";
        let settings = parse_line(line).unwrap();
        assert_eq!(settings.classes, CharClasses::empty());
        assert_eq!(settings.length, 20);
    }
}
