use std::num::NonZeroUsize;

use clap::Parser;

use crate::i18n::Language;
use crate::pass::CharacterClass;
use crate::settings::Settings;

#[derive(Parser, Debug, Default)]
#[command(
    name = "passgen",
    version,
    about = "Random password generator",
    long_about = "Random password generator.\n\nRun without arguments to open the interactive widget. \
                  Pass flags to generate passwords directly."
)]
pub struct CliFlags {
    /// Characters per password (6-100, default: 16)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate (at least 1)
    #[arg(short, long, value_name = "N")]
    pub number: Option<NonZeroUsize>,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (!@#$%^&*()_+-=[]{}|;:,.<>?)
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Message language: en or ar
    #[arg(long, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Print the FAQ and exit
    #[arg(long)]
    pub faq: bool,

    /// Open the interactive widget with these options
    #[arg(short, long)]
    pub interactive: bool,

    /// Save length, classes and language as the new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Ignore saved settings and start from built-in defaults
    #[arg(short, long)]
    pub default: bool,

    /// Suppress everything except the passwords
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Layer explicit flags over `base`.
    pub fn apply(&self, base: Settings) -> Settings {
        let mut settings = base;

        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(lang) = self.lang {
            settings.language = lang;
        }

        let disabled = [
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Numbers, self.no_numbers),
            (CharacterClass::Symbols, self.no_symbols),
        ];
        for (class, off) in disabled {
            if off {
                settings.classes.remove(class);
            }
        }

        settings
    }

    pub fn count(&self) -> usize {
        self.number.map_or(1, NonZeroUsize::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClasses;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keep_base() {
        let base = Settings::default();
        assert_eq!(parse(&[]).apply(base), base);
        assert_eq!(parse(&[]).count(), 1);
    }

    #[test]
    fn class_flags_remove_classes() {
        let flags = parse(&["--no-uppercase", "--no-symbols", "-l", "8"]);
        let settings = flags.apply(Settings::default());
        let expected: CharClasses = [CharacterClass::Lowercase, CharacterClass::Numbers]
            .into_iter()
            .collect();
        assert_eq!(settings.classes, expected);
        assert_eq!(settings.length, 8);
    }

    #[test]
    fn all_classes_off_gives_empty_set() {
        let flags = parse(&["--no-lowercase", "--no-uppercase", "--no-numbers", "--no-symbols"]);
        assert!(flags.apply(Settings::default()).classes.is_empty());
    }

    #[test]
    fn language_and_count() {
        let flags = parse(&["--lang", "ar", "-n", "3", "-b", "-q"]);
        assert_eq!(flags.apply(Settings::default()).language, Language::Arabic);
        assert_eq!(flags.count(), 3);
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn zero_count_rejected() {
        assert!(CliFlags::try_parse_from(["passgen", "-n", "0", "-b"]).is_err());
        assert_eq!(parse(&["-n", "1"]).count(), 1);
    }

    #[test]
    fn bad_language_rejected() {
        let result = CliFlags::try_parse_from(["passgen", "--lang", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_length_parses() {
        // Range is checked by the generator, not the parser
        assert_eq!(parse(&["-l", "500"]).length, Some(500));
    }
}
