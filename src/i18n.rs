//! UI strings for the two supported locales.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pass::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Title,
    Tagline,
    PasswordLength,
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
    GeneratePassword,
    NoClassSelected,
    Copied,
    SettingsSaved,
}

impl Message {
    pub const ALL: [Message; 11] = [
        Message::Title,
        Message::Tagline,
        Message::PasswordLength,
        Message::Lowercase,
        Message::Uppercase,
        Message::Numbers,
        Message::Symbols,
        Message::GeneratePassword,
        Message::NoClassSelected,
        Message::Copied,
        Message::SettingsSaved,
    ];
}

impl From<CharacterClass> for Message {
    fn from(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Lowercase => Message::Lowercase,
            CharacterClass::Uppercase => Message::Uppercase,
            CharacterClass::Numbers => Message::Numbers,
            CharacterClass::Symbols => Message::Symbols,
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Name shown on the language toggle, in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "عربي",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub fn text(self, msg: Message) -> &'static str {
        match self {
            Language::English => english(msg),
            Language::Arabic => arabic(msg),
        }
    }
}

fn english(msg: Message) -> &'static str {
    match msg {
        Message::Title => "Password Generator",
        Message::Tagline => "Use this tool to instantly create secure, random passwords.",
        Message::PasswordLength => "Password Length",
        Message::Lowercase => "Lowercase",
        Message::Uppercase => "Uppercase",
        Message::Numbers => "Numbers",
        Message::Symbols => "Symbols",
        Message::GeneratePassword => "Generate Password",
        Message::NoClassSelected => "Please select at least one option for generating password!",
        Message::Copied => "Password copied to clipboard!",
        Message::SettingsSaved => "Settings saved",
    }
}

fn arabic(msg: Message) -> &'static str {
    match msg {
        Message::Title => "مولد كلمات المرور",
        Message::Tagline => "استخدم هذه الأداة لإنشاء كلمات مرور آمنة وعشوائية فورية.",
        Message::PasswordLength => "طول كلمة المرور",
        Message::Lowercase => "أحرف صغيرة",
        Message::Uppercase => "أحرف كبيرة",
        Message::Numbers => "أرقام",
        Message::Symbols => "رموز",
        Message::GeneratePassword => "إنشاء كلمة مرور",
        Message::NoClassSelected => "يرجى اختيار خيار واحد على الأقل لإنشاء كلمة مرور!",
        Message::Copied => "تم نسخ كلمة المرور إلى الحافظة!",
        Message::SettingsSaved => "تم حفظ الإعدادات",
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language: {0} (expected en or ar)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_translated() {
        for lang in Language::ALL {
            for msg in Message::ALL {
                assert!(!lang.text(msg).is_empty(), "{lang} {msg:?}");
            }
        }
    }

    #[test]
    fn locales_differ() {
        for msg in Message::ALL {
            assert_ne!(Language::English.text(msg), Language::Arabic.text(msg));
        }
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Language::English.toggle(), Language::Arabic);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
    }

    #[test]
    fn parse_codes() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert_eq!("Arabic".parse::<Language>(), Ok(Language::Arabic));
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("fr".into()));
        assert_eq!(err.to_string(), "Unknown language: fr (expected en or ar)");
    }

    #[test]
    fn class_labels() {
        assert_eq!(
            Language::English.text(CharacterClass::Numbers.into()),
            "Numbers"
        );
        assert_eq!(Language::Arabic.text(CharacterClass::Symbols.into()), "رموز");
    }
}
