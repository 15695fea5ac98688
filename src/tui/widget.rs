//! Widget state and the actions that change it.

use crate::clipboard::Clipboard;
use crate::i18n::{Language, Message};
use crate::pass::{self, ConfigError, MAX_LENGTH, MIN_LENGTH, Password};
use crate::settings::Settings;

use super::Action;

/// Status line under the widget (the toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    Saved,
    Config(ConfigError),
    Failure(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Config(_) | Notice::Failure(_))
    }

    pub fn text(&self, lang: Language) -> String {
        match self {
            Notice::Copied => lang.text(Message::Copied).to_string(),
            Notice::Saved => lang.text(Message::SettingsSaved).to_string(),
            Notice::Config(e) => crate::cli::prompts::config_error_text(e, lang),
            Notice::Failure(msg) => msg.clone(),
        }
    }
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowFaq,
    Quit,
}

pub struct Widget {
    pub settings: Settings,
    pub password: Option<Password>,
    pub notice: Option<Notice>,
    clipboard: Clipboard,
}

impl Widget {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            notice: None,
            clipboard: Clipboard::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        self.notice = None;
        match action {
            Action::Generate => self.generate(),
            Action::Copy => self.copy(),
            Action::ToggleClass(class) => self.settings.classes.toggle(class),
            Action::AdjustLength(delta) => self.adjust_length(delta),
            Action::ToggleLanguage => self.settings.language = self.settings.language.toggle(),
            Action::Save => self.save(),
            Action::Faq => return Flow::ShowFaq,
            Action::Quit => return Flow::Quit,
            Action::Redraw => {}
        }
        Flow::Continue
    }

    /// Replace the password. On error the previous password stays on screen.
    pub fn generate(&mut self) {
        match pass::generate(&self.settings.config()) {
            Ok(password) => self.password = Some(password),
            Err(e) => {
                log::debug!("generation rejected: {e}");
                self.notice = Some(Notice::Config(e));
            }
        }
    }

    fn adjust_length(&mut self, delta: isize) {
        let length = self.settings.length as isize + delta;
        self.settings.length = length.clamp(MIN_LENGTH as isize, MAX_LENGTH as isize) as usize;
    }

    fn copy(&mut self) {
        let Some(password) = &self.password else {
            return;
        };
        self.notice = Some(match self.clipboard.copy(password.as_str()) {
            Ok(()) => Notice::Copied,
            Err(e) => {
                log::warn!("{e}");
                Notice::Failure(e.to_string())
            }
        });
    }

    fn save(&mut self) {
        self.notice = Some(match self.settings.save_to_file() {
            Ok(()) => Notice::Saved,
            Err(e) => {
                log::warn!("{e}");
                Notice::Failure(e.to_string())
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClasses, CharacterClass};

    #[test]
    fn length_is_clamped() {
        let mut widget = Widget::new(Settings::default());
        widget.apply(Action::AdjustLength(-100));
        assert_eq!(widget.settings.length, MIN_LENGTH);
        widget.apply(Action::AdjustLength(1000));
        assert_eq!(widget.settings.length, MAX_LENGTH);
        widget.apply(Action::AdjustLength(-1));
        assert_eq!(widget.settings.length, MAX_LENGTH - 1);
    }

    #[test]
    fn generate_uses_current_settings() {
        let mut widget = Widget::new(Settings::default());
        widget.apply(Action::ToggleClass(CharacterClass::Uppercase));
        widget.apply(Action::ToggleClass(CharacterClass::Symbols));
        widget.apply(Action::AdjustLength(4));
        assert_eq!(widget.apply(Action::Generate), Flow::Continue);

        let password = widget.password.as_ref().unwrap();
        assert_eq!(password.len(), 20);
        assert!(
            password
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert_eq!(widget.notice, None);
    }

    #[test]
    fn empty_classes_keep_old_password() {
        let mut widget = Widget::new(Settings::default());
        widget.generate();
        let before = widget.password.clone();

        widget.settings.classes = CharClasses::empty();
        widget.apply(Action::Generate);

        assert_eq!(widget.password, before);
        assert_eq!(widget.notice, Some(Notice::Config(ConfigError::NoClassSelected)));
        assert!(widget.notice.as_ref().unwrap().is_error());
    }

    #[test]
    fn notice_clears_on_next_action() {
        let mut widget = Widget::new(Settings {
            classes: CharClasses::empty(),
            ..Default::default()
        });
        widget.apply(Action::Generate);
        assert!(widget.notice.is_some());
        widget.apply(Action::AdjustLength(1));
        assert!(widget.notice.is_none());
    }

    #[test]
    fn language_toggle_changes_notice_text() {
        let mut widget = Widget::new(Settings::default());
        widget.apply(Action::ToggleLanguage);
        assert_eq!(widget.language(), Language::Arabic);
        let notice = Notice::Config(ConfigError::NoClassSelected);
        assert_eq!(
            notice.text(widget.language()),
            Language::Arabic.text(Message::NoClassSelected)
        );
    }

    #[test]
    fn copy_without_password_is_noop() {
        let mut widget = Widget::new(Settings::default());
        assert_eq!(widget.apply(Action::Copy), Flow::Continue);
        assert_eq!(widget.notice, None);
    }

    #[test]
    fn faq_and_quit_flow() {
        let mut widget = Widget::new(Settings::default());
        assert_eq!(widget.apply(Action::Faq), Flow::ShowFaq);
        assert_eq!(widget.apply(Action::Quit), Flow::Quit);
    }
}
