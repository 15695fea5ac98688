use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::pass::CharacterClass;
use crate::terminal::RawModeGuard;

/// What a keypress asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    ToggleClass(CharacterClass),
    AdjustLength(isize),
    ToggleLanguage,
    Faq,
    Save,
    Redraw,
    Quit,
}

/// Map a key event to a widget action. Unbound keys give `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('1') => Action::ToggleClass(CharacterClass::Lowercase),
        KeyCode::Char('2') => Action::ToggleClass(CharacterClass::Uppercase),
        KeyCode::Char('3') => Action::ToggleClass(CharacterClass::Numbers),
        KeyCode::Char('4') => Action::ToggleClass(CharacterClass::Symbols),
        KeyCode::Left | KeyCode::Char('-') => Action::AdjustLength(-1),
        KeyCode::Right | KeyCode::Char('+') => Action::AdjustLength(1),
        KeyCode::Down => Action::AdjustLength(-10),
        KeyCode::Up => Action::AdjustLength(10),
        KeyCode::Char('l') => Action::ToggleLanguage,
        KeyCode::Char('f') => Action::Faq,
        KeyCode::Char('s') => Action::Save,
        _ => return None,
    };
    Some(action)
}

/// Block until a bound key (or a resize) arrives.
pub fn read_action() -> Action {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            log::warn!("raw mode unavailable: {e}");
            return Action::Quit;
        }
    };

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = action_for(key) {
                    return action;
                }
            }
            Ok(Event::Resize(..)) => return Action::Redraw,
            Ok(_) => {}
            Err(e) => {
                log::warn!("failed to read terminal event: {e}");
                return Action::Quit;
            }
        }
    }
}

/// Block until any key is pressed.
pub fn wait_for_key() {
    let Ok(_guard) = RawModeGuard::new() else {
        return;
    };
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return,
            Ok(_) => {}
            Err(_) => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_plain_c_copies() {
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
    }

    #[test]
    fn digits_toggle_classes() {
        assert_eq!(
            action_for(key(KeyCode::Char('1'))),
            Some(Action::ToggleClass(CharacterClass::Lowercase))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('4'))),
            Some(Action::ToggleClass(CharacterClass::Symbols))
        );
    }

    #[test]
    fn arrows_adjust_length() {
        assert_eq!(action_for(key(KeyCode::Left)), Some(Action::AdjustLength(-1)));
        assert_eq!(action_for(key(KeyCode::Up)), Some(Action::AdjustLength(10)));
    }

    #[test]
    fn unbound_key_ignored() {
        assert_eq!(action_for(key(KeyCode::Char('z'))), None);
        assert_eq!(action_for(key(KeyCode::Tab)), None);
    }
}
