use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Input(char),
    None,
}

/// Maps only chrome-level keys. Plain characters come back as [`AppAction::Input`]
/// so forms can take them as text; shortcut letters are resolved by the app
/// depending on the active mode.
pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), AppAction::Quit);
    }

    #[test]
    fn plain_letters_are_input() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q'))),
            AppAction::Input('q')
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('ñ'))),
            AppAction::Input('ñ')
        );
    }

    #[test]
    fn chrome_keys_map_to_actions() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), AppAction::Cancel);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), AppAction::NextField);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), AppAction::Submit);
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), AppAction::None);
    }
}
