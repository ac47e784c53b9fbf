//! Input event types and key binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A plain character, as typed into a text field.
    ///
    /// Shifted characters count; chords with Ctrl or Alt do not.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g., "Ctrl+n", "Enter", "?").
    ///
    /// Shift is implied by the character itself, so `?` matches whether or not
    /// the terminal reports Shift with it.
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_shift = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                "shift" => expected_shift = true,
                _ => expected_key = part,
            }
        }
        // A lone "+" binding splits into two empty parts.
        if binding == "+" {
            expected_key = "+";
        }

        if self.modifiers.ctrl != expected_ctrl || self.modifiers.alt != expected_alt {
            return false;
        }
        let is_char = matches!(self.key, Key::Char(_));
        if !is_char && self.modifiers.shift != expected_shift {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "tab" => self.key == Key::Tab,
            "backtab" => self.key == Key::BackTab,
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            _ => {
                let mut chars = expected_key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => match self.key {
                        Key::Char(k) => k.eq_ignore_ascii_case(&c),
                        _ => false,
                    },
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, mods))
    }

    #[test]
    fn test_plain_char_binding() {
        assert!(press(KeyCode::Char('q'), KeyModifiers::NONE).matches("q"));
        assert!(press(KeyCode::Char('Q'), KeyModifiers::SHIFT).matches("q"));
        assert!(!press(KeyCode::Char('q'), KeyModifiers::CONTROL).matches("q"));
    }

    #[test]
    fn test_shifted_symbol_matches() {
        assert!(press(KeyCode::Char('?'), KeyModifiers::SHIFT).matches("?"));
        assert!(press(KeyCode::Char('?'), KeyModifiers::NONE).matches("?"));
    }

    #[test]
    fn test_ctrl_chord() {
        let ev = press(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(ev.matches("Ctrl+n"));
        assert!(!ev.matches("n"));
        assert_eq!(ev.typed_char(), None);
    }

    #[test]
    fn test_named_keys() {
        assert!(press(KeyCode::Enter, KeyModifiers::NONE).matches("Enter"));
        assert!(press(KeyCode::Esc, KeyModifiers::NONE).matches("Esc"));
        assert!(!press(KeyCode::Tab, KeyModifiers::SHIFT).matches("Tab"));
    }

    #[test]
    fn test_typed_char_keeps_shift() {
        assert_eq!(
            press(KeyCode::Char('G'), KeyModifiers::SHIFT).typed_char(),
            Some('G')
        );
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE).typed_char(), None);
    }
}
