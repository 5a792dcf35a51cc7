use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub quit: String,
    pub quit_alt: String,
    /// Re-read recipients from --file
    pub reload: String,
    /// Pin the full-list tooltip without hovering
    pub toggle_tooltip: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            quit_alt: "Esc".to_string(),
            reload: "r".to_string(),
            toggle_tooltip: "t".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            s if s.chars().count() == 1 => {
                if let Some(ch) = s.chars().next() {
                    // Check for shift modifier if char is uppercase
                    if ch.is_uppercase() {
                        event.code == KeyCode::Char(ch)
                            || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                                && event.modifiers.contains(KeyModifiers::SHIFT))
                    } else {
                        event.code == KeyCode::Char(ch)
                    }
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Space" => "Space".to_string(),
            "Esc" => "Esc".to_string(),
            _ => key_str.to_string(),
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
    fn test_matches() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char('q')), &keys.quit));
        assert!(keys.matches(key(KeyCode::Esc), &keys.quit_alt));
        assert!(!keys.matches(key(KeyCode::Char('r')), &keys.quit));
    }

    #[test]
    fn test_uppercase_with_shift() {
        let keys = KeyConfig::default();
        let shifted = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::SHIFT);
        assert!(keys.matches(shifted, "R"));
        assert!(keys.matches(key(KeyCode::Char('R')), "R"));
        assert!(!keys.matches(key(KeyCode::Char('r')), "R"));
    }
}
