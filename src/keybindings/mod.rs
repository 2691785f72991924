//! Keybinding configuration and resolution
//!
//! Built-in actions have default keys that can be remapped from the
//! `keybindings` section of the configuration file.

mod resolver;

pub use resolver::{KeyAction, KeybindingResolver};

use crossterm::event::{KeyCode, KeyModifiers};

/// A parsed key binding that can be matched against key events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Parse a keybinding string into a KeyBinding
    ///
    /// Supported formats:
    /// - Single character: "q", "t", "+"
    /// - Special keys: "Enter", "Esc", "Tab", "Space", "F1"-"F12"
    /// - With modifiers: "Ctrl+c", "Alt+x", "Ctrl+Shift+p", "Ctrl++"
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty keybinding".to_string());
        }

        // A literal '+' key is written as "+" or "<mods>++"
        let (modifier_part, key_part) = if s == "+" {
            ("", "+")
        } else if let Some(prefix) = s.strip_suffix("++") {
            (prefix, "+")
        } else {
            match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s),
            }
        };

        let mut modifiers = KeyModifiers::NONE;
        if !modifier_part.is_empty() {
            for part in modifier_part.split('+') {
                modifiers |= match part.to_lowercase().as_str() {
                    "ctrl" | "control" => KeyModifiers::CONTROL,
                    "alt" => KeyModifiers::ALT,
                    "shift" => KeyModifiers::SHIFT,
                    _ => return Err(format!("unknown modifier: {}", part)),
                };
            }
        }

        let code = Self::parse_key_code(key_part)?;
        Ok(Self { code, modifiers })
    }

    fn parse_key_code(s: &str) -> Result<KeyCode, String> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyCode::Char(c.to_ascii_lowercase()));
        }

        let lower = s.to_lowercase();
        let code = match lower.as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "space" => KeyCode::Char(' '),
            other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n @ 1..=12) => KeyCode::F(n),
                _ => return Err(format!("unknown key: {}", s)),
            },
        };
        Ok(code)
    }

    /// Check if this binding matches the given key event
    ///
    /// Character keys compare case-insensitively, and a Shift reported for a
    /// character key is ignored unless the binding asks for it.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match (self.code, code) {
            (KeyCode::Char(bound), KeyCode::Char(pressed)) => {
                let modifiers = if self.modifiers.contains(KeyModifiers::SHIFT) {
                    modifiers
                } else {
                    modifiers.difference(KeyModifiers::SHIFT)
                };
                bound.to_ascii_lowercase() == pressed.to_ascii_lowercase()
                    && self.modifiers == modifiers
            }
            (bound, pressed) => bound == pressed && self.modifiers == modifiers,
        }
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (modifier, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(modifier) {
                f.write_str(name)?;
            }
        }

        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}
