//! Keybinding resolution from key events to actions

use crossterm::event::{KeyCode, KeyModifiers};

use super::KeyBinding;
use crate::config::KeybindingsConfig;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Application actions
    Quit,
    Help,
    ToggleTheme,
    Increment,
    Reload,
    Cancel,

    // Navigation actions
    MoveUp,
    MoveDown,
    ToggleFocus,
    Select,

    // No action bound to this key
    None,
}

/// Resolves key events to actions based on configuration
pub struct KeybindingResolver {
    // Ordered so the first registered key of an action is its display key
    bindings: Vec<(KeyBinding, KeyAction)>,
}

impl KeybindingResolver {
    /// Create a resolver with default keybindings
    pub fn new() -> Self {
        let mut resolver = Self {
            bindings: Vec::new(),
        };

        resolver.register("q", KeyAction::Quit);
        resolver.register("Ctrl+q", KeyAction::Quit);
        resolver.register("?", KeyAction::Help);
        resolver.register("t", KeyAction::ToggleTheme);
        resolver.register("+", KeyAction::Increment);
        resolver.register("i", KeyAction::Increment);
        resolver.register("r", KeyAction::Reload);
        resolver.register("Ctrl+c", KeyAction::Cancel);

        resolver.register("k", KeyAction::MoveUp);
        resolver.register("Up", KeyAction::MoveUp);
        resolver.register("j", KeyAction::MoveDown);
        resolver.register("Down", KeyAction::MoveDown);
        resolver.register("Tab", KeyAction::ToggleFocus);
        resolver.register("Enter", KeyAction::Select);
        resolver.register("Space", KeyAction::Select);

        resolver
    }

    fn register(&mut self, key_str: &str, action: KeyAction) {
        if let Ok(binding) = KeyBinding::parse(key_str) {
            self.bindings.retain(|(existing, _)| existing != &binding);
            self.bindings.push((binding, action));
        }
    }

    /// Create a resolver from configuration, falling back to defaults
    pub fn from_config(config: Option<&KeybindingsConfig>) -> Self {
        let mut resolver = Self::new();

        if let Some(keybindings) = config {
            resolver.remap(&keybindings.quit, KeyAction::Quit);
            resolver.remap(&keybindings.help, KeyAction::Help);
            resolver.remap(&keybindings.toggle_theme, KeyAction::ToggleTheme);
            resolver.remap(&keybindings.increment, KeyAction::Increment);
            resolver.remap(&keybindings.reload, KeyAction::Reload);
            resolver.remap(&keybindings.cancel, KeyAction::Cancel);
            resolver.remap(&keybindings.move_up, KeyAction::MoveUp);
            resolver.remap(&keybindings.move_down, KeyAction::MoveDown);
            resolver.remap(&keybindings.toggle_focus, KeyAction::ToggleFocus);
            resolver.remap(&keybindings.select, KeyAction::Select);
        }

        resolver
    }

    /// Replace every default key of `action` with the configured one
    ///
    /// Unparseable keys leave the defaults in place; the config validator
    /// reports them.
    fn remap(&mut self, key_opt: &Option<String>, action: KeyAction) {
        let Some(binding) = key_opt.as_deref().and_then(|k| KeyBinding::parse(k).ok()) else {
            return;
        };

        self.bindings.retain(|(_, bound)| bound != &action);
        self.bindings.retain(|(existing, _)| existing != &binding);
        self.bindings.push((binding, action));
    }

    /// Resolve a key event to an action
    pub fn resolve(&self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(code, modifiers))
            .map(|(_, action)| *action)
            .unwrap_or(KeyAction::None)
    }

    /// Display string for every key bound to an action, e.g. "k / Up"
    pub fn binding_display(&self, action: KeyAction) -> String {
        self.bindings
            .iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(binding, _)| binding.to_string())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new()
    }
}
