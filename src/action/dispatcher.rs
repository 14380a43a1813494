use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{default_bindings, parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a dispatcher; configured bindings shadow the built-in ones
    pub fn new(config: &Config) -> Self {
        let mut bindings = config.bindings.clone();
        bindings.extend(default_bindings());

        for binding in &bindings {
            if let Err(e) = parse_key(&binding.key) {
                tracing::warn!(error = %e, "ignoring binding");
            }
        }

        Self { bindings }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| self.matches(binding, &key, mode))
            .and_then(|binding| binding.action.as_deref())
            .and_then(Action::from_str)
    }

    /// Bindings active in `mode`, for the help overlay
    pub fn bindings_for(&self, mode: &Mode) -> Vec<(String, Action)> {
        let mut seen: Vec<Action> = Vec::new();
        let mut result = Vec::new();
        for binding in &self.bindings {
            if !binding
                .mode
                .as_deref()
                .is_none_or(|m| self.mode_matches(m, mode))
            {
                continue;
            }
            let Some(action) = binding.action.as_deref().and_then(Action::from_str) else {
                continue;
            };
            if seen.contains(&action) {
                continue;
            }
            seen.push(action);
            let key = match binding.mods.as_deref() {
                Some(mods) => format!("{}+{}", mods, binding.key),
                None => binding.key.clone(),
            };
            result.push((key, action));
        }
        result
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        if binding_key != key.code {
            return false;
        }

        // Terminals report SHIFT alongside the already-shifted character
        let mut key_mods = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            key_mods.remove(KeyModifiers::SHIFT);
        }
        if parse_modifiers(binding.mods.as_deref()) != key_mods {
            return false;
        }

        if let Some(mode_str) = &binding.mode {
            if !self.mode_matches(mode_str, mode) {
                return false;
            }
        }

        true
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_name_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.to_lowercase().as_str() {
            "grid" => matches!(current_mode, Mode::Grid),
            "tags" => matches!(current_mode, Mode::Tags),
            "dialog" => matches!(current_mode, Mode::Dialog),
            _ => false,
        }
    }
}
