//! Key → command table for the composer.

use super::settings::{parse_command, parse_keybinding};
use crate::core::event::Key;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    /// Bound command for `key`, else a plain character insert.
    pub fn resolve(&self, key: &Key) -> Option<Command> {
        if let Some(command) = self.bindings.get(key) {
            return Some(command.clone());
        }
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                };
                Some(Command::InsertChar(ch))
            }
            KeyCode::Tab if key.modifiers.is_empty() => Some(Command::InsertChar('\t')),
            _ => None,
        }
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Applies user rules on top of the current table. Returns how many rules
    /// were skipped because the key or command did not parse.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut skipped = 0;
        for rule in rules {
            match (parse_keybinding(&rule.key), parse_command(&rule.command)) {
                (Some(key), Some(command)) => self.bind(key, command),
                _ => {
                    tracing::warn!(key = %rule.key, command = %rule.command, "invalid keybinding rule");
                    skipped += 1;
                }
            }
        }
        skipped
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);

    bindings.insert(Key::simple(KeyCode::Enter), Command::SplitGesture);
    bindings.insert(Key::shift(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::Backspace);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);
    bindings.insert(Key::sup(KeyCode::Char('a')), Command::SelectAll);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::simple(KeyCode::Up), Command::FocusPrevBlock);
    bindings.insert(Key::simple(KeyCode::Down), Command::FocusNextBlock);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
