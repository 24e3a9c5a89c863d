//! Key chords → actions, per context.

use crate::core::event::Key;
use crate::core::Action;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    /// Every page: edit, most recent, search, index.
    Navigation,
    /// The editing page; falls through to navigation.
    Edit,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "navigation" | "nav" | "global" => Some(Self::Navigation),
            "edit" | "editor" | "navedit" => Some(Self::Edit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingService {
    navigation: FxHashMap<Key, Action>,
    edit: FxHashMap<Key, Action>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            navigation: default_navigation_keybindings(),
            edit: default_edit_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Action> {
        match context {
            KeybindingContext::Navigation => self.navigation.get(key).copied(),
            KeybindingContext::Edit => self
                .edit
                .get(key)
                .or_else(|| self.navigation.get(key))
                .copied(),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Action> {
        match context {
            KeybindingContext::Navigation => &self.navigation,
            KeybindingContext::Edit => &self.edit,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, action: Action) {
        self.map_mut(context).insert(key, action);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Action> {
        self.map_mut(context).remove(key)
    }

    /// Applies user rules on top of the defaults. Returns how many were
    /// accepted; the rest are logged and skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "keybinding rule skipped: unparsable key");
                continue;
            };
            if !key.modifier {
                tracing::warn!(key = %rule.key, "keybinding rule skipped: chord needs a modifier");
                continue;
            }
            let Some(action) = Action::from_name(&rule.command) else {
                tracing::warn!(command = %rule.command, "keybinding rule skipped: unknown command");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Navigation,
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %value, "keybinding rule skipped: unknown context");
                        continue;
                    }
                },
            };
            self.bind(context, key, action);
            applied += 1;
        }
        applied
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Action> {
        match context {
            KeybindingContext::Navigation => &mut self.navigation,
            KeybindingContext::Edit => &mut self.edit,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_navigation_keybindings() -> FxHashMap<Key, Action> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::modifier('e'), Action::Edit);
    bindings.insert(Key::modifier('m'), Action::MostRecent);
    // C-s is save in the edit view, so search lives on C-k
    bindings.insert(Key::modifier('k'), Action::Search);
    bindings.insert(Key::modifier('i'), Action::Index);

    bindings
}

fn default_edit_keybindings() -> FxHashMap<Key, Action> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::modifier('s'), Action::Save);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
