//! Modifier+key chords → clicks on host-provided targets.

use crate::core::{Action, Key, KeyEvent};
use crate::kernel::services::adapters::{KeybindingContext, KeybindingService};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Something the host can activate, e.g. a navigation link.
pub trait ActionTarget: Send + Sync {
    fn click(&self);
}

impl<F> ActionTarget for F
where
    F: Fn() + Send + Sync,
{
    fn click(&self) {
        self()
    }
}

/// Targets resolved once at startup. Any of them may be absent.
#[derive(Clone, Default)]
pub struct NavTargets {
    targets: FxHashMap<Action, Arc<dyn ActionTarget>>,
}

impl NavTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: Action, target: Arc<dyn ActionTarget>) -> Self {
        self.targets.insert(action, target);
        self
    }

    pub fn set(&mut self, action: Action, target: Arc<dyn ActionTarget>) {
        self.targets.insert(action, target);
    }

    pub fn get(&self, action: Action) -> Option<&Arc<dyn ActionTarget>> {
        self.targets.get(&action)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl std::fmt::Debug for NavTargets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.targets.keys()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDispatch {
    Ignored,
    /// `clicked` is false when the action has no target.
    Handled { action: Action, clicked: bool },
}

impl KeyDispatch {
    pub fn prevent_default(&self) -> bool {
        matches!(self, KeyDispatch::Handled { .. })
    }
}

pub struct CommandDispatcher {
    keymap: Arc<KeybindingService>,
    targets: Arc<NavTargets>,
    context: KeybindingContext,
}

impl CommandDispatcher {
    pub fn new(
        keymap: Arc<KeybindingService>,
        targets: Arc<NavTargets>,
        context: KeybindingContext,
    ) -> Self {
        Self {
            keymap,
            targets,
            context,
        }
    }

    pub fn context(&self) -> KeybindingContext {
        self.context
    }

    pub fn handle_key(&self, event: &KeyEvent) -> KeyDispatch {
        if !event.modifier_held() {
            return KeyDispatch::Ignored;
        }
        let Some(key) = Key::from_event(event) else {
            return KeyDispatch::Ignored;
        };
        let Some(action) = self.keymap.resolve(self.context, &key) else {
            return KeyDispatch::Ignored;
        };

        let clicked = match self.targets.get(action) {
            Some(target) => {
                target.click();
                true
            }
            None => {
                tracing::debug!(action = action.name(), "no target for action");
                false
            }
        };
        KeyDispatch::Handled { action, clicked }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatch.rs"]
mod tests;
