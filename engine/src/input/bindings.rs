//! Input Bindings Module
//!
//! Maps physical keys to the logical platformer actions, allowing for
//! remapping without touching controller code.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical input actions for a side-view character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Run left (default: A)
    MoveLeft,
    /// Run right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Crouch (default: S)
    Crouch,
}

/// One-to-one map between physical keys and logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout:
    /// A = MoveLeft, D = MoveRight, Space = Jump, S = Crouch.
    pub fn new() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::S, InputAction::Crouch);
        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Build from explicit pairs; later pairs override earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (KeyCode, InputAction)>) -> Self {
        let mut bindings = Self::empty();
        for (key, action) in pairs {
            bindings.bind(key, action);
        }
        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Any previous binding of either the key or the action is removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Whether the key bound to `action` is in `pressed_keys`.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }
}
