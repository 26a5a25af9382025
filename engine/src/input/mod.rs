//! Input Module
//!
//! Platform-agnostic player input. Key events go in, a per-tick
//! [`MoveIntent`] comes out.
//!
//! Jump is latched: a press is remembered until the next
//! [`PlayerInput::take_intent`], so a press between two physics ticks is
//! never lost and never applied twice.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgekit_engine::input::{KeyCode, PlayerInput};
//!
//! let mut input = PlayerInput::new();
//! input.handle_key(KeyCode::D, true);
//! input.handle_key(KeyCode::Space, true);
//!
//! let intent = input.take_intent();   // horizontal 1.0, jump true
//! let again = input.take_intent();    // horizontal 1.0, jump false
//! ```

pub mod bindings;
pub mod keyboard;

use std::collections::HashSet;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::KeyCode;

use crate::player::MoveIntent;

/// Held keys plus the latched jump press.
#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    bindings: KeyBindings,
    pressed_keys: HashSet<KeyCode>,
    jump_latched: bool,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record a key press or release.
    ///
    /// Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(action) = self.bindings.get_action(key) else {
            return false;
        };

        if pressed {
            // Key repeat arrives as repeated presses; only the first counts
            if action == InputAction::Jump && !self.pressed_keys.contains(&key) {
                self.jump_latched = true;
            }
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }
        true
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.bindings.is_action_pressed(action, &self.pressed_keys)
    }

    /// Horizontal axis: -1, 0 or 1.
    pub fn horizontal(&self) -> f32 {
        let right = self.is_held(InputAction::MoveRight) as i32;
        let left = self.is_held(InputAction::MoveLeft) as i32;
        (right - left) as f32
    }

    pub fn jump_held(&self) -> bool {
        self.is_held(InputAction::Jump)
    }

    pub fn crouch_held(&self) -> bool {
        self.is_held(InputAction::Crouch)
    }

    /// Whether a jump press is waiting to be consumed.
    pub fn jump_pressed(&self) -> bool {
        self.jump_latched
    }

    /// Current intent; consumes the latched jump press.
    pub fn take_intent(&mut self) -> MoveIntent {
        let jump = std::mem::take(&mut self.jump_latched);
        MoveIntent::new(self.horizontal(), self.crouch_held(), jump)
    }

    /// Release everything, e.g. on focus loss.
    pub fn reset(&mut self) {
        self.pressed_keys.clear();
        self.jump_latched = false;
    }
}
