//! Character State
//!
//! Plain data describing the character between ticks.

use serde::{Deserialize, Serialize};

/// Horizontal facing of the character sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Coarse movement state derived from the contact flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionState {
    Grounded,
    Airborne,
    WallSliding,
}

/// Mutable per-character state, owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub facing: Facing,
    pub grounded: bool,
    pub touching_wall: bool,
    /// Implies not grounded, touching a wall, falling, with horizontal input
    pub wall_sliding: bool,
    pub crouching: bool,
    pub remaining_jumps: u32,
    /// Jump force after the last jump's decay; kept for tuning, nothing reads it
    pub current_jump_force: f32,
    /// Set during the wall-jump kick-off; `apply_move` ignores input while set
    pub input_locked: bool,
}

impl CharacterState {
    pub fn new(remaining_jumps: u32, jump_force: f32) -> Self {
        Self {
            facing: Facing::Right,
            grounded: false,
            touching_wall: false,
            wall_sliding: false,
            crouching: false,
            remaining_jumps,
            current_jump_force: jump_force,
            input_locked: false,
        }
    }

    pub fn motion_state(&self) -> MotionState {
        if self.grounded {
            MotionState::Grounded
        } else if self.wall_sliding {
            MotionState::WallSliding
        } else {
            MotionState::Airborne
        }
    }
}
