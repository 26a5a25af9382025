//! Simple Player Movement
//!
//! The bare-bones alternative to [`CharacterController2D`](super::CharacterController2D):
//! horizontal velocity follows the input axis directly and the jump key adds
//! an upward impulse. No ground check, no smoothing, no wall or crouch logic.
//! Useful for prototyping levels before the full controller is tuned.
//!
//! This is a library-only alternative: [`Stage`](crate::game::Stage) and the
//! `platformer-sim` binary always drive the full controller. Hosts that want
//! this model call it from their own fixed tick.
//!
//! # Example
//!
//! ```rust,ignore
//! let movement = SimplePlayerMovement::new(SimpleMovementConfig::default())?;
//! for _ in 0..clock.advance(delta_time) {
//!     movement.update(&mut body, input.horizontal(), input.take_intent().jump);
//!     world.step_body(&mut body, clock.timestep(), LayerMask::GROUND);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_non_negative};
use crate::physics::Body2D;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleMovementConfig {
    /// Horizontal speed at full input (m/s)
    pub move_speed: f32,
    /// Upward impulse applied on jump (N·s)
    pub jump_impulse: f32,
    /// Body mass used to turn the impulse into a velocity change (kg)
    pub mass: f32,
}

impl Default for SimpleMovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.5,
            jump_impulse: 6.5,
            mass: 1.0,
        }
    }
}

/// Direct velocity-setting movement.
#[derive(Debug, Clone, Default)]
pub struct SimplePlayerMovement {
    config: SimpleMovementConfig,
}

impl SimplePlayerMovement {
    pub fn new(config: SimpleMovementConfig) -> Result<Self, ConfigError> {
        ensure_non_negative("move_speed", config.move_speed)?;
        ensure_non_negative("jump_impulse", config.jump_impulse)?;
        if !(config.mass.is_finite() && config.mass > 0.0) {
            return Err(ConfigError::invalid("mass", format!("{} must be positive", config.mass)));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimpleMovementConfig {
        &self.config
    }

    /// Set horizontal velocity from `horizontal` and add the jump impulse
    /// on the frame the jump key goes down.
    pub fn update(&self, body: &mut Body2D, horizontal: f32, jump_pressed: bool) {
        body.velocity.x = horizontal * self.config.move_speed;
        if jump_pressed {
            body.velocity.y += self.config.jump_impulse / self.config.mass;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_axis_sets_velocity_directly() {
        let movement = SimplePlayerMovement::default();
        let mut body = Body2D::new(Vec2::ZERO, Vec2::splat(0.5));
        body.velocity = Vec2::new(100.0, -3.0);

        movement.update(&mut body, -1.0, false);
        assert_eq!(body.velocity, Vec2::new(-4.5, -3.0));
    }

    #[test]
    fn test_jump_is_additive_impulse() {
        let movement = SimplePlayerMovement::new(SimpleMovementConfig {
            mass: 2.0,
            ..Default::default()
        })
        .unwrap();
        let mut body = Body2D::new(Vec2::ZERO, Vec2::splat(0.5));
        body.velocity.y = -1.0;

        movement.update(&mut body, 0.0, true);
        assert_eq!(body.velocity.y, -1.0 + 3.25);
    }

    #[test]
    fn test_rejects_zero_mass() {
        let config = SimpleMovementConfig {
            mass: 0.0,
            ..Default::default()
        };
        assert!(SimplePlayerMovement::new(config).is_err());
    }
}
