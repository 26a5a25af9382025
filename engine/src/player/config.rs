//! Character Movement Tuning
//!
//! Authoring-time constants for [`CharacterController2D`](super::CharacterController2D).
//! Read-only once the controller is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_finite, ensure_non_negative, ensure_range};
use crate::physics::LayerMask;

/// Jump allotment granted while sliding down a wall (allows a wall jump plus one air jump).
pub const WALL_SLIDE_JUMPS: u32 = 2;

/// Radius of the ground and ceiling overlap probes.
pub const PROBE_RADIUS: f32 = 0.2;

/// Tuning for the 2D character controller.
///
/// Every field has a default, so a JSON file only needs the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Vertical velocity set on jump (m/s).
    pub jump_force: f32,

    /// Downward speed held while wall-sliding (m/s).
    pub wall_slide_speed: f32,

    /// Fraction of run speed kept while crouching (0..=1).
    pub crouch_speed: f32,

    /// Smoothing time for horizontal velocity changes (seconds).
    pub movement_smoothing: f32,

    /// Horizontal speed at full input (m/s).
    pub run_speed: f32,

    /// Whether steering and crouch apply while airborne.
    pub air_control: bool,

    /// Layers treated as ground, ceiling and wall.
    pub ground_layer: LayerMask,

    /// Jumps restored on landing.
    pub number_of_jumps: u32,

    /// Jumps restored every tick while wall-sliding.
    pub wall_slide_jumps: u32,

    /// Gravity scale applied while falling (1 = plain gravity).
    pub fall_multiplier: f32,

    /// Gravity scale applied while rising with jump released.
    pub low_jump_multiplier: f32,

    /// Length of the wall probe ray.
    pub wall_check_distance: f32,

    /// Radius of the ground overlap probe.
    pub ground_check_radius: f32,

    /// Radius of the ceiling overlap probe.
    pub ceiling_check_radius: f32,

    /// Ground probe position relative to the body center (x mirrored by facing).
    pub ground_check_offset: Vec2,

    /// Ceiling probe position relative to the body center (x mirrored by facing).
    pub ceiling_check_offset: Vec2,

    /// Wall probe origin relative to the body center (x mirrored by facing).
    pub wall_check_offset: Vec2,

    /// How long input stays locked after a wall jump (seconds).
    pub wall_jump_lock: f32,

    /// Fraction of `jump_force` stored as the current jump force after a jump.
    pub jump_force_decay: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            wall_slide_speed: 2.0,
            crouch_speed: 0.36,
            movement_smoothing: 0.05,
            run_speed: 10.0,
            air_control: false,
            ground_layer: LayerMask::GROUND,
            number_of_jumps: 1,
            wall_slide_jumps: WALL_SLIDE_JUMPS,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            wall_check_distance: 0.4,
            ground_check_radius: PROBE_RADIUS,
            ceiling_check_radius: PROBE_RADIUS,
            ground_check_offset: Vec2::new(0.0, -0.5),
            ceiling_check_offset: Vec2::new(0.0, 0.5),
            wall_check_offset: Vec2::new(0.3, 0.0),
            wall_jump_lock: 0.3,
            jump_force_decay: 0.6,
        }
    }
}

impl MovementConfig {
    /// Upper bound on remaining jumps: the larger of the landing and wall-slide allotments.
    #[inline]
    pub fn max_jumps(&self) -> u32 {
        self.number_of_jumps.max(self.wall_slide_jumps)
    }

    /// Check every value is usable. Called when a controller is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("jump_force", self.jump_force)?;
        ensure_non_negative("wall_slide_speed", self.wall_slide_speed)?;
        ensure_range("crouch_speed", self.crouch_speed, 0.0, 1.0)?;
        ensure_non_negative("movement_smoothing", self.movement_smoothing)?;
        ensure_non_negative("run_speed", self.run_speed)?;
        ensure_finite("fall_multiplier", self.fall_multiplier)?;
        ensure_finite("low_jump_multiplier", self.low_jump_multiplier)?;
        ensure_non_negative("wall_check_distance", self.wall_check_distance)?;
        ensure_non_negative("ground_check_radius", self.ground_check_radius)?;
        ensure_non_negative("ceiling_check_radius", self.ceiling_check_radius)?;
        ensure_non_negative("wall_jump_lock", self.wall_jump_lock)?;
        ensure_range("jump_force_decay", self.jump_force_decay, 0.0, 1.0)?;

        for (field, v) in [
            ("ground_check_offset", self.ground_check_offset),
            ("ceiling_check_offset", self.ceiling_check_offset),
            ("wall_check_offset", self.wall_check_offset),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::invalid(field, format!("{v} is not finite")));
            }
        }

        if self.ground_layer == LayerMask::NONE {
            return Err(ConfigError::invalid(
                "ground_layer",
                "mask selects no layers; the character could never land",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MovementConfig::default();
        assert_eq!(config.wall_slide_speed, 2.0);
        assert_eq!(config.crouch_speed, 0.36);
        assert_eq!(config.number_of_jumps, 1);
        assert_eq!(config.fall_multiplier, 2.5);
        assert_eq!(config.low_jump_multiplier, 2.0);
        assert_eq!(config.wall_check_distance, 0.4);
        assert!(!config.air_control);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_jumps() {
        let mut config = MovementConfig::default();
        assert_eq!(config.max_jumps(), 2);
        config.number_of_jumps = 3;
        assert_eq!(config.max_jumps(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = MovementConfig {
            crouch_speed: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Invalid { field: "crouch_speed", .. })
        ));

        let bad = MovementConfig {
            movement_smoothing: -0.1,
            ..Default::default()
        };
        assert!(bad.validate().is_err());

        let bad = MovementConfig {
            ground_layer: LayerMask::NONE,
            ..Default::default()
        };
        assert!(bad.validate().is_err());

        let bad = MovementConfig {
            wall_check_offset: Vec2::new(f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MovementConfig =
            serde_json::from_str(r#"{ "jump_force": 9.5, "air_control": true }"#).unwrap();
        assert_eq!(config.jump_force, 9.5);
        assert!(config.air_control);
        assert_eq!(config.wall_slide_speed, 2.0);
        assert_eq!(config.ground_layer, LayerMask::GROUND);
    }
}
