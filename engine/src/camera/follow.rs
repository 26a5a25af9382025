//! Camera Follow Module
//!
//! Side-view follow camera. Every fixed tick the camera eases toward its
//! target, with the target's x/y clamped into a rectangle so the view never
//! shows past the level edges. Depth is a fixed constant.
//!
//! The clamp is applied to the target's raw position. The offset only feeds
//! [`CameraFollow::desired_position`], which is kept for inspection.
//!
//! The easing is a single lerp step per tick by `smoothing`, so the feel
//! depends on the tick rate; drive it from the fixed tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgekit_engine::camera::{CameraConfig, CameraFollow};
//!
//! let mut camera = CameraFollow::new(CameraConfig::default(), start)?;
//!
//! // Each fixed tick:
//! camera.on_fixed_tick(player_position);
//! // Each frame:
//! camera.on_variable_tick(delta_time);
//! render_with(camera.position(), camera.size());
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::shake::{CameraShake, ShakeConfig};
use crate::error::{ConfigError, ensure_range};

/// Camera depth used by side-view scenes.
pub const DEFAULT_DEPTH: f32 = -10.0;

/// Camera rig tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Added to the target to form the desired position
    pub offset: Vec3,
    /// Per-tick lerp weight toward the clamped target (0..=1)
    pub smoothing: f32,
    /// Lower-left corner of the allowed camera center
    pub bounds_min: Vec2,
    /// Upper-right corner of the allowed camera center
    pub bounds_max: Vec2,
    /// Fixed z of the camera
    pub depth: f32,
    /// Orthographic half-height at rest
    pub size: f32,
    pub shake: ShakeConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            smoothing: 0.125,
            bounds_min: Vec2::new(-100.0, -100.0),
            bounds_max: Vec2::new(100.0, 100.0),
            depth: DEFAULT_DEPTH,
            size: 5.0,
            shake: ShakeConfig::default(),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_range("camera.smoothing", self.smoothing, 0.0, 1.0)?;
        if !(self.offset.is_finite() && self.depth.is_finite()) {
            return Err(ConfigError::invalid("camera.offset", "offset and depth must be finite"));
        }
        if !(self.bounds_min.is_finite() && self.bounds_max.is_finite()) {
            return Err(ConfigError::invalid("camera.bounds", "bounds must be finite"));
        }
        if self.bounds_min.cmpgt(self.bounds_max).any() {
            return Err(ConfigError::invalid(
                "camera.bounds",
                format!("min {} exceeds max {}", self.bounds_min, self.bounds_max),
            ));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::invalid(
                "camera.size",
                format!("{} must be positive", self.size),
            ));
        }
        self.shake.validate()
    }

    /// Clamp a target into the bounds and place it at the camera depth.
    pub fn constrain(&self, target: Vec3) -> Vec3 {
        let x = target.x.max(self.bounds_min.x).min(self.bounds_max.x);
        let y = target.y.max(self.bounds_min.y).min(self.bounds_max.y);
        Vec3::new(x, y, self.depth)
    }
}

/// Bounded, smoothed follow camera with zoom shake.
#[derive(Debug, Clone)]
pub struct CameraFollow {
    config: CameraConfig,
    position: Vec3,
    desired_position: Vec3,
    shake: CameraShake,
}

impl CameraFollow {
    /// Create a camera at `start`. Fails if `config` does not validate.
    pub fn new(config: CameraConfig, start: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shake: CameraShake::new(config.shake, config.size),
            config,
            position: start,
            desired_position: start,
        })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Target plus offset from the last tick.
    pub fn desired_position(&self) -> Vec3 {
        self.desired_position
    }

    /// Current orthographic size, including any shake.
    pub fn size(&self) -> f32 {
        self.shake.size()
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    pub fn shake_state(&self) -> &CameraShake {
        &self.shake
    }

    /// Move one step toward the clamped target.
    pub fn on_fixed_tick(&mut self, target: Vec3) {
        self.desired_position = target + self.config.offset;
        let constrained = self.config.constrain(target);
        self.position = self.position.lerp(constrained, self.config.smoothing);
    }

    /// Advance the shake timeline.
    pub fn on_variable_tick(&mut self, delta_time: f32) {
        self.shake.update(delta_time);
    }

    /// Jump straight to the clamped target, e.g. after a respawn.
    pub fn snap_to(&mut self, target: Vec3) {
        self.desired_position = target + self.config.offset;
        self.position = self.config.constrain(target);
    }

    /// Start a zoom shake; a shake already running is restarted.
    pub fn shake(&mut self) {
        debug!(restarted = self.shake.is_active(), "camera shake");
        self.shake.trigger();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    fn bounded() -> CameraConfig {
        CameraConfig {
            bounds_min: Vec2::new(0.0, -2.0),
            bounds_max: Vec2::new(20.0, 8.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_constrain_clamps_and_sets_depth() {
        let config = bounded();
        assert_eq!(config.constrain(Vec3::new(-5.0, 3.0, 7.0)), Vec3::new(0.0, 3.0, -10.0));
        assert_eq!(config.constrain(Vec3::new(25.0, -9.0, 0.0)), Vec3::new(20.0, -2.0, -10.0));
        assert_eq!(config.constrain(Vec3::new(4.0, 9.0, 0.0)), Vec3::new(4.0, 8.0, -10.0));
    }

    #[test]
    fn test_clamp_ignores_offset() {
        let config = CameraConfig {
            offset: Vec3::new(3.0, 3.0, 0.0),
            ..bounded()
        };
        let mut camera = CameraFollow::new(config, Vec3::new(0.0, 0.0, -10.0)).unwrap();
        camera.snap_to(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(camera.position(), Vec3::new(1.0, 1.0, -10.0));
        assert_eq!(camera.desired_position(), Vec3::new(4.0, 4.0, 0.0));
    }

    #[test]
    fn test_single_step_lerp() {
        let mut camera = CameraFollow::new(bounded(), Vec3::new(0.0, 0.0, -10.0)).unwrap();
        camera.on_fixed_tick(Vec3::new(8.0, 0.0, 0.0));
        assert!(approx_vec(camera.position(), Vec3::new(1.0, 0.0, -10.0)));
    }

    #[test]
    fn test_each_tick_stays_on_segment() {
        let mut camera = CameraFollow::new(bounded(), Vec3::new(0.0, 0.0, -4.0)).unwrap();
        let target = Vec3::new(50.0, 50.0, 0.0);
        let clamped = camera.config().constrain(target);

        for _ in 0..40 {
            let before = camera.position();
            camera.on_fixed_tick(target);
            let expected = before + (clamped - before) * 0.125;
            assert!(approx_vec(camera.position(), expected));
        }
        assert!(camera.position().x <= 20.0 && camera.position().y <= 8.0);
    }

    #[test]
    fn test_converges_inside_bounds() {
        let mut camera = CameraFollow::new(bounded(), Vec3::ZERO).unwrap();
        for _ in 0..300 {
            camera.on_fixed_tick(Vec3::new(-40.0, 100.0, 3.0));
        }
        assert!(approx_vec(camera.position(), Vec3::new(0.0, 8.0, -10.0)));
    }

    #[test]
    fn test_shake_runs_alongside_follow() {
        let mut camera = CameraFollow::new(bounded(), Vec3::ZERO).unwrap();
        camera.shake();
        assert!(camera.is_shaking());

        camera.on_fixed_tick(Vec3::new(8.0, 0.0, 0.0));
        camera.on_variable_tick(0.03);
        assert!(camera.size() < 5.0);
        assert!(camera.position().x > 0.0);

        camera.on_variable_tick(0.5);
        assert_eq!(camera.size(), 5.0);
        assert!(!camera.is_shaking());
    }

    #[test]
    fn test_invalid_configs() {
        let bad = CameraConfig {
            smoothing: 1.5,
            ..Default::default()
        };
        assert!(CameraFollow::new(bad, Vec3::ZERO).is_err());

        let bad = CameraConfig {
            bounds_min: Vec2::new(5.0, 0.0),
            bounds_max: Vec2::new(0.0, 10.0),
            ..Default::default()
        };
        assert!(matches!(
            CameraFollow::new(bad, Vec3::ZERO),
            Err(ConfigError::Invalid { field: "camera.bounds", .. })
        ));

        let bad = CameraConfig {
            size: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
