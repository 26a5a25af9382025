//! Level Layout
//!
//! Data-driven level description: solid platforms, the player spawn and
//! the player's collider size. [`LevelConfig::build`] turns it into a
//! [`StaticWorld`] the controller can query.
//!
//! The default layout is a small test course:
//!
//! ```text
//!  |                                          |
//!  |                          ____            | <- tall wall (wall slide)
//!  |     spawn      ######               ____ |
//!  |       @        ######   (ledge)          |
//!  |                (tunnel: crouch)          |
//!  +------------------------------------------+
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_finite};
use crate::physics::{Aabb2, LayerMask, StaticWorld};

/// One solid axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub min: Vec2,
    pub max: Vec2,
    pub layer: LayerMask,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ONE,
            layer: LayerMask::GROUND,
        }
    }
}

impl PlatformConfig {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            max,
            layer: LayerMask::GROUND,
        }
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::new(self.min, self.max)
    }
}

/// Level geometry and spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// World gravity (units/s^2)
    pub gravity: Vec2,
    /// Center of the player's standing collider at spawn
    pub spawn: Vec2,
    /// Half size of the player's standing collider
    pub player_half_extents: Vec2,
    pub platforms: Vec<PlatformConfig>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            spawn: Vec2::new(0.0, 1.0),
            player_half_extents: Vec2::new(0.25, 0.5),
            platforms: vec![
                // Floor
                PlatformConfig::new(Vec2::new(-12.0, -1.0), Vec2::new(30.0, 0.0)),
                // Left boundary
                PlatformConfig::new(Vec2::new(-13.0, -1.0), Vec2::new(-12.0, 12.0)),
                // Low tunnel roof: standing height does not fit underneath
                PlatformConfig::new(Vec2::new(4.0, 0.8), Vec2::new(8.0, 3.0)),
                // Ledge
                PlatformConfig::new(Vec2::new(13.0, 2.5), Vec2::new(16.0, 3.0)),
                // Tall wall on the right
                PlatformConfig::new(Vec2::new(20.0, 0.0), Vec2::new(21.0, 12.0)),
            ],
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.spawn.is_finite()) {
            return Err(ConfigError::invalid("level.gravity", "gravity and spawn must be finite"));
        }
        ensure_finite("level.player_half_extents", self.player_half_extents.x)?;
        ensure_finite("level.player_half_extents", self.player_half_extents.y)?;
        if self.player_half_extents.cmple(Vec2::ZERO).any() {
            return Err(ConfigError::invalid(
                "level.player_half_extents",
                format!("{} must be positive", self.player_half_extents),
            ));
        }
        for platform in &self.platforms {
            if !(platform.min.is_finite() && platform.max.is_finite()) {
                return Err(ConfigError::invalid("level.platforms", "corners must be finite"));
            }
            if platform.min.cmpge(platform.max).any() {
                return Err(ConfigError::invalid(
                    "level.platforms",
                    format!("min {} must be below max {}", platform.min, platform.max),
                ));
            }
        }
        Ok(())
    }

    /// Build the static world for this level.
    pub fn build(&self) -> StaticWorld {
        let mut world = StaticWorld::new(self.gravity);
        for platform in &self.platforms {
            world.add_box(platform.min, platform.max, platform.layer);
        }
        tracing::debug!(platforms = self.platforms.len(), "level built");
        world
    }
}
