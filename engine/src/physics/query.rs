//! Physics Query Contract
//!
//! The narrow interface the character controller needs from whatever
//! physics world hosts it: gravity, a directional ray probe, and circle
//! overlap probes filtered by layer.
//!
//! Anything that can answer these queries (a full physics engine, a tile
//! map, a test double) can drive [`CharacterController2D`](crate::player::CharacterController2D).

use serde::{Deserialize, Serialize};

use super::types::Vec2;

/// Bitmask of collision layers a query should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Solid level geometry the character can stand on or slide along.
    pub const GROUND: LayerMask = LayerMask(1 << 0);
    /// Player-owned colliders.
    pub const PLAYER: LayerMask = LayerMask(1 << 1);

    /// Mask containing only the given layer index (0..32).
    #[inline]
    pub const fn layer(index: u32) -> Self {
        LayerMask(1 << index)
    }

    /// Whether any layer in `other` is also in `self`.
    #[inline]
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn union(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }
}

/// Opaque handle identifying a collider inside a physics world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// Result of a successful ray probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Collider the ray struck first
    pub collider: ColliderId,
    /// World-space contact point
    pub point: Vec2,
    /// Outward surface normal at the contact point
    pub normal: Vec2,
    /// Distance from the ray origin to the contact point
    pub distance: f32,
}

/// Queries the controller issues against the host physics world.
pub trait PhysicsQuery {
    /// World gravity in units per second squared (typically negative y).
    fn gravity(&self) -> Vec2;

    /// Cast a ray and return the nearest hit within `max_distance` on a layer in `mask`.
    ///
    /// `direction` need not be normalized; a zero direction never hits.
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// Every collider on a layer in `mask` overlapping the circle.
    fn overlap_circle_all(&self, point: Vec2, radius: f32, mask: LayerMask) -> Vec<ColliderId>;

    /// Any one collider on a layer in `mask` overlapping the circle.
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: LayerMask) -> Option<ColliderId> {
        self.overlap_circle_all(point, radius, mask).into_iter().next()
    }
}
