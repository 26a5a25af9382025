//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics system, re-exported from the glam library.

pub use glam::{Vec2, Vec3};

/// Lift a 2D world position into 3D at the given depth.
#[inline]
pub fn with_depth(v: Vec2, z: f32) -> Vec3 {
    Vec3::new(v.x, v.y, z)
}
