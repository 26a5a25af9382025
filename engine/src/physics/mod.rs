//! Physics module for Ledgekit
//!
//! The controller never talks to a physics engine directly; it asks the
//! questions in [`PhysicsQuery`] and reads/writes a [`Body2D`]. This module
//! defines that contract and ships a small box world that satisfies it.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, gravity in m/s².
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec2, Vec3) re-exported from glam
//! - [`query`] - Layer masks, collider handles and the query trait
//! - [`collision`] - Ray/circle vs AABB tests and the [`StaticWorld`]
//! - [`body`] - Kinematic body integration and box resolution
//! - [`damping`] - Critically damped `smooth_damp`

pub mod body;
pub mod collision;
pub mod damping;
pub mod query;
pub mod types;

pub use body::Body2D;
pub use collision::{
    Aabb2, BoxCollider, StaticWorld, aabb_surface_normal, circle_aabb_overlap, ray_aabb_intersect,
};
pub use damping::smooth_damp;
pub use query::{ColliderId, LayerMask, PhysicsQuery, RayHit};
pub use types::{Vec2, Vec3, with_depth};
