//! Kinematic Body
//!
//! A minimal rigid body stand-in: position, velocity and a box collider
//! whose upper part can be switched off while crouching. [`StaticWorld::step_body`]
//! integrates it under gravity and resolves it against solid boxes one axis
//! at a time.

use super::collision::{Aabb2, StaticWorld};
use super::query::{ColliderId, LayerMask, PhysicsQuery};
use super::types::Vec2;

/// Gap kept between a resolved body and the surface it was pushed out of.
const SKIN: f32 = 1e-4;

/// Body state read and written by the character controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Body2D {
    /// Center of the standing collider
    pub position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
    /// Half size of the standing collider
    pub half_extents: Vec2,
    /// Half height of the collider that remains while crouching
    pub crouch_half_height: f32,
    /// Whether the upper, crouch-disabled part of the collider is active
    pub crouch_collider_enabled: bool,
    /// Handle of this body's collider in the world, if registered
    pub collider: Option<ColliderId>,
}

impl Body2D {
    pub fn new(position: Vec2, half_extents: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents,
            crouch_half_height: half_extents.y * 0.5,
            crouch_collider_enabled: true,
            collider: None,
        }
    }

    /// Current collision box, shortened from the top while crouching.
    pub fn bounds(&self) -> Aabb2 {
        bounds_at(self, self.position)
    }

    /// Point at the bottom center of the standing collider.
    pub fn feet(&self) -> Vec2 {
        self.position - Vec2::new(0.0, self.half_extents.y)
    }
}

fn bounds_at(body: &Body2D, position: Vec2) -> Aabb2 {
    let bottom = position.y - body.half_extents.y;
    let height = if body.crouch_collider_enabled {
        body.half_extents.y * 2.0
    } else {
        body.crouch_half_height * 2.0
    };
    Aabb2 {
        min: Vec2::new(position.x - body.half_extents.x, bottom),
        max: Vec2::new(position.x + body.half_extents.x, bottom + height),
    }
}

impl StaticWorld {
    /// Add a collider for `body` on `layer` and store its handle on the body.
    pub fn register_body(&mut self, body: &mut Body2D, layer: LayerMask) -> ColliderId {
        let bounds = body.bounds();
        let id = self.add_box(bounds.min, bounds.max, layer);
        body.collider = Some(id);
        id
    }

    /// Integrate one tick: gravity, then move and resolve x, then y.
    ///
    /// Only colliders on `solid` block the body; the body's own collider is
    /// ignored, as is any box the body already overlapped before moving
    /// (for example after standing up under a low ceiling).
    pub fn step_body(&mut self, body: &mut Body2D, dt: f32, solid: LayerMask) {
        if dt <= 0.0 {
            return;
        }

        body.velocity += self.gravity() * dt;

        let dx = body.velocity.x * dt;
        if dx != 0.0 {
            let before = body.bounds();
            body.position.x += dx;
            for collider in self.blocking(body.collider, solid) {
                let bounds = body.bounds();
                if before.overlaps(&collider) || !bounds.overlaps(&collider) {
                    continue;
                }
                if dx > 0.0 {
                    body.position.x = collider.min.x - body.half_extents.x - SKIN;
                } else {
                    body.position.x = collider.max.x + body.half_extents.x + SKIN;
                }
                body.velocity.x = 0.0;
            }
        }

        let dy = body.velocity.y * dt;
        if dy != 0.0 {
            let before = body.bounds();
            body.position.y += dy;
            for collider in self.blocking(body.collider, solid) {
                let bounds = body.bounds();
                if before.overlaps(&collider) || !bounds.overlaps(&collider) {
                    continue;
                }
                if dy > 0.0 {
                    let height = bounds.max.y - bounds.min.y;
                    body.position.y = collider.min.y - height + body.half_extents.y - SKIN;
                } else {
                    body.position.y = collider.max.y + body.half_extents.y + SKIN;
                }
                body.velocity.y = 0.0;
            }
        }

        if let Some(id) = body.collider {
            self.set_bounds(id, body.bounds());
        }
    }

    fn blocking(&self, own: Option<ColliderId>, solid: LayerMask) -> Vec<Aabb2> {
        self.iter()
            .filter(|c| c.enabled && c.layer.intersects(solid) && Some(c.id) != own)
            .map(|c| c.bounds)
            .collect()
    }
}
