//! Collision detection module
//!
//! 2D collision primitives and a static box world that answers the
//! controller's [`PhysicsQuery`] contract. Uses ray-AABB intersection for
//! directional probes and closest-point tests for circle overlaps.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use ledgekit_engine::physics::{StaticWorld, LayerMask, PhysicsQuery};
//! use glam::Vec2;
//!
//! let mut world = StaticWorld::new(Vec2::new(0.0, -9.81));
//! world.add_box(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0), LayerMask::GROUND);
//!
//! if let Some(hit) = world.raycast(Vec2::new(0.0, 5.0), Vec2::NEG_Y, 10.0, LayerMask::GROUND) {
//!     println!("Floor {} units below", hit.distance);
//! }
//! ```

use super::query::{ColliderId, LayerMask, PhysicsQuery, RayHit};
use super::types::Vec2;

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    /// Build a box from two corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Closest point inside the box to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb` - Box to test against
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point; `0.0` when the
///   ray starts inside the box
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(ray_origin: Vec2, ray_dir: Vec2, aabb: &Aabb2) -> Option<f32> {
    // Handle near-zero directions by using large values
    let inv_dir = Vec2::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
    );

    let t1 = (aabb.min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    let t3 = (aabb.min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    if t_max >= t_min && t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

/// Outward normal of the box face nearest to `point`.
pub fn aabb_surface_normal(point: Vec2, aabb: &Aabb2) -> Vec2 {
    let half_extents = (aabb.max - aabb.min) * 0.5;
    let local = point - aabb.center();

    // Normalize to unit box so the dominant axis picks the face
    let nx = if half_extents.x > 0.0 { local.x / half_extents.x } else { 0.0 };
    let ny = if half_extents.y > 0.0 { local.y / half_extents.y } else { 0.0 };

    if nx.abs() >= ny.abs() {
        Vec2::new(nx.signum(), 0.0)
    } else {
        Vec2::new(0.0, ny.signum())
    }
}

/// Whether a circle touches or overlaps the box.
pub fn circle_aabb_overlap(center: Vec2, radius: f32, aabb: &Aabb2) -> bool {
    let closest = aabb.closest_point(center);
    closest.distance_squared(center) <= radius * radius
}

/// A box collider registered in a [`StaticWorld`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub id: ColliderId,
    pub bounds: Aabb2,
    pub layer: LayerMask,
    pub enabled: bool,
}

/// Flat list of box colliders under uniform gravity.
///
/// Good enough for small authored levels and for tests; queries are linear
/// in the number of colliders.
#[derive(Debug, Clone)]
pub struct StaticWorld {
    gravity: Vec2,
    colliders: Vec<BoxCollider>,
    next_id: u32,
}

impl Default for StaticWorld {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, -9.81))
    }
}

impl StaticWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            colliders: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a box and return its handle.
    pub fn add_box(&mut self, a: Vec2, b: Vec2, layer: LayerMask) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(BoxCollider {
            id,
            bounds: Aabb2::new(a, b),
            layer,
            enabled: true,
        });
        id
    }

    pub fn remove(&mut self, id: ColliderId) -> Option<BoxCollider> {
        let index = self.colliders.iter().position(|c| c.id == id)?;
        Some(self.colliders.remove(index))
    }

    pub fn get(&self, id: ColliderId) -> Option<&BoxCollider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// Move a collider. Returns `false` if the handle is unknown.
    pub fn set_bounds(&mut self, id: ColliderId, bounds: Aabb2) -> bool {
        match self.colliders.iter_mut().find(|c| c.id == id) {
            Some(collider) => {
                collider.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn set_enabled(&mut self, id: ColliderId, enabled: bool) -> bool {
        match self.colliders.iter_mut().find(|c| c.id == id) {
            Some(collider) => {
                collider.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxCollider> {
        self.colliders.iter()
    }

    fn active(&self, mask: LayerMask) -> impl Iterator<Item = &BoxCollider> {
        self.colliders
            .iter()
            .filter(move |c| c.enabled && c.layer.intersects(mask))
    }
}

impl PhysicsQuery for StaticWorld {
    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let dir = direction.try_normalize()?;

        let mut best: Option<RayHit> = None;
        for collider in self.active(mask) {
            let Some(t) = ray_aabb_intersect(origin, dir, &collider.bounds) else {
                continue;
            };
            if t > max_distance {
                continue;
            }
            if best.is_some_and(|b| b.distance <= t) {
                continue;
            }
            let point = origin + dir * t;
            best = Some(RayHit {
                collider: collider.id,
                point,
                normal: aabb_surface_normal(point, &collider.bounds),
                distance: t,
            });
        }
        best
    }

    fn overlap_circle_all(&self, point: Vec2, radius: f32, mask: LayerMask) -> Vec<ColliderId> {
        self.active(mask)
            .filter(|c| circle_aabb_overlap(point, radius, &c.bounds))
            .map(|c| c.id)
            .collect()
    }
}
