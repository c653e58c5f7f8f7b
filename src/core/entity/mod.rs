//=========================================================================
// Entity Types
//=========================================================================
//
// The closed set of simulation entities: player, enemy, bullet, road.
//
// Each variant is a plain struct owning its position, its visual state,
// and whatever per-kind data it needs. There is no entity base class;
// the ObjectManager owns one collection per kind and dispatches updates
// directly.
//
// Visual lifecycle:
//   spawn → Visual::Pending(ticket) → Visual::Ready(handle) | Failed
//
// A non-Ready entity is inert: it neither moves nor collides. Load
// completion is observed by polling, never by callback.
//
//=========================================================================

//=== Module Declarations =================================================

mod bullet;
mod enemy;
mod player;
mod road;

//=== Public API ==========================================================

pub use bullet::Bullet;
pub use enemy::Enemy;
pub use player::Player;
pub use road::Road;

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::render::{LoadTicket, VisualHandle};

//=== Visual ==============================================================

/// Load state of an entity's visual representation.
///
/// Entities are spawned `Pending` and promoted by the ObjectManager's
/// per-tick load poll. `Failed` is terminal: the entity stays in its
/// collection but never moves or collides (accepted degradation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    /// Model load requested, handle not yet available.
    Pending(LoadTicket),

    /// Model resolved and attached to the scene graph.
    Ready(VisualHandle),

    /// Model load failed; the entity is permanently inert.
    Failed,
}

impl Visual {
    /// Returns the scene handle if the visual has resolved.
    pub fn handle(&self) -> Option<VisualHandle> {
        match self {
            Visual::Ready(handle) => Some(*handle),
            _ => None,
        }
    }

    /// Whether per-frame movement and collision apply to this entity.
    pub fn is_ready(&self) -> bool {
        matches!(self, Visual::Ready(_))
    }
}

//=== Aabb ================================================================

/// Axis-aligned bounding box used for bullet/enemy intersection tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds a box centered on `center` extending `half_extents` on
    /// each axis.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Standard slab overlap test; touching faces count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center(center, Vec3::splat(0.5))
    }

    #[test]
    fn aabb_overlapping_boxes_intersect() {
        let a = unit_box_at(Vec3::ZERO);
        let b = unit_box_at(Vec3::new(0.4, 0.0, 0.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn aabb_separated_boxes_do_not_intersect() {
        let a = unit_box_at(Vec3::ZERO);
        let b = unit_box_at(Vec3::new(2.0, 0.0, 0.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn aabb_separation_on_any_axis_is_enough() {
        let a = unit_box_at(Vec3::ZERO);
        let b = unit_box_at(Vec3::new(0.0, 0.0, 2.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn aabb_touching_faces_intersect() {
        let a = unit_box_at(Vec3::ZERO);
        let b = unit_box_at(Vec3::new(1.0, 0.0, 0.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn visual_handle_only_when_ready() {
        let pending = Visual::Pending(LoadTicket::new(7));
        let ready = Visual::Ready(VisualHandle::new(3));

        assert!(pending.handle().is_none());
        assert!(!pending.is_ready());
        assert_eq!(ready.handle(), Some(VisualHandle::new(3)));
        assert!(ready.is_ready());
        assert!(Visual::Failed.handle().is_none());
    }
}
