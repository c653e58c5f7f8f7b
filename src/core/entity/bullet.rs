//=========================================================================
// Bullet
//
// Fired from the player's muzzle, travels away from the camera at a
// fixed per-level velocity. Removed on enemy contact or past the far
// plane.
//
//=========================================================================

use glam::Vec3;

use super::{Aabb, Visual};

//=== Bullet ==============================================================

#[derive(Debug)]
pub struct Bullet {
    pub position: Vec3,
    pub visual: Visual,
    speed: f32,
}

impl Bullet {
    pub const MODEL_PATH: &'static str = "models/bullet.glb";

    pub const HALF_EXTENTS: Vec3 = Vec3::new(0.25, 0.25, 0.5);

    /// Spawn offset in front of the firing position.
    pub const MUZZLE_OFFSET: f32 = 3.0;

    /// Builds a bullet just ahead of `origin` (the player's position).
    pub fn new(origin: Vec3, speed: f32, visual: Visual) -> Self {
        Self {
            position: Vec3::new(origin.x, origin.y, origin.z - Self::MUZZLE_OFFSET),
            visual,
            speed,
        }
    }

    /// Moves away from the camera. Inert while the visual is not ready.
    pub fn advance(&mut self, dt: f32) {
        if self.visual.is_ready() {
            self.position.z -= self.speed * dt;
        }
    }

    pub fn aabb(&self) -> Option<Aabb> {
        self.visual
            .is_ready()
            .then(|| Aabb::from_center(self.position, Self::HALF_EXTENTS))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::VisualHandle;

    #[test]
    fn spawns_ahead_of_origin() {
        let bullet = Bullet::new(
            Vec3::new(0.0, 0.5, 6.0),
            15.0,
            Visual::Ready(VisualHandle::new(1)),
        );
        assert_eq!(bullet.position.z, 6.0 - Bullet::MUZZLE_OFFSET);
    }

    #[test]
    fn advance_moves_away_from_camera() {
        let mut bullet = Bullet::new(Vec3::ZERO, 15.0, Visual::Ready(VisualHandle::new(1)));
        let z0 = bullet.position.z;
        bullet.advance(1.0);
        assert_eq!(bullet.position.z, z0 - 15.0);
    }

    #[test]
    fn pending_bullet_is_inert() {
        let mut bullet = Bullet::new(
            Vec3::ZERO,
            15.0,
            Visual::Pending(crate::core::render::LoadTicket::new(0)),
        );
        let z0 = bullet.position.z;
        bullet.advance(1.0);
        assert_eq!(bullet.position.z, z0);
        assert!(bullet.aabb().is_none());
    }
}
