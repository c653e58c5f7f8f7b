//=========================================================================
// Enemy
//
// Advances toward the camera at a per-level speed and soaks one point
// of damage per colliding bullet. Defeated exactly when health reaches
// zero.
//
//=========================================================================

use glam::Vec3;

use super::{Aabb, Visual};

//=== Enemy ===============================================================

#[derive(Debug)]
pub struct Enemy {
    pub position: Vec3,
    pub visual: Visual,
    health: u32,
    speed: f32,
}

impl Enemy {
    /// Model asset requested for every enemy spawn.
    pub const MODEL_PATH: &'static str = "models/zombie.glb";

    /// Collision half-extents of the enemy model.
    pub const HALF_EXTENTS: Vec3 = Vec3::new(0.75, 1.0, 1.0);

    pub fn new(position: Vec3, health: u32, speed: f32, visual: Visual) -> Self {
        Self {
            position,
            visual,
            health,
            speed,
        }
    }

    /// Moves toward the camera. Inert while the visual is not ready.
    pub fn advance(&mut self, dt: f32) {
        if self.visual.is_ready() {
            self.position.z += self.speed * dt;
        }
    }

    /// Applies one point of bullet damage. Health never increases and
    /// never wraps below zero.
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// `is_defeated ⇔ health == 0`.
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Collision volume, available only once the visual has resolved.
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

    fn ready_enemy(health: u32) -> Enemy {
        Enemy::new(
            Vec3::new(0.0, 0.5, -55.0),
            health,
            5.0,
            Visual::Ready(VisualHandle::new(1)),
        )
    }

    #[test]
    fn defeated_exactly_when_health_reaches_zero() {
        let mut enemy = ready_enemy(2);
        assert!(!enemy.is_defeated());

        enemy.hit();
        assert!(!enemy.is_defeated());
        assert_eq!(enemy.health(), 1);

        enemy.hit();
        assert!(enemy.is_defeated());
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn health_saturates_at_zero() {
        let mut enemy = ready_enemy(1);
        enemy.hit();
        enemy.hit();
        assert_eq!(enemy.health(), 0);
        assert!(enemy.is_defeated());
    }

    #[test]
    fn advance_moves_toward_camera() {
        let mut enemy = ready_enemy(1);
        let z0 = enemy.position.z;
        enemy.advance(0.5);
        assert!(enemy.position.z > z0);
    }

    #[test]
    fn pending_enemy_neither_moves_nor_collides() {
        let mut enemy = Enemy::new(
            Vec3::ZERO,
            1,
            5.0,
            Visual::Pending(crate::core::render::LoadTicket::new(0)),
        );
        enemy.advance(1.0);
        assert_eq!(enemy.position, Vec3::ZERO);
        assert!(enemy.aabb().is_none());
    }
}
