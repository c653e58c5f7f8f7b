//=========================================================================
// Player
//
// The run's single avatar. Sits at a fixed z in front of the camera
// and glides between lanes: lane changes set a target lane, and each
// tick the x position eases toward the target's x until it snaps.
//
//=========================================================================

use glam::Vec3;

use super::Visual;

//=== Player ==============================================================

#[derive(Debug)]
pub struct Player {
    pub position: Vec3,
    pub visual: Visual,
    target_lane: usize,
    is_moving: bool,
}

impl Player {
    pub const MODEL_PATH: &'static str = "models/player.glb";

    /// Fraction of the remaining distance covered per tick.
    const LERP_RATE: f32 = 0.1;

    /// Snap distance: below this the glide is considered finished.
    const SNAP_EPSILON: f32 = 0.01;

    pub fn new(position: Vec3, target_lane: usize, visual: Visual) -> Self {
        Self {
            position,
            visual,
            target_lane,
            is_moving: false,
        }
    }

    /// Retargets the lane glide. No-op if already headed there.
    pub fn set_target_lane(&mut self, lane: usize) {
        if lane != self.target_lane {
            self.target_lane = lane;
            self.is_moving = true;
        }
    }

    pub fn target_lane(&self) -> usize {
        self.target_lane
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Eases x toward the target lane's x. Inert while the visual is
    /// not ready, so a slow model load never teleports the avatar.
    pub fn glide(&mut self, lane_positions: &[f32]) {
        if !self.is_moving || !self.visual.is_ready() {
            return;
        }
        let Some(&target_x) = lane_positions.get(self.target_lane) else {
            return;
        };

        self.position.x += (target_x - self.position.x) * Self::LERP_RATE;
        if (self.position.x - target_x).abs() < Self::SNAP_EPSILON {
            self.position.x = target_x;
            self.is_moving = false;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::VisualHandle;

    const LANES: [f32; 3] = [-5.0, 0.0, 5.0];

    fn ready_player() -> Player {
        Player::new(
            Vec3::new(0.0, 0.5, 6.0),
            1,
            Visual::Ready(VisualHandle::new(1)),
        )
    }

    #[test]
    fn glide_converges_and_snaps() {
        let mut player = ready_player();
        player.set_target_lane(2);
        assert!(player.is_moving());

        for _ in 0..200 {
            player.glide(&LANES);
        }

        assert_eq!(player.position.x, LANES[2]);
        assert!(!player.is_moving());
    }

    #[test]
    fn retarget_to_current_lane_is_noop() {
        let mut player = ready_player();
        player.set_target_lane(1);
        assert!(!player.is_moving());
    }

    #[test]
    fn pending_player_does_not_move() {
        let mut player = Player::new(
            Vec3::ZERO,
            1,
            Visual::Pending(crate::core::render::LoadTicket::new(0)),
        );
        player.set_target_lane(0);
        player.glide(&LANES);
        assert_eq!(player.position.x, 0.0);
    }
}
