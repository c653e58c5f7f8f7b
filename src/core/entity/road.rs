//=========================================================================
// Road Segment
//
// A fixed-length stretch of road scrolling toward (and past) the
// camera. Segments are recycled by repositioning rather than destroyed,
// so the visible road never breaks.
//
// A segment's origin is its trailing (camera-side) edge: it covers the
// z range [origin - LENGTH, origin].
//
//=========================================================================

use glam::Vec3;

use super::Visual;

//=== Road ================================================================

#[derive(Debug)]
pub struct Road {
    pub position: Vec3,
    pub visual: Visual,
    speed: f32,
}

impl Road {
    pub const MODEL_PATH: &'static str = "models/road.glb";

    /// Length of one segment along z.
    pub const LENGTH: f32 = 193.0;

    pub fn new(position: Vec3, speed: f32, visual: Visual) -> Self {
        Self {
            position,
            visual,
            speed,
        }
    }

    /// Scrolls toward the camera. Inert while the visual is not ready.
    pub fn advance(&mut self, dt: f32) {
        if self.visual.is_ready() {
            self.position.z += self.speed * dt;
        }
    }

    /// Scroll speed follows the active level config.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Covered z range as `(near, far)` with `far < near`.
    pub fn span(&self) -> (f32, f32) {
        (self.position.z, self.position.z - Self::LENGTH)
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
    fn span_extends_one_length_behind_origin() {
        let road = Road::new(
            Vec3::new(0.0, 0.0, 40.0),
            10.0,
            Visual::Ready(VisualHandle::new(1)),
        );
        let (near, far) = road.span();
        assert_eq!(near, 40.0);
        assert_eq!(far, 40.0 - Road::LENGTH);
    }

    #[test]
    fn advance_scrolls_toward_camera() {
        let mut road = Road::new(Vec3::ZERO, 10.0, Visual::Ready(VisualHandle::new(1)));
        road.advance(0.5);
        assert_eq!(road.position.z, 5.0);
    }
}
