//=========================================================================
// Input System
//=========================================================================
//
// Turns batched key events into game intents.
//
// The only stateful intent is the target lane: each left/right press
// steps it one lane, clamped to `[0, lane_count - 1]`. Confirm and
// pause presses are edge-triggered and reported per frame.
//
// Key-up events are accepted (the platform sends them) but nothing in
// the game is hold-based, so they are ignored here.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};

//=== ControlFrame ========================================================

/// Edge-triggered intents extracted from one frame's input batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFrame {
    /// Start the game / advance past a summary screen.
    pub confirm: bool,

    /// Toggle the pause state.
    pub toggle_pause: bool,
}

//=== LaneControls ========================================================

/// Keyboard → target-lane intent mapper.
pub struct LaneControls {
    target_lane: usize,
    lane_count: usize,
}

impl LaneControls {
    pub fn new(initial_lane: usize, lane_count: usize) -> Self {
        Self {
            target_lane: initial_lane.min(lane_count.saturating_sub(1)),
            lane_count,
        }
    }

    /// Digests one frame's events. Lane steps mutate the persistent
    /// target; confirm/pause come back as per-frame flags.
    pub fn digest(&mut self, events: &[InputEvent]) -> ControlFrame {
        let mut frame = ControlFrame::default();

        for event in events {
            let InputEvent::KeyDown(key) = event else {
                continue;
            };
            match key {
                KeyCode::ArrowLeft | KeyCode::KeyA => {
                    self.target_lane = self.target_lane.saturating_sub(1);
                }
                KeyCode::ArrowRight | KeyCode::KeyD => {
                    if self.target_lane + 1 < self.lane_count {
                        self.target_lane += 1;
                    }
                }
                KeyCode::Space | KeyCode::Enter => frame.confirm = true,
                KeyCode::KeyP | KeyCode::Escape => frame.toggle_pause = true,
            }
        }

        frame
    }

    pub fn target_lane(&self) -> usize {
        self.target_lane
    }

    /// Recenters the intent, used when a level (re)starts.
    pub fn reset(&mut self, lane: usize) {
        self.target_lane = lane.min(self.lane_count.saturating_sub(1));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    #[test]
    fn lane_steps_left_and_right() {
        let mut controls = LaneControls::new(1, 3);

        controls.digest(&[down(KeyCode::ArrowLeft)]);
        assert_eq!(controls.target_lane(), 0);

        controls.digest(&[down(KeyCode::KeyD)]);
        controls.digest(&[down(KeyCode::ArrowRight)]);
        assert_eq!(controls.target_lane(), 2);
    }

    #[test]
    fn lane_is_clamped_at_both_edges() {
        let mut controls = LaneControls::new(1, 3);

        for _ in 0..5 {
            controls.digest(&[down(KeyCode::KeyA)]);
        }
        assert_eq!(controls.target_lane(), 0);

        for _ in 0..5 {
            controls.digest(&[down(KeyCode::KeyD)]);
        }
        assert_eq!(controls.target_lane(), 2);
    }

    #[test]
    fn multiple_steps_in_one_batch_all_apply() {
        let mut controls = LaneControls::new(0, 3);
        controls.digest(&[down(KeyCode::ArrowRight), down(KeyCode::ArrowRight)]);
        assert_eq!(controls.target_lane(), 2);
    }

    #[test]
    fn confirm_and_pause_are_per_frame_flags() {
        let mut controls = LaneControls::new(1, 3);

        let frame = controls.digest(&[down(KeyCode::Space), down(KeyCode::Escape)]);
        assert!(frame.confirm);
        assert!(frame.toggle_pause);

        let quiet = controls.digest(&[]);
        assert!(!quiet.confirm);
        assert!(!quiet.toggle_pause);
    }

    #[test]
    fn key_up_events_are_ignored() {
        let mut controls = LaneControls::new(1, 3);
        let frame = controls.digest(&[
            InputEvent::KeyUp(KeyCode::ArrowLeft),
            InputEvent::KeyUp(KeyCode::Space),
        ]);
        assert_eq!(controls.target_lane(), 1);
        assert!(!frame.confirm);
    }

    #[test]
    fn reset_recenters_the_target() {
        let mut controls = LaneControls::new(1, 3);
        controls.digest(&[down(KeyCode::ArrowRight)]);
        controls.reset(1);
        assert_eq!(controls.target_lane(), 1);
    }
}
