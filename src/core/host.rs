//=========================================================================
// Host Platform Collaborator
//=========================================================================
//
// Notification sink for the embedding platform (distribution portal,
// achievements service, monetization hooks). Strictly fire-and-forget:
// no return value is ever consumed, and a host may drop every call.
//
// Injected into the orchestrator's constructor so tests substitute a
// recording fake.
//
//=========================================================================

use log::info;

//=== HostPlatform ========================================================

pub trait HostPlatform: Send {
    fn level_started(&mut self, level: u32);

    fn level_ended(&mut self, level: u32, success: bool);

    fn game_paused(&mut self);

    fn achievement_unlocked(&mut self, id: &str);

    fn high_score(&mut self, score: u32);
}

//=== LogHost =============================================================

/// Host backend that only logs. The default for standalone runs.
#[derive(Debug, Default)]
pub struct LogHost;

impl HostPlatform for LogHost {
    fn level_started(&mut self, level: u32) {
        info!(target: "host", "level {} started", level);
    }

    fn level_ended(&mut self, level: u32, success: bool) {
        info!(target: "host", "level {} ended (success: {})", level, success);
    }

    fn game_paused(&mut self) {
        info!(target: "host", "paused");
    }

    fn achievement_unlocked(&mut self, id: &str) {
        info!(target: "host", "achievement unlocked: {}", id);
    }

    fn high_score(&mut self, score: u32) {
        info!(target: "host", "new high score: {}", score);
    }
}
