//=========================================================================
// UI Collaborator
//=========================================================================
//
// One-way presentation boundary. The orchestrator pushes state changes
// here and never reads anything back; a backend may draw menus, update
// a progress bar, or ignore everything.
//
//=========================================================================

use log::{info, warn};

use crate::core::level::LevelStatistics;

//=== UiHandler ===========================================================

/// Fire-and-forget presentation sink.
pub trait UiHandler: Send {
    /// The pre-level menu for `level` is on screen.
    fn show_level_menu(&mut self, level: u32);

    /// The game entered the paused state.
    fn show_pause(&mut self);

    /// Level progress changed; `percent` is already clamped to
    /// `[0, 100]`.
    fn update_progress(&mut self, percent: f32);

    /// A level was completed; show its summary.
    fn show_level_complete(&mut self, level: u32, stats: &LevelStatistics);

    /// The final level was completed; show the run summary.
    fn show_game_complete(&mut self, level: u32, stats: &LevelStatistics);

    /// A recoverable error the player should see.
    fn show_error(&mut self, message: &str);
}

//=== LogUi ===============================================================

/// UI backend that narrates everything through the log. The default
/// for headless runs.
#[derive(Debug, Default)]
pub struct LogUi;

impl UiHandler for LogUi {
    fn show_level_menu(&mut self, level: u32) {
        info!(target: "ui", "level menu: level {}", level);
    }

    fn show_pause(&mut self) {
        info!(target: "ui", "paused");
    }

    fn update_progress(&mut self, percent: f32) {
        info!(target: "ui", "progress {:.0}%", percent);
    }

    fn show_level_complete(&mut self, level: u32, stats: &LevelStatistics) {
        info!(
            target: "ui",
            "level {} complete: {} defeated, {:.0}% accuracy, {:.1}s",
            level, stats.enemies_defeated, stats.accuracy, stats.time_spent
        );
    }

    fn show_game_complete(&mut self, level: u32, stats: &LevelStatistics) {
        info!(
            target: "ui",
            "game complete at level {}: {} defeated, {:.0}% accuracy",
            level, stats.enemies_defeated, stats.accuracy
        );
    }

    fn show_error(&mut self, message: &str) {
        warn!(target: "ui", "error overlay: {}", message);
    }
}
