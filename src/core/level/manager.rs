//=========================================================================
// Level Manager
//=========================================================================
//
// Progression state machine over the level table.
//
// Owns the current `Level`, tracks run statistics (shots, defeats,
// accuracy, elapsed simulated time) and advances the level number.
// Time is accumulated from the fixed-timestep tick, never read from
// the wall clock, so every statistic is deterministic.
//
// Advancing past the final level is a recoverable error surfaced as a
// `ProgressionError`; the caller shows it and carries on.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{Level, LevelConfig, LevelTable};

//=== LevelStatistics =====================================================

/// Read-only snapshot of the current run, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStatistics {
    pub enemies_defeated: u32,

    /// Simulated seconds since the level started.
    pub time_spent: f32,

    /// `successful / total * 100`, or `0` before the first shot.
    pub accuracy: f32,

    pub total_shots: u32,

    /// Shots credited with a defeat, one per kill.
    pub successful_shots: u32,
}

//=== ProgressionError ====================================================

/// Failure to advance the run; never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("already at the final level ({0})")]
    AtFinalLevel(u32),
}

//=== LevelManager ========================================================

pub struct LevelManager {
    table: LevelTable,
    current: Level,
    current_number: u32,
    total_shots: u32,
    successful_shots: u32,
    time_spent: f32,
}

impl LevelManager {
    //--- Construction -----------------------------------------------------

    pub fn new(table: LevelTable, initial_level: u32) -> Self {
        let current = Level::new(*table.config(initial_level));
        Self {
            table,
            current,
            current_number: initial_level,
            total_shots: 0,
            successful_shots: 0,
            time_spent: 0.0,
        }
    }

    //--- Level Lifecycle --------------------------------------------------

    /// Resets counters and statistics and deals a fresh `Level` for the
    /// current level number.
    pub fn start_level(&mut self) {
        info!(target: "level", "starting level {}", self.current_number);
        self.current = Level::new(*self.table.config(self.current_number));
        self.total_shots = 0;
        self.successful_shots = 0;
        self.time_spent = 0.0;
    }

    /// Accumulates simulated time. Only called while the level is
    /// actively being played, so pauses never count.
    pub fn tick(&mut self, dt: f32) {
        self.time_spent += dt;
    }

    //--- Combat Bookkeeping -----------------------------------------------

    pub fn on_shot(&mut self) {
        self.total_shots += 1;
    }

    pub fn on_enemy_spawned(&mut self) {
        self.current.on_enemy_spawned();
    }

    pub fn on_enemy_defeated(&mut self) {
        self.current.on_enemy_defeated();
        self.successful_shots += 1;
    }

    /// Hit percentage in `[0, 100]`; `0` when nothing was fired yet.
    pub fn accuracy(&self) -> f32 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.successful_shots as f32 / self.total_shots as f32 * 100.0
        }
    }

    //--- Progression ------------------------------------------------------

    pub fn current_level(&self) -> &Level {
        &self.current
    }

    pub fn config(&self) -> &LevelConfig {
        self.current.config()
    }

    pub fn level_number(&self) -> u32 {
        self.current_number
    }

    pub fn is_level_complete(&self) -> bool {
        self.current.is_complete()
    }

    pub fn progress(&self) -> f32 {
        self.current.progress()
    }

    pub fn has_next_level(&self) -> bool {
        self.current_number < self.table.max_level()
    }

    /// Advances to the next level's config.
    ///
    /// Fails without any state change when already at the final level;
    /// the caller surfaces the error to the user.
    pub fn next_level(&mut self) -> Result<u32, ProgressionError> {
        if !self.has_next_level() {
            return Err(ProgressionError::AtFinalLevel(self.current_number));
        }
        self.current_number += 1;
        self.current = Level::new(*self.table.config(self.current_number));
        info!(target: "level", "advanced to level {}", self.current_number);
        Ok(self.current_number)
    }

    /// True exactly when the current level number is the table's last.
    pub fn is_game_complete(&self) -> bool {
        self.current_number >= self.table.max_level()
    }

    //--- Statistics -------------------------------------------------------

    pub fn statistics(&self) -> LevelStatistics {
        LevelStatistics {
            enemies_defeated: self.current.defeated(),
            time_spent: self.time_spent,
            accuracy: self.accuracy(),
            total_shots: self.total_shots,
            successful_shots: self.successful_shots,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn manager() -> LevelManager {
        LevelManager::new(LevelTable::builtin(), 1)
    }

    #[test]
    fn accuracy_is_zero_before_any_shot() {
        let m = manager();
        assert_relative_eq!(m.accuracy(), 0.0);
    }

    #[test]
    fn three_kills_in_four_shots_is_seventy_five_percent() {
        let mut m = manager();
        for _ in 0..4 {
            m.on_shot();
        }
        for _ in 0..3 {
            m.on_enemy_defeated();
        }

        assert_relative_eq!(m.accuracy(), 75.0);
        let stats = m.statistics();
        assert_eq!(stats.total_shots, 4);
        assert_eq!(stats.successful_shots, 3);
        assert_relative_eq!(stats.accuracy, 75.0);
    }

    #[test]
    fn accuracy_stays_within_bounds() {
        let mut m = manager();
        m.on_shot();
        m.on_enemy_defeated();
        assert!(m.accuracy() >= 0.0 && m.accuracy() <= 100.0);
    }

    #[test]
    fn level_completes_exactly_at_the_threshold() {
        let mut m = manager();
        m.start_level();

        for _ in 0..9 {
            m.on_enemy_defeated();
        }
        assert!(!m.is_level_complete());

        m.on_enemy_defeated();
        assert!(m.is_level_complete());
        assert!(m.is_level_complete(), "stays complete thereafter");
    }

    #[test]
    fn next_level_walks_the_table() {
        let mut m = manager();
        assert_eq!(m.next_level().unwrap(), 2);
        assert_eq!(m.config().enemy_health, 2);
        assert_eq!(m.next_level().unwrap(), 3);
        assert!(m.is_game_complete());
    }

    #[test]
    fn next_level_at_maximum_fails_without_state_change() {
        let mut m = manager();
        m.next_level().unwrap();
        m.next_level().unwrap();

        let before = m.level_number();
        assert_eq!(m.next_level(), Err(ProgressionError::AtFinalLevel(3)));
        assert_eq!(m.level_number(), before);
        assert!(m.is_game_complete());
    }

    #[test]
    fn game_is_not_complete_below_the_final_level() {
        let mut m = manager();
        assert!(!m.is_game_complete());
        m.next_level().unwrap();
        assert!(!m.is_game_complete());
    }

    #[test]
    fn start_level_resets_counters_and_clock() {
        let mut m = manager();
        m.on_shot();
        m.on_enemy_defeated();
        m.tick(12.5);

        m.next_level().unwrap();
        m.start_level();

        let stats = m.statistics();
        assert_eq!(stats.total_shots, 0);
        assert_eq!(stats.successful_shots, 0);
        assert_eq!(stats.enemies_defeated, 0);
        assert_relative_eq!(stats.time_spent, 0.0);
    }

    #[test]
    fn time_spent_accumulates_tick_deltas() {
        let mut m = manager();
        m.start_level();
        for _ in 0..60 {
            m.tick(1.0 / 60.0);
        }
        assert_relative_eq!(m.statistics().time_spent, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn progression_error_reads_like_a_user_message() {
        let err = ProgressionError::AtFinalLevel(3);
        assert_eq!(err.to_string(), "already at the final level (3)");
    }
}
