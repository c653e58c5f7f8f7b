//=========================================================================
// Level Rules
//=========================================================================
//
// Static per-level difficulty table plus the per-level mutable
// counters.
//
// Architecture:
//   LevelTable:  ordered list of LevelConfig rows (compiled-in
//                defaults, overridable from a TOML document)
//   LevelConfig: one immutable row with cadences, speeds, health and
//                the win condition
//   Level:       a config snapshot plus {spawned, defeated} counters
//                for one play-through of that level
//
// Lookup policy: level numbers are 1-based; out-of-range numbers fall
// back to row 1. That is defined behavior, not an error.
//
//=========================================================================

//=== Module Declarations =================================================

mod manager;

//=== Public API ==========================================================

pub use manager::{LevelManager, LevelStatistics, ProgressionError};

//=== External Crates =====================================================

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

//=== LevelConfig =========================================================

/// Immutable numeric ruleset for one level.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LevelConfig {
    /// Cadence of enemy spawns.
    pub spawn_interval_ms: u64,

    /// Forward speed of spawned enemies, units per second.
    pub enemy_speed: f32,

    /// Hit points of spawned enemies.
    pub enemy_health: u32,

    /// Cadence of the player's auto-fire.
    pub shoot_interval_ms: u64,

    /// Bullet velocity, units per second.
    pub bullet_speed: f32,

    /// Road scroll speed, units per second.
    pub road_speed: f32,

    /// Total spawns allowed for the level (not a concurrency cap).
    pub max_enemies: u32,

    /// Defeats required to complete the level.
    pub enemies_to_win: u32,
}

impl LevelConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn shoot_interval(&self) -> Duration {
        Duration::from_millis(self.shoot_interval_ms)
    }
}

//=== ConfigError =========================================================

/// Rejections produced while loading a level table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level table has no levels")]
    EmptyTable,

    #[error("level {level}: {reason}")]
    InvalidLevel { level: u32, reason: &'static str },

    #[error("level table parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== LevelTable ==========================================================

/// Ordered difficulty table; row N is level N (1-based).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    /// The shipped three-level table.
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                LevelConfig {
                    spawn_interval_ms: 2000,
                    enemy_speed: 5.0,
                    enemy_health: 1,
                    shoot_interval_ms: 500,
                    bullet_speed: 15.0,
                    road_speed: 10.0,
                    max_enemies: 20,
                    enemies_to_win: 10,
                },
                LevelConfig {
                    spawn_interval_ms: 1500,
                    enemy_speed: 7.0,
                    enemy_health: 2,
                    shoot_interval_ms: 400,
                    bullet_speed: 20.0,
                    road_speed: 12.0,
                    max_enemies: 30,
                    enemies_to_win: 15,
                },
                LevelConfig {
                    spawn_interval_ms: 1000,
                    enemy_speed: 10.0,
                    enemy_health: 3,
                    shoot_interval_ms: 300,
                    bullet_speed: 25.0,
                    road_speed: 15.0,
                    max_enemies: 40,
                    enemies_to_win: 20,
                },
            ],
        }
    }

    /// Builds a validated table from explicit rows.
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        let table = Self { levels };
        table.validate()?;
        Ok(table)
    }

    /// Parses and validates a table from a TOML document with one
    /// `[[levels]]` array-of-tables entry per level.
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigError> {
        let table: LevelTable = toml::from_str(doc)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        for (index, config) in self.levels.iter().enumerate() {
            let level = index as u32 + 1;
            if config.spawn_interval_ms == 0 || config.shoot_interval_ms == 0 {
                return Err(ConfigError::InvalidLevel {
                    level,
                    reason: "cadence intervals must be positive",
                });
            }
            if config.enemy_health == 0 {
                return Err(ConfigError::InvalidLevel {
                    level,
                    reason: "enemy health must be positive",
                });
            }
            if config.enemies_to_win == 0 || config.enemies_to_win > config.max_enemies {
                return Err(ConfigError::InvalidLevel {
                    level,
                    reason: "enemies_to_win must be in 1..=max_enemies",
                });
            }
        }
        Ok(())
    }

    /// Highest level number the table defines.
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Row for `level_number`, falling back to row 1 when out of range.
    pub fn config(&self, level_number: u32) -> &LevelConfig {
        let index = level_number.saturating_sub(1) as usize;
        self.levels.get(index).unwrap_or(&self.levels[0])
    }
}

//=== Level ===============================================================

/// One play-through of a level: the config snapshot plus run counters.
#[derive(Debug, Clone)]
pub struct Level {
    config: LevelConfig,
    defeated: u32,
    spawned: u32,
}

impl Level {
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            defeated: 0,
            spawned: 0,
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn on_enemy_spawned(&mut self) {
        self.spawned += 1;
    }

    pub fn on_enemy_defeated(&mut self) {
        self.defeated += 1;
    }

    /// Gates on the level's total spawn budget, not on how many enemies
    /// are currently alive.
    pub fn can_spawn_enemy(&self) -> bool {
        self.spawned < self.config.max_enemies
    }

    pub fn defeated(&self) -> u32 {
        self.defeated
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// True once `defeated` first reaches the win threshold, and from
    /// then on for this level instance.
    pub fn is_complete(&self) -> bool {
        self.defeated >= self.config.enemies_to_win
    }

    /// Completion percentage in `[0, 100]` for the UI progress bar.
    pub fn progress(&self) -> f32 {
        let pct = self.defeated as f32 / self.config.enemies_to_win as f32 * 100.0;
        pct.min(100.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builtin_table_has_three_levels() {
        let table = LevelTable::builtin();
        assert_eq!(table.max_level(), 3);
        assert_eq!(table.config(1).enemies_to_win, 10);
        assert_eq!(table.config(2).enemy_health, 2);
        assert_eq!(table.config(3).spawn_interval_ms, 1000);
    }

    #[test]
    fn out_of_range_levels_fall_back_to_level_one() {
        let table = LevelTable::builtin();
        assert_eq!(table.config(0), table.config(1));
        assert_eq!(table.config(99), table.config(1));
    }

    #[test]
    fn table_parses_from_toml() {
        let doc = r#"
            [[levels]]
            spawn_interval_ms = 800
            enemy_speed = 4.0
            enemy_health = 1
            shoot_interval_ms = 250
            bullet_speed = 18.0
            road_speed = 9.0
            max_enemies = 12
            enemies_to_win = 6
        "#;
        let table = LevelTable::from_toml_str(doc).unwrap();
        assert_eq!(table.max_level(), 1);
        assert_eq!(table.config(1).max_enemies, 12);
        assert_eq!(table.config(1).spawn_interval(), Duration::from_millis(800));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            LevelTable::from_toml_str("levels = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            LevelTable::from_toml_str("levels = []"),
            Err(ConfigError::EmptyTable)
        ));
    }

    #[test]
    fn zero_cadence_is_rejected() {
        let doc = r#"
            [[levels]]
            spawn_interval_ms = 0
            enemy_speed = 4.0
            enemy_health = 1
            shoot_interval_ms = 250
            bullet_speed = 18.0
            road_speed = 9.0
            max_enemies = 12
            enemies_to_win = 6
        "#;
        assert!(matches!(
            LevelTable::from_toml_str(doc),
            Err(ConfigError::InvalidLevel { level: 1, .. })
        ));
    }

    #[test]
    fn spawn_gate_tracks_total_spawns_not_live_enemies() {
        let mut level = Level::new(*LevelTable::builtin().config(1));
        for _ in 0..20 {
            assert!(level.can_spawn_enemy());
            level.on_enemy_spawned();
        }
        // Budget exhausted even though every spawned enemy may be gone.
        assert!(!level.can_spawn_enemy());
        assert_eq!(level.spawned(), 20);
    }

    #[test]
    fn completion_latches_at_the_win_threshold() {
        let mut level = Level::new(*LevelTable::builtin().config(1));
        for _ in 0..9 {
            level.on_enemy_defeated();
        }
        assert!(!level.is_complete());

        level.on_enemy_defeated();
        assert!(level.is_complete());

        level.on_enemy_defeated();
        assert!(level.is_complete(), "completion must not un-latch");
    }

    #[test]
    fn progress_is_clamped_to_one_hundred() {
        let mut level = Level::new(*LevelTable::builtin().config(1));
        assert_relative_eq!(level.progress(), 0.0);

        for _ in 0..5 {
            level.on_enemy_defeated();
        }
        assert_relative_eq!(level.progress(), 50.0);

        for _ in 0..10 {
            level.on_enemy_defeated();
        }
        assert_relative_eq!(level.progress(), 100.0);
    }
}
