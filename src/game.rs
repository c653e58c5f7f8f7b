//=========================================================================
// Game Orchestrator
//=========================================================================
//
// The top-level state machine wiring every core system together.
//
// States:
//   LevelMenu → Playing ⇄ Paused
//                  │
//                  └─► LevelComplete → LevelMenu (next level)
//                  └─► GameComplete
//
// Each tick, while Playing, runs the load-bearing pipeline in order:
//
//   poll loads → cadences (spawn / auto-fire) → update entities
//     → recycle roads → cull enemies/bullets → resolve collisions
//     → apply lane intent
//
// Collisions must see post-movement positions, so the update pass
// always precedes resolution.
//
// Spawn and auto-fire cadence are time accumulators stepped by the
// fixed tick, not wall-clock timers: they fire `floor(elapsed /
// interval)` times regardless of tick rate and are reset on every
// level transition and pause toggle. While paused, the simulation is
// not stepped at all; only control input is drained so the game can
// resume.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Crates =====================================================

use log::info;
use rand::rngs::StdRng;

//=== Internal Dependencies ===============================================

use crate::core::achievements::AchievementManager;
use crate::core::host::HostPlatform;
use crate::core::input::{InputEvent, LaneControls};
use crate::core::level::{LevelManager, LevelTable};
use crate::core::objects::{ObjectManager, ENEMY_SPAWN_Z};
use crate::core::render::{ModelLoader, SceneGraph};
use crate::core::ui::UiHandler;

//=== World Layout ========================================================

/// x position of each lane; the player starts in the middle one.
pub const LANE_POSITIONS: [f32; 3] = [-5.0, 0.0, 5.0];

const INITIAL_LANE: usize = 1;

//=== GameState ===========================================================

/// Top-level run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Pre-level menu; confirming starts the current level.
    LevelMenu,

    /// Simulation is live.
    Playing,

    /// Simulation frozen; awaiting resume.
    Paused,

    /// Level summary on screen; confirming advances to the next menu.
    LevelComplete,

    /// Final summary on screen; terminal.
    GameComplete,
}

//=== Cadence =============================================================

/// Accumulator-based repeating timer stepped by the simulation tick.
#[derive(Debug)]
struct Cadence {
    interval: f32,
    accumulated: f32,
}

impl Cadence {
    fn new(interval: Duration) -> Self {
        let interval = interval.as_secs_f32();
        debug_assert!(interval > 0.0, "cadence interval must be positive");
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Number of firings owed after `dt` more seconds have elapsed.
    fn fire(&mut self, dt: f32) -> u32 {
        self.accumulated += dt;
        let mut fires = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fires += 1;
        }
        fires
    }

    fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

//=== GameDeps ============================================================

/// External collaborators, injected so tests substitute fakes.
pub struct GameDeps {
    pub scene: Box<dyn SceneGraph>,
    pub loader: Box<dyn ModelLoader>,
    pub ui: Box<dyn UiHandler>,
    pub host: Box<dyn HostPlatform>,
}

//=== Game ================================================================

/// The orchestrator: owns every core system for one run.
pub struct Game {
    state: GameState,
    levels: LevelManager,
    objects: ObjectManager,
    controls: LaneControls,
    achievements: AchievementManager,
    ui: Box<dyn UiHandler>,
    host: Box<dyn HostPlatform>,
    spawn_cadence: Cadence,
    fire_cadence: Cadence,
    rng: StdRng,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Wires a run starting at `initial_level` and shows its menu.
    pub fn new(deps: GameDeps, table: LevelTable, initial_level: u32, rng: StdRng) -> Self {
        let levels = LevelManager::new(table, initial_level);
        let config = *levels.config();

        let mut objects =
            ObjectManager::new(deps.scene, deps.loader, LANE_POSITIONS.to_vec());
        objects.ensure_road_coverage();
        objects.init_player(INITIAL_LANE);
        let lane_count = objects.lane_count();

        let mut ui = deps.ui;
        ui.show_level_menu(initial_level);

        Self {
            state: GameState::LevelMenu,
            levels,
            objects,
            controls: LaneControls::new(INITIAL_LANE, lane_count),
            achievements: AchievementManager::new(),
            ui,
            host: deps.host,
            spawn_cadence: Cadence::new(config.spawn_interval()),
            fire_cadence: Cadence::new(config.shoot_interval()),
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the run by one fixed timestep.
    pub fn tick(&mut self, dt: f32, inputs: &[InputEvent]) {
        let frame = self.controls.digest(inputs);

        // Model loads progress in every state except a full freeze.
        if self.state != GameState::Paused {
            self.objects.poll_loads();
        }

        match self.state {
            GameState::LevelMenu => {
                if frame.confirm {
                    self.start_level();
                }
            }
            GameState::Playing => {
                if frame.toggle_pause {
                    self.pause();
                } else {
                    self.step_simulation(dt);
                }
            }
            GameState::Paused => {
                if frame.toggle_pause || frame.confirm {
                    self.resume();
                }
            }
            GameState::LevelComplete => {
                if frame.confirm {
                    self.advance_level();
                }
            }
            GameState::GameComplete => {
                if frame.confirm {
                    self.advance_level();
                }
            }
        }
    }

    //--- Simulation Step --------------------------------------------------

    fn step_simulation(&mut self, dt: f32) {
        self.levels.tick(dt);

        let config = *self.levels.config();

        for _ in 0..self.spawn_cadence.fire(dt) {
            if self.levels.current_level().can_spawn_enemy() {
                self.objects.spawn_enemy(
                    &mut self.rng,
                    ENEMY_SPAWN_Z,
                    config.enemy_health,
                    config.enemy_speed,
                );
                self.levels.on_enemy_spawned();
            }
        }

        for _ in 0..self.fire_cadence.fire(dt) {
            // Shots only leave a fully loaded player.
            if let Some(origin) = self.objects.player_position() {
                self.objects.spawn_bullet(origin, config.bullet_speed);
                self.levels.on_shot();
            }
        }

        self.objects.update_all(dt);
        self.objects.recycle_roads();
        self.objects.cull_enemies();
        self.objects.cull_bullets();

        // Collisions see post-movement positions.
        let defeated = self.objects.resolve_collisions();
        for _ in defeated {
            self.on_enemy_defeated();
        }

        if self.state == GameState::Playing {
            self.objects.set_player_target(self.controls.target_lane());
        }
    }

    fn on_enemy_defeated(&mut self) {
        self.levels.on_enemy_defeated();
        self.ui.update_progress(self.levels.progress());

        if self.levels.is_level_complete() && self.state == GameState::Playing {
            self.complete_level();
        }
    }

    //--- State Transitions ------------------------------------------------

    fn start_level(&mut self) {
        self.levels.start_level();
        let config = *self.levels.config();

        self.spawn_cadence = Cadence::new(config.spawn_interval());
        self.fire_cadence = Cadence::new(config.shoot_interval());

        self.objects.clear_enemies_and_bullets();
        self.objects.set_road_speed(config.road_speed);
        self.objects.ensure_road_coverage();

        self.controls.reset(INITIAL_LANE);
        self.objects.set_player_target(INITIAL_LANE);

        self.ui.update_progress(0.0);
        self.host.level_started(self.levels.level_number());

        info!(target: "game", "level {} live", self.levels.level_number());
        self.state = GameState::Playing;
    }

    fn pause(&mut self) {
        self.state = GameState::Paused;
        self.spawn_cadence.reset();
        self.fire_cadence.reset();
        self.ui.show_pause();
        self.host.game_paused();
    }

    fn resume(&mut self) {
        self.spawn_cadence.reset();
        self.fire_cadence.reset();
        self.state = GameState::Playing;
    }

    fn complete_level(&mut self) {
        let level = self.levels.level_number();
        self.spawn_cadence.reset();
        self.fire_cadence.reset();
        self.objects.clear_enemies_and_bullets();

        let stats = self.levels.statistics();
        self.achievements.evaluate(
            self.host.as_mut(),
            level,
            stats.enemies_defeated,
            stats.accuracy,
        );
        self.host.level_ended(level, true);

        if self.levels.is_game_complete() {
            info!(target: "game", "run complete at level {}", level);
            self.ui.show_game_complete(level, &stats);
            self.state = GameState::GameComplete;
        } else {
            self.ui.show_level_complete(level, &stats);
            self.state = GameState::LevelComplete;
        }
    }

    fn advance_level(&mut self) {
        match self.levels.next_level() {
            Ok(level) => {
                self.ui.show_level_menu(level);
                self.state = GameState::LevelMenu;
            }
            Err(err) => {
                // Exhausted progression is user-visible, never fatal.
                self.ui.show_error(&err.to_string());
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
