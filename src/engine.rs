//=========================================================================
// Roadstrike Engine
//
// Frame driver and runtime entry point.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(game)──>  Engine  ──run()──>  [Runtime]
//         │                              │
//         ├─ with_tps()                  ├─ spawns logic thread @ TPS
//         └─ with_channel_capacity()     └─ runs winit platform loop
//                                           blocks until window close
// ```
//
// The logic thread owns the `Game` and ticks it at a fixed timestep;
// the platform thread owns the window and streams batched input over
// a bounded channel. `run_headless` drives the same tick function with
// no window at all, for tests and CI.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{collect_events, PlatformEvent, TickControl};
use crate::core::input::InputEvent;
use crate::game::Game;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use roadstrike::prelude::*;
///
/// let deps = GameDeps {
///     scene: Box::new(NullSceneGraph::new()),
///     loader: Box::new(InstantLoader::new()),
///     ui: Box::new(LogUi),
///     host: Box::new(LogHost),
/// };
/// let game = Game::new(deps, LevelTable::builtin(), 1, StdRng::seed_from_u64(0));
///
/// EngineBuilder::new()
///     .with_tps(60.0)
///     .build(game)
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the platform → logic channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Consumes the builder and wraps `game` in a configured runtime.
    pub fn build(self, game: Game) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Engine {
            game,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Roadstrike runtime.
///
/// Owns the [`Game`] and the loop that drives it. Create via
/// [`EngineBuilder`].
pub struct Engine {
    game: Game,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → logic channel
    /// 2. Spawns the logic thread ticking the game at the configured TPS
    /// 3. Runs the winit event loop on the calling thread (blocks here)
    /// 4. On window close: logic thread drains the close event and exits
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let logic_handle = spawn_logic_thread(self.game, rx, self.tps);
        info!("Logic thread spawned");

        let platform = Platform::new(tx);
        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        match logic_handle.join() {
            Ok(()) => info!("Logic thread terminated cleanly"),
            Err(e) => error!("Logic thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }

    /// Ticks the game `ticks` times with no window and no input, then
    /// hands the game back for inspection. The test/CI surface.
    pub fn run_headless(mut self, ticks: u64) -> Game {
        let dt = (1.0 / self.tps) as f32;
        for _ in 0..ticks {
            self.game.tick(dt, &[]);
        }
        self.game
    }
}

//=== Logic Thread ========================================================

/// Fixed-timestep tick loop: drain platform events, tick the game,
/// sleep off the remainder of the frame.
fn spawn_logic_thread(
    mut game: Game,
    receiver: Receiver<PlatformEvent>,
    tps: f64,
) -> thread::JoinHandle<()> {
    let frame_duration = Duration::from_secs_f64(1.0 / tps);
    let dt = frame_duration.as_secs_f32();

    thread::spawn(move || {
        let mut inputs: Vec<InputEvent> = Vec::with_capacity(16);

        loop {
            let frame_start = Instant::now();

            if let TickControl::Exit = collect_events(&receiver, &mut inputs, frame_duration) {
                info!("Logic thread exiting");
                break;
            }

            game.tick(dt, &inputs);

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
