//=========================================================================
// Roadstrike — Library Root
//
// A lane-runner shooter on a deterministic fixed-timestep core.
//
// Responsibilities:
// - Expose the runtime facade (`Engine` / `EngineBuilder`) and the
//   orchestrator (`Game`)
// - Keep OS integration (`platform`) hidden from embedders
// - Publish the core systems (`core`) for engine-level extensibility:
//   custom scene graphs, loaders, UI and host backends plug in through
//   the traits in `core::render`, `core::ui` and `core::host`
//
// Typical usage:
// ```no_run
// use rand::rngs::StdRng;
// use rand::SeedableRng;
// use roadstrike::prelude::*;
//
// let deps = GameDeps {
//     scene: Box::new(NullSceneGraph::new()),
//     loader: Box::new(InstantLoader::new()),
//     ui: Box::new(LogUi),
//     host: Box::new(LogHost),
// };
// let game = Game::new(deps, LevelTable::builtin(), 1, StdRng::seed_from_u64(0));
// EngineBuilder::new().build(game).run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration and is not part of the
// public API surface; `engine` is re-exported below.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use game::{Game, GameDeps, GameState};
