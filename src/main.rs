//=========================================================================
// Roadstrike — Binary Entry Point
//
// Wires the default collaborators (logging UI/host, instant loader,
// null scene graph) and runs the engine. A real embedding replaces
// those boxes with its renderer and platform SDK bindings.
//
// The level table can be overridden by a `levels.toml` next to the
// working directory; anything malformed falls back to the built-in
// table with a logged warning.
//
//=========================================================================

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use roadstrike::prelude::*;

const LEVEL_TABLE_PATH: &str = "levels.toml";

/// Loads the level table override, falling back to the shipped table.
fn load_level_table() -> LevelTable {
    match std::fs::read_to_string(LEVEL_TABLE_PATH) {
        Ok(doc) => match LevelTable::from_toml_str(&doc) {
            Ok(table) => {
                info!("loaded level table from {}", LEVEL_TABLE_PATH);
                table
            }
            Err(e) => {
                warn!("ignoring {}: {}", LEVEL_TABLE_PATH, e);
                LevelTable::builtin()
            }
        },
        Err(_) => LevelTable::builtin(),
    }
}

fn main() {
    env_logger::init();

    let deps = GameDeps {
        scene: Box::new(NullSceneGraph::new()),
        loader: Box::new(InstantLoader::new()),
        ui: Box::new(LogUi),
        host: Box::new(LogHost),
    };

    let game = Game::new(deps, load_level_table(), 1, StdRng::from_entropy());

    EngineBuilder::new()
        .with_tps(60.0)
        .build(game)
        .run();
}
