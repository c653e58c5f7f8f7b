//=========================================================================
// Core Systems
//=========================================================================
//
// Everything that runs on the logic thread.
//
// Architecture (leaf → root):
//   entity:        player / enemy / bullet / road data + movement
//   render:        SceneGraph + ModelLoader collaborator contracts
//   objects:       entity registry, culling, collision engine
//   level:         difficulty table, counters, progression, stats
//   input:         key events → lane / confirm / pause intents
//   ui, host:      one-way presentation & platform notification sinks
//   achievements:  unlock-once evaluation at level completion
//   bridge:        platform → logic thread event contract
//
// The orchestrator that wires these together lives in `crate::game`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod achievements;
pub(crate) mod bridge;
pub mod entity;
pub mod host;
pub mod input;
pub mod level;
pub mod objects;
pub mod render;
pub mod ui;
