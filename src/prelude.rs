//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use roadstrike::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine runtime
pub use crate::engine::{Engine, EngineBuilder};

// Orchestrator
pub use crate::game::{Game, GameDeps, GameState, LANE_POSITIONS};

// Level system
pub use crate::core::level::{
    ConfigError, Level, LevelConfig, LevelManager, LevelStatistics, LevelTable, ProgressionError,
};

// Collaborator contracts and default backends
pub use crate::core::host::{HostPlatform, LogHost};
pub use crate::core::render::{
    InstantLoader, LoadStatus, LoadTicket, ModelLoader, NullSceneGraph, SceneGraph, VisualHandle,
};
pub use crate::core::ui::{LogUi, UiHandler};

// Input
pub use crate::core::input::{ControlFrame, InputEvent, KeyCode, LaneControls};

// Achievements
pub use crate::core::achievements::AchievementManager;
