//=========================================================================
// Input Event Types
//
// Engine-internal representation of keyboard input, decoupled from the
// windowing backend. The platform layer converts winit events into
// these; the core never sees a winit type.
//
// Only the keys the game binds are represented; everything else is
// dropped at the platform boundary.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical key identifier for the game's bound keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Lane change left.
    ArrowLeft,
    /// Lane change right.
    ArrowRight,
    /// Lane change left (WASD).
    KeyA,
    /// Lane change right (WASD).
    KeyD,
    /// Confirm / start.
    Space,
    /// Confirm / start.
    Enter,
    /// Pause toggle.
    KeyP,
    /// Pause toggle.
    Escape,
}

//=== InputEvent ==========================================================

/// A single keyboard state change, batched per platform frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}
