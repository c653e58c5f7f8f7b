//=========================================================================
// Platform Event Mapper
//
// Converts winit keyboard events to engine `InputEvent`s. Only the
// keys the game binds are mapped; everything else is dropped here so
// the core never sees dead input.
//
//=========================================================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::core::input::{InputEvent, KeyCode};

//=== Key Conversion ======================================================

/// Maps a winit key code onto the game's bound-key set.
fn map_key(code: WinitKeyCode) -> Option<KeyCode> {
    match code {
        WinitKeyCode::ArrowLeft => Some(KeyCode::ArrowLeft),
        WinitKeyCode::ArrowRight => Some(KeyCode::ArrowRight),
        WinitKeyCode::KeyA => Some(KeyCode::KeyA),
        WinitKeyCode::KeyD => Some(KeyCode::KeyD),
        WinitKeyCode::Space => Some(KeyCode::Space),
        WinitKeyCode::Enter => Some(KeyCode::Enter),
        WinitKeyCode::KeyP => Some(KeyCode::KeyP),
        WinitKeyCode::Escape => Some(KeyCode::Escape),
        _ => None,
    }
}

//=== Event Conversion ====================================================

/// Converts a full winit keyboard event; `None` for unbound keys.
pub(crate) fn map_key_event(event: &KeyEvent) -> Option<InputEvent> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    let key = map_key(code)?;

    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_across() {
        assert_eq!(map_key(WinitKeyCode::ArrowLeft), Some(KeyCode::ArrowLeft));
        assert_eq!(map_key(WinitKeyCode::KeyD), Some(KeyCode::KeyD));
        assert_eq!(map_key(WinitKeyCode::Space), Some(KeyCode::Space));
        assert_eq!(map_key(WinitKeyCode::Escape), Some(KeyCode::Escape));
    }

    #[test]
    fn unbound_keys_are_dropped() {
        assert_eq!(map_key(WinitKeyCode::KeyQ), None);
        assert_eq!(map_key(WinitKeyCode::F12), None);
        assert_eq!(map_key(WinitKeyCode::Backslash), None);
    }
}
