//=========================================================================
// Platform Bridge
//=========================================================================
//
// The contract between the windowing thread and the logic thread, and
// the logic-side event drain.
//
// The platform batches input per frame boundary and sends it over a
// bounded channel; the logic thread collects everything available at
// each tick start. Window closure (or a disconnected channel) tells
// the tick loop to exit.
//
//=========================================================================

//=== External Crates =====================================================

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages crossing the platform → logic thread boundary.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// One platform frame's worth of key events, in arrival order.
    Inputs(Vec<InputEvent>),

    /// The user or OS asked the window to close.
    WindowClosed,
}

//=== TickControl =========================================================

/// Whether the tick loop keeps running after an event drain.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== Event Collection ====================================================

/// Drains all platform events available this tick into `inputs`.
///
/// Blocks up to `wait` for the first event so an idle loop still paces
/// itself, then takes whatever else is queued without blocking.
/// Returns `Exit` on window closure or a dead channel.
pub(crate) fn collect_events(
    receiver: &Receiver<PlatformEvent>,
    inputs: &mut Vec<InputEvent>,
    wait: Duration,
) -> TickControl {
    inputs.clear();

    match receiver.recv_timeout(wait) {
        Ok(PlatformEvent::Inputs(batch)) => inputs.extend(batch),
        Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
        Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
        Err(RecvTimeoutError::Timeout) => {}
    }

    while let Ok(event) = receiver.try_recv() {
        match event {
            PlatformEvent::Inputs(batch) => inputs.extend(batch),
            PlatformEvent::WindowClosed => return TickControl::Exit,
        }
    }

    TickControl::Continue
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::bounded;

    const WAIT: Duration = Duration::from_millis(1);

    #[test]
    fn timeout_with_no_events_continues() {
        let (_tx, rx) = bounded::<PlatformEvent>(8);
        let mut inputs = Vec::new();

        assert_eq!(collect_events(&rx, &mut inputs, WAIT), TickControl::Continue);
        assert!(inputs.is_empty());
    }

    #[test]
    fn queued_batches_are_flattened_in_order() {
        let (tx, rx) = bounded(8);
        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(
            KeyCode::ArrowLeft,
        )]))
        .unwrap();
        tx.send(PlatformEvent::Inputs(vec![
            InputEvent::KeyDown(KeyCode::Space),
            InputEvent::KeyUp(KeyCode::Space),
        ]))
        .unwrap();

        let mut inputs = Vec::new();
        assert_eq!(collect_events(&rx, &mut inputs, WAIT), TickControl::Continue);
        assert_eq!(
            inputs,
            vec![
                InputEvent::KeyDown(KeyCode::ArrowLeft),
                InputEvent::KeyDown(KeyCode::Space),
                InputEvent::KeyUp(KeyCode::Space),
            ]
        );
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = bounded(8);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        let mut inputs = Vec::new();
        assert_eq!(collect_events(&rx, &mut inputs, WAIT), TickControl::Exit);
    }

    #[test]
    fn disconnected_channel_exits() {
        let (tx, rx) = bounded::<PlatformEvent>(8);
        drop(tx);

        let mut inputs = Vec::new();
        assert_eq!(collect_events(&rx, &mut inputs, WAIT), TickControl::Exit);
    }

    #[test]
    fn stale_inputs_are_cleared_between_ticks() {
        let (_tx, rx) = bounded::<PlatformEvent>(8);
        let mut inputs = vec![InputEvent::KeyDown(KeyCode::Space)];

        collect_events(&rx, &mut inputs, WAIT);
        assert!(inputs.is_empty());
    }
}
