//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the logic thread via the
// bounded channel.
//
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Game::tick      │
//  │   ↓                      │    │   ├─ LaneControls│
//  │  event_mapper            │    │   ├─ ObjectMgr   │
//  │   ↓ (bound keys only)    │    │   └─ LevelMgr    │
//  │  pending: Vec<InputEvent>│    └──────────────────┘
//  │   ↓ RedrawRequested      │             ↑
//  │  channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// `RedrawRequested` is the frame boundary: all input buffered since
// the last frame is sent as one batch, so the logic thread sees a
// deterministic per-frame ordering. Empty batches are not sent.
//
// If the logic thread dies early the channel disconnects; the platform
// logs and keeps running so the user can still close the window.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{debug, error, info, trace, warn};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::core::bridge::PlatformEvent;
use crate::core::input::InputEvent;
use event_mapper::map_key_event;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors. These are the only
/// fatal errors in the system: without an event loop there is no game.
#[derive(Debug, Error)]
pub(crate) enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== Platform ============================================================

/// Window manager and input batcher.
///
/// Runs on the main thread (winit requirement on macOS/iOS) and sends
/// batched events to the logic thread. The window is created lazily in
/// `resumed()` for mobile compatibility.
pub(crate) struct Platform {
    window: Option<Window>,
    pending: Vec<InputEvent>,
    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            pending: Vec::new(),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the winit event loop; blocks until the window closes.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last frame as one batch.
    ///
    /// A disconnected channel (logic thread already gone) is logged and
    /// tolerated so the window can still be closed normally.
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let batch: Vec<InputEvent> = self.pending.drain(..).collect();
        trace!(target: "platform", "Flushing {} input events", batch.len());

        if self.event_sender.send(PlatformEvent::Inputs(batch)).is_err() {
            warn!(target: "platform", "Channel disconnected, dropping input batch");
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on startup (and ignores mobile re-resumes).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Roadstrike")
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(input) = map_key_event(key_event) {
                    self.pending.push(input);
                } else {
                    trace!(target: "platform", "Unbound key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: ship the batch, schedule the next frame.
                self.flush_pending();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Resized, Focused, etc. carry nothing the game binds.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    #[test]
    fn platform_creates_window_lazily() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx);
        assert!(platform.window.is_none());
    }

    #[test]
    fn flush_with_empty_buffer_sends_nothing() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.flush_pending();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);

        platform.pending.push(InputEvent::KeyDown(KeyCode::Space));
        platform.flush_pending();
        platform.flush_pending();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(batch)) => {
                assert_eq!(batch, vec![InputEvent::KeyDown(KeyCode::Space)]);
            }
            other => panic!("expected Inputs batch, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "second flush must be a no-op");
    }

    #[test]
    fn flush_survives_a_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx);
        platform.pending.push(InputEvent::KeyDown(KeyCode::KeyA));

        drop(rx);
        platform.flush_pending();
    }
}
