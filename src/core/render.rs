//=========================================================================
// Rendering Collaborators
//=========================================================================
//
// The contract between the simulation core and whatever draws it.
//
// Two opaque collaborators sit behind this boundary:
//
// - `SceneGraph`: a retained-mode scene. The core attaches a handle
//   when an entity's model resolves and detaches it on removal; the
//   backend renders whatever is currently attached. No per-frame draw
//   call crosses this boundary.
//
// - `ModelLoader`: asynchronous model resolution. The core requests a
//   load and receives a ticket; each tick it polls the ticket until the
//   load resolves to a handle or fails. Failures are logged by the
//   caller and the entity stays inert; never an error.
//
// Backends can be swapped without touching core code; the provided
// implementations (`NullSceneGraph`, `InstantLoader`) are enough for
// headless runs and tests.
//
//=========================================================================

//=== Handles =============================================================

/// Opaque identifier for an attachable visual issued by a `ModelLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(u64);

impl VisualHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Opaque identifier for an in-flight model load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

//=== LoadStatus ==========================================================

/// Result of polling an in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Still resolving; poll again next tick.
    Pending,

    /// Resolved; the handle is ready to attach.
    Ready(VisualHandle),

    /// The load failed; the ticket will never resolve.
    Failed,
}

//=== SceneGraph ==========================================================

/// Retained-mode scene the entities live in.
pub trait SceneGraph: Send {
    /// Makes a resolved visual part of the rendered scene.
    fn attach(&mut self, handle: VisualHandle);

    /// Releases a visual back to the backend. Called exactly once per
    /// removed entity.
    fn detach(&mut self, handle: VisualHandle);
}

//=== ModelLoader =========================================================

/// Asynchronous model resolution collaborator.
pub trait ModelLoader: Send {
    /// Begins loading the model at `path` and returns a ticket for it.
    fn begin_load(&mut self, path: &str) -> LoadTicket;

    /// Reports the current state of a previously issued ticket.
    fn poll(&mut self, ticket: LoadTicket) -> LoadStatus;
}

//=== NullSceneGraph ======================================================

/// Scene graph that renders nothing but keeps the attach/detach
/// bookkeeping observable. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullSceneGraph {
    attached: usize,
    detached: usize,
}

impl NullSceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals currently in the scene.
    pub fn live(&self) -> usize {
        self.attached - self.detached
    }

    pub fn attached(&self) -> usize {
        self.attached
    }

    pub fn detached(&self) -> usize {
        self.detached
    }
}

impl SceneGraph for NullSceneGraph {
    fn attach(&mut self, _handle: VisualHandle) {
        self.attached += 1;
    }

    fn detach(&mut self, _handle: VisualHandle) {
        self.detached += 1;
    }
}

//=== InstantLoader =======================================================

/// Loader whose every ticket resolves on the first poll.
///
/// Stands in for a real asset pipeline when there is nothing to load
/// (headless runs) and keeps the pending→ready transition exercised.
#[derive(Debug, Default)]
pub struct InstantLoader {
    next: u64,
}

impl InstantLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelLoader for InstantLoader {
    fn begin_load(&mut self, _path: &str) -> LoadTicket {
        let ticket = LoadTicket::new(self.next);
        self.next += 1;
        ticket
    }

    fn poll(&mut self, ticket: LoadTicket) -> LoadStatus {
        LoadStatus::Ready(VisualHandle::new(ticket.0))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_scene_graph_counts_attach_detach() {
        let mut scene = NullSceneGraph::new();
        scene.attach(VisualHandle::new(0));
        scene.attach(VisualHandle::new(1));
        scene.detach(VisualHandle::new(0));

        assert_eq!(scene.attached(), 2);
        assert_eq!(scene.detached(), 1);
        assert_eq!(scene.live(), 1);
    }

    #[test]
    fn instant_loader_resolves_on_first_poll() {
        let mut loader = InstantLoader::new();
        let a = loader.begin_load("models/zombie.glb");
        let b = loader.begin_load("models/bullet.glb");
        assert_ne!(a, b, "tickets must be distinct");

        match loader.poll(a) {
            LoadStatus::Ready(_) => {}
            other => panic!("expected Ready, got {:?}", other),
        }
    }
}
