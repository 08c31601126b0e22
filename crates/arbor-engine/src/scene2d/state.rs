use std::hash::Hash;

use glam::Mat3;

use crate::scene::{AssetTracker, RenderQueue};

/// Draw request for one 2D drawable.
///
/// Ephemeral: created during a node's update, consumed by the backend at
/// the end of the frame, never persisted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest<A> {
    /// World-space placement (column-major affine `Mat3`).
    pub matrix: Mat3,
    /// Accumulated opacity.
    pub alpha: f32,
    /// Which asset to draw; resolved by the backend.
    pub asset_id: A,
}

/// Per-frame mutable state threaded through the update traversal.
///
/// Nodes append render requests here; the [`Scene`](super::Scene) scheduler
/// clears the queue at the start of each frame, so the requests visible
/// after an update describe exactly one traversal.
#[derive(Debug)]
pub struct GameState<A> {
    /// Asset readiness bookkeeping shared with the loader side.
    pub assets: AssetTracker<A>,
    queue: RenderQueue<RenderRequest<A>>,
}

impl<A: Copy + Eq + Hash> GameState<A> {
    pub fn new() -> Self {
        Self {
            assets: AssetTracker::new(),
            queue: RenderQueue::new(),
        }
    }

    /// Appends a request. Called by drawable nodes during their update.
    pub fn push_request(&mut self, request: RenderRequest<A>) {
        self.queue.push(request);
    }

    /// Requests recorded this frame, in traversal order.
    pub fn render_requests(&self) -> &[RenderRequest<A>] {
        self.queue.as_slice()
    }

    /// Hands the frame's requests to the backend, emptying the queue.
    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, RenderRequest<A>> {
        self.queue.drain()
    }

    /// Only the scheduler begins a frame; external code cannot clear the
    /// queue mid-traversal.
    pub(super) fn begin_frame(&mut self) {
        self.queue.clear();
    }
}

impl<A: Copy + Eq + Hash> Default for GameState<A> {
    fn default() -> Self {
        Self::new()
    }
}
