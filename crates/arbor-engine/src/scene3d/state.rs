use std::hash::Hash;

use glam::Mat4;

use crate::scene::{AssetTracker, RenderQueue};

/// Draw request for one 3D drawable. Lives for exactly one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest<A> {
    /// World-space placement (column-major `Mat4`).
    pub matrix: Mat4,
    /// Accumulated opacity.
    pub alpha: f32,
    /// Which asset to draw; resolved by the backend.
    pub asset_id: A,
}

/// Per-frame mutable state threaded through the 3D update traversal.
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

    pub fn push_request(&mut self, request: RenderRequest<A>) {
        self.queue.push(request);
    }

    /// Requests recorded this frame, in traversal order.
    pub fn render_requests(&self) -> &[RenderRequest<A>] {
        self.queue.as_slice()
    }

    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, RenderRequest<A>> {
        self.queue.drain()
    }

    pub(super) fn begin_frame(&mut self) {
        self.queue.clear();
    }
}

impl<A: Copy + Eq + Hash> Default for GameState<A> {
    fn default() -> Self {
        Self::new()
    }
}
