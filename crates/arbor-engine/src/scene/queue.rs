/// Recorded render-request stream for a frame.
///
/// Append-only while a traversal runs; the scheduler clears it at the start
/// of the next frame. Order is insertion order, i.e. the depth-first
/// traversal order of the scene tree. `clear()` keeps allocated capacity,
/// so a warmed queue does not allocate per frame.
///
/// Backends either borrow the finished frame via [`as_slice`](Self::as_slice)
/// or take ownership of the requests via [`drain`](Self::drain); both happen
/// exactly once per frame.
#[derive(Debug)]
pub struct RenderQueue<R> {
    items: Vec<R>,
}

impl<R> RenderQueue<R> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Clears recorded requests, keeping capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, request: R) {
        self.items.push(request);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Requests in traversal order.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    /// Removes and yields all requests in traversal order.
    #[inline]
    pub fn drain(&mut self) -> std::vec::Drain<'_, R> {
        self.items.drain(..)
    }
}

impl<R> Default for RenderQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}
