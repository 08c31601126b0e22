use std::collections::HashSet;
use std::hash::Hash;

/// Asset readiness bookkeeping.
///
/// Gameplay code asks [`is_ready`](Self::is_ready) before acting on an
/// asset; a miss records the id as pending so the loader side can pick it
/// up via [`take_pending`](Self::take_pending) and report completion with
/// [`mark_ready`](Self::mark_ready). Loading itself is a backend concern.
#[derive(Debug)]
pub struct AssetTracker<A> {
    ready: HashSet<A>,
    pending: HashSet<A>,
}

impl<A: Copy + Eq + Hash> AssetTracker<A> {
    pub fn new() -> Self {
        Self {
            ready: HashSet::new(),
            pending: HashSet::new(),
        }
    }

    /// Returns whether `id` has been marked ready.
    ///
    /// A miss records `id` as pending (deduplicated) so the loader side
    /// learns about it on the next [`take_pending`](Self::take_pending).
    pub fn is_ready(&mut self, id: A) -> bool {
        if self.ready.contains(&id) {
            return true;
        }
        self.pending.insert(id);
        false
    }

    /// Drains the ids recorded as pending since the last call.
    pub fn take_pending(&mut self) -> Vec<A> {
        self.pending.drain().collect()
    }

    /// Marks `id` as ready; subsequent [`is_ready`](Self::is_ready) calls
    /// return true.
    pub fn mark_ready(&mut self, id: A) {
        self.pending.remove(&id);
        self.ready.insert(id);
    }
}

impl<A: Copy + Eq + Hash> Default for AssetTracker<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_records_pending_once() {
        let mut tracker = AssetTracker::new();
        assert!(!tracker.is_ready("tree"));
        assert!(!tracker.is_ready("tree"));
        assert_eq!(tracker.take_pending(), vec!["tree"]);
        assert!(tracker.take_pending().is_empty());
    }

    #[test]
    fn mark_ready_flips_the_answer() {
        let mut tracker = AssetTracker::new();
        assert!(!tracker.is_ready(7u32));
        tracker.mark_ready(7);
        assert!(tracker.is_ready(7));
        // Marking ready also removes the id from the pending set.
        assert!(tracker.take_pending().is_empty());
    }
}
