use std::sync::atomic::{AtomicBool, Ordering};

use robopath_core::Cell;

use crate::edge::{Edge, EdgeId};
use crate::search::Rejection;

/// Hook into a running search.
///
/// Every method has a no-op default, so implementors only override the
/// events they care about. `()` is the observer that ignores everything.
pub trait SearchObserver {
    /// An edge was taken off the frontier (stale entries included).
    fn popped(&mut self, _id: EdgeId, _edge: &Edge) {}

    /// A candidate edge passed admission and joined the frontier.
    fn enqueued(&mut self, _id: EdgeId, _edge: &Edge) {}

    /// A candidate edge was turned away.
    fn rejected(&mut self, _id: EdgeId, _edge: &Edge, _reason: Rejection) {}

    /// `cell` was added to the visited set, just before its expansion.
    fn finalized(&mut self, _cell: Cell) {}

    /// Polled once per loop iteration; returning `true` stops the search
    /// with [`SearchError::Cancelled`](crate::SearchError::Cancelled).
    fn should_cancel(&mut self) -> bool {
        false
    }
}

impl SearchObserver for () {}

/// A shared flag, set from any thread, that cancels the search.
impl SearchObserver for &AtomicBool {
    fn should_cancel(&mut self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
