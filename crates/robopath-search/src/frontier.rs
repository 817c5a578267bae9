use std::collections::BinaryHeap;

use crate::edge::{Edge, EdgeId};

/// Heap entry: an edge id with its cached `f = g + h`.
///
/// Edges never change once created, so caching the cost is equivalent to
/// looking it up in the history on every comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    f: i32,
    id: EdgeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the edge created first.
        other.f.cmp(&self.f).then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Edges waiting to be expanded, cheapest estimated total cost first.
///
/// Several entries may point at the same cell through different edges; the
/// search driver discards the stale ones when they are popped instead of
/// removing them eagerly.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert edge `id`, ordered by `edge.cost()`.
    #[inline]
    pub fn push(&mut self, id: EdgeId, edge: &Edge) {
        self.heap.push(Entry { f: edge.cost(), id });
    }

    /// The cheapest edge and its cost, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(EdgeId, i32)> {
        self.heap.peek().map(|e| (e.id, e.f))
    }

    /// Remove and return the cheapest edge.
    #[inline]
    pub fn pop(&mut self) -> Option<EdgeId> {
        self.heap.pop().map(|e| e.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeHistory;
    use robopath_core::Cell;

    #[test]
    fn pops_lowest_cost_first() {
        let mut h = EdgeHistory::new();
        let s = h.seed(Cell::new(0, 0), 6);
        let a = h.extend(s, Cell::new(1, 0), 1); // f = 2
        let b = h.extend(s, Cell::new(0, 1), 9); // f = 10

        let mut f = Frontier::new();
        for id in [s, b, a] {
            f.push(id, &h[id]);
        }
        assert_eq!(f.len(), 3);
        assert_eq!(f.peek(), Some((a, 2)));
        assert_eq!(f.pop(), Some(a));
        assert_eq!(f.pop(), Some(s));
        assert_eq!(f.pop(), Some(b));
        assert_eq!(f.pop(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_go_to_earliest_edge() {
        let mut h = EdgeHistory::new();
        let s = h.seed(Cell::new(1, 1), 4);
        let ids: Vec<_> = Cell::new(1, 1)
            .neighbors_4()
            .into_iter()
            .map(|n| h.extend(s, n, 3))
            .collect();

        let mut f = Frontier::new();
        for &id in ids.iter().rev() {
            f.push(id, &h[id]);
        }
        let popped: Vec<_> = std::iter::from_fn(|| f.pop()).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn duplicates_of_one_cell_coexist() {
        let mut h = EdgeHistory::new();
        let s = h.seed(Cell::new(0, 0), 2);
        let a = h.extend(s, Cell::new(1, 0), 1);
        let b = h.extend(a, Cell::new(0, 0), 2);
        let mut f = Frontier::new();
        f.push(s, &h[s]);
        f.push(b, &h[b]);
        assert_eq!(f.len(), 2);
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.peek(), None);
    }
}
