use robopath_core::Cell;

use crate::edge::{Edge, EdgeHistory, EdgeId};

/// A route found by a search.
///
/// Holds the chain of edges from the target back to the source, ending with
/// the source's self-loop seed edge. A path always has at least one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    edges: Vec<Edge>,
}

impl Path {
    /// Rebuild the route ending at `goal` by walking parent ids back to the
    /// seed.
    pub(crate) fn extract(history: &EdgeHistory, goal: EdgeId) -> Self {
        let edges: Vec<Edge> = history.ancestry(goal).copied().collect();
        debug_assert!(edges.last().is_some_and(Edge::is_seed));
        debug_assert_eq!(edges.len() as i32, history[goal].distance + 1);
        Self { edges }
    }

    /// Edges in target-to-source order; the last one is the seed.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Take the edges, in target-to-source order.
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Number of edges, seed included.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of moves from source to target.
    #[inline]
    pub fn steps(&self) -> i32 {
        self.edges.first().map_or(0, |e| e.distance)
    }

    /// Where the route starts.
    pub fn source(&self) -> Cell {
        self.edges.last().map_or(Cell::ZERO, |e| e.to)
    }

    /// Where the route ends.
    pub fn target(&self) -> Cell {
        self.edges.first().map_or(Cell::ZERO, |e| e.to)
    }

    /// Cells in travel order, source first and target last.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = Cell> + '_ {
        self.edges.iter().rev().map(|e| e.to)
    }

    /// `(from, to)` moves in travel order. The seed is not a move and is
    /// skipped, so this yields [`steps`](Self::steps) pairs.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = (Cell, Cell)> + '_ {
        self.edges
            .iter()
            .rev()
            .filter(|e| !e.is_seed())
            .map(|e| (e.from, e.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line() -> Path {
        let mut h = EdgeHistory::new();
        let s = h.seed(Cell::new(0, 0), 2);
        let a = h.extend(s, Cell::new(1, 0), 1);
        let b = h.extend(a, Cell::new(2, 0), 0);
        Path::extract(&h, b)
    }

    #[test]
    fn edges_run_target_to_source() {
        let p = straight_line();
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.target(), Cell::new(2, 0));
        assert_eq!(p.source(), Cell::new(0, 0));
        assert!(p.edges()[2].is_seed());
        for w in p.edges().windows(2) {
            assert_eq!(w[0].from, w[1].to);
        }
    }

    #[test]
    fn cells_and_segments_run_forward() {
        let p = straight_line();
        assert_eq!(
            p.cells().collect::<Vec<_>>(),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(
            p.segments().collect::<Vec<_>>(),
            vec![
                (Cell::new(0, 0), Cell::new(1, 0)),
                (Cell::new(1, 0), Cell::new(2, 0))
            ]
        );
    }

    #[test]
    fn seed_only_path() {
        let mut h = EdgeHistory::new();
        let s = h.seed(Cell::new(4, 4), 0);
        let p = Path::extract(&h, s);
        assert_eq!(p.len(), 1);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.segments().count(), 0);
        assert_eq!(p.source(), p.target());
        assert_eq!(p.into_edges()[0].parent, s);
    }
}
