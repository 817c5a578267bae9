//! Expansion records and the append-only arena that owns them.

use std::ops::Index;

use robopath_core::Cell;

/// Stable identity of an [`Edge`]: its position in the [`EdgeHistory`].
///
/// Ids are handed out in creation order, so comparing two ids tells which
/// edge was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position in the history.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One expansion step: moving from `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Edge that was expanded to produce this one. The seed is its own parent.
    pub parent: EdgeId,
    pub from: Cell,
    pub to: Cell,
    /// Exact number of steps from the source to `to` along the parent chain.
    pub distance: i32,
    /// Estimated number of steps from `to` to the target.
    pub heuristic: i32,
}

impl Edge {
    /// Estimated total cost of a route through this edge (`g + h`).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.distance + self.heuristic
    }

    /// Whether this is the self-loop edge a search starts from.
    #[inline]
    pub fn is_seed(&self) -> bool {
        self.from == self.to
    }
}

/// Append-only store of every edge generated during one search.
///
/// Edges are never mutated or removed while a search runs; the whole history
/// is cleared between searches (keeping its allocation).
#[derive(Debug, Clone, Default)]
pub struct EdgeHistory {
    edges: Vec<Edge>,
}

impl EdgeHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the self-loop edge sitting on `source`.
    pub fn seed(&mut self, source: Cell, heuristic: i32) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            parent: id,
            from: source,
            to: source,
            distance: 0,
            heuristic,
        });
        id
    }

    /// Append the step from the `to` cell of `parent` onto `next`, one step
    /// further from the source than its parent.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this history.
    pub fn extend(&mut self, parent: EdgeId, next: Cell, heuristic: i32) -> EdgeId {
        let p = self.edges[parent.0];
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            parent,
            from: p.to,
            to: next,
            distance: p.distance + 1,
            heuristic,
        });
        id
    }

    /// Look up an edge.
    #[inline]
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Number of edges recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Follow parent ids from `id` back to the seed, yielding every edge on
    /// the way (starting with `id` itself, ending with the seed).
    pub fn ancestry(&self, id: EdgeId) -> Ancestry<'_> {
        Ancestry {
            history: self,
            next: Some(id),
        }
    }

    /// Forget every edge, ready for a fresh search.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

impl Index<EdgeId> for EdgeHistory {
    type Output = Edge;

    #[inline]
    fn index(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
}

/// Iterator returned by [`EdgeHistory::ancestry`].
pub struct Ancestry<'a> {
    history: &'a EdgeHistory,
    next: Option<EdgeId>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<&'a Edge> {
        let id = self.next?;
        let edge = self.history.get(id)?;
        // Parents are always created before their children.
        self.next = (!edge.is_seed() && edge.parent < id).then_some(edge.parent);
        Some(edge)
    }
}
