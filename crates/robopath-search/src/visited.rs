use std::collections::HashSet;

use robopath_core::Cell;

/// Cells whose shortest distance from the source is final.
///
/// Grows monotonically during a search and is cleared between searches.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    cells: HashSet<Cell>,
}

impl Visited {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `c` as finalized. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, c: Cell) -> bool {
        self.cells.insert(c)
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_once() {
        let mut v = Visited::new();
        let c = Cell::new(3, 1);
        assert!(!v.contains(c));
        assert!(v.insert(c));
        assert!(!v.insert(c));
        assert!(v.contains(c));
        assert_eq!(v.len(), 1);
        v.clear();
        assert!(v.is_empty());
    }
}
