use robopath_core::{Cell, ObstacleGrid};

/// Read-only view of the grid a search runs on.
///
/// Implementations must be cheap (O(1)) and free of side effects: the driver
/// may ask about the same cell many times during one search and expects the
/// same answer each time.
pub trait GridOracle {
    /// Whether `c` lies inside the grid.
    fn in_bounds(&self, c: Cell) -> bool;

    /// Whether `c` is blocked. Only asked for in-bounds cells.
    fn is_obstacle(&self, c: Cell) -> bool;

    /// Total number of cells (rows × cols).
    fn area(&self) -> usize;
}

/// Estimate of the remaining distance between two cells.
///
/// Must never overestimate the true 4-connected, unit-cost distance
/// (admissible), and must not drop by more than one per step (consistent).
pub trait Heuristic {
    /// Estimated number of steps from `from` to `to`. Must be >= 0.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

impl GridOracle for ObstacleGrid {
    #[inline]
    fn in_bounds(&self, c: Cell) -> bool {
        self.contains(c)
    }

    #[inline]
    fn is_obstacle(&self, c: Cell) -> bool {
        ObstacleGrid::is_obstacle(self, c)
    }

    #[inline]
    fn area(&self) -> usize {
        ObstacleGrid::area(self)
    }
}

impl<G: GridOracle + ?Sized> GridOracle for &G {
    #[inline]
    fn in_bounds(&self, c: Cell) -> bool {
        (**self).in_bounds(c)
    }

    #[inline]
    fn is_obstacle(&self, c: Cell) -> bool {
        (**self).is_obstacle(c)
    }

    #[inline]
    fn area(&self) -> usize {
        (**self).area()
    }
}
