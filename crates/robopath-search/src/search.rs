//! The A\* driver.

use log::{debug, trace};
use robopath_core::Cell;

use crate::distance::Manhattan;
use crate::edge::{EdgeHistory, EdgeId};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::observer::SearchObserver;
use crate::path::Path;
use crate::traits::{GridOracle, Heuristic};
use crate::visited::Visited;

/// Why a candidate edge was kept out of the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The step leaves the grid.
    OutOfBounds,
    /// The step lands on an obstacle.
    Obstacle,
    /// The step lands on a cell that is already finalized.
    Visited,
}

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Loop iterations that expanded a cell.
    pub iterations: usize,
    /// Edges appended to the history, seed included.
    pub edges_created: usize,
    /// Edges admitted to the frontier, seed included.
    pub enqueued: usize,
    /// Frontier entries discarded because their cell was already visited.
    pub stale_pops: usize,
    pub rejected_out_of_bounds: usize,
    pub rejected_obstacle: usize,
    pub rejected_visited: usize,
}

impl SearchStats {
    fn record(&mut self, reason: Rejection) {
        match reason {
            Rejection::OutOfBounds => self.rejected_out_of_bounds += 1,
            Rejection::Obstacle => self.rejected_obstacle += 1,
            Rejection::Visited => self.rejected_visited += 1,
        }
    }

    /// Total number of rejected candidates.
    pub fn rejected(&self) -> usize {
        self.rejected_out_of_bounds + self.rejected_obstacle + self.rejected_visited
    }
}

/// Reusable A\* search state.
///
/// `PathSearch` owns the edge history, frontier and visited set so that
/// repeated searches reuse their allocations. Each call to
/// [`search`](Self::search) is independent: all state is cleared when it
/// starts and again when it returns. Searches that run at the same time need
/// one `PathSearch` each; the grid itself can be shared.
#[derive(Debug, Clone, Default)]
pub struct PathSearch<H = Manhattan> {
    heuristic: H,
    history: EdgeHistory,
    frontier: Frontier,
    visited: Visited,
    stats: SearchStats,
}

impl PathSearch<Manhattan> {
    /// Create a search using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> PathSearch<H> {
    /// Create a search using a custom admissible heuristic.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            history: EdgeHistory::new(),
            frontier: Frontier::new(),
            visited: Visited::new(),
            stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a shortest 4-connected path from `source` to `target`.
    ///
    /// Returns the path in target-to-source order, ending with the seed edge
    /// on `source`.
    pub fn search<G: GridOracle + ?Sized>(
        &mut self,
        grid: &G,
        source: Cell,
        target: Cell,
    ) -> Result<Path, SearchError> {
        self.search_observed(grid, source, target, &mut ())
    }

    /// Like [`search`](Self::search), reporting progress to `observer` and
    /// polling it for cancellation once per iteration.
    pub fn search_observed<G, O>(
        &mut self,
        grid: &G,
        source: Cell,
        target: Cell,
        observer: &mut O,
    ) -> Result<Path, SearchError>
    where
        G: GridOracle + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.reset();
        let result = self.run(grid, source, target, observer);
        self.stats.edges_created = self.history.len();
        match &result {
            Ok(path) => debug!(
                "A* {source} -> {target}: {} steps, {} iterations",
                path.steps(),
                self.stats.iterations
            ),
            Err(err) => debug!("A* {source} -> {target}: {err}"),
        }
        self.reset_buffers();
        result
    }

    fn run<G, O>(
        &mut self,
        grid: &G,
        source: Cell,
        target: Cell,
        observer: &mut O,
    ) -> Result<Path, SearchError>
    where
        G: GridOracle + ?Sized,
        O: SearchObserver + ?Sized,
    {
        for cell in [source, target] {
            if !grid.in_bounds(cell) {
                return Err(SearchError::OutOfBounds { cell });
            }
            if grid.is_obstacle(cell) {
                return Err(SearchError::Blocked { cell });
            }
        }

        // The seed is a self-loop on the source, so the first iteration is
        // no different from the others.
        let seed = self
            .history
            .seed(source, self.heuristic.estimate(source, target));
        self.admit(grid, seed, observer);

        let bound = grid.area();
        loop {
            if observer.should_cancel() {
                return Err(SearchError::Cancelled {
                    iterations: self.stats.iterations,
                });
            }
            let Some(id) = self.frontier.pop() else {
                return Err(SearchError::Unreachable {
                    source,
                    target,
                    explored: self.visited.len(),
                });
            };
            let edge = self.history[id];
            observer.popped(id, &edge);

            // Stale entry: with an admissible heuristic the first visit to a
            // cell is never worse than a later one.
            if self.visited.contains(edge.to) {
                self.stats.stale_pops += 1;
                continue;
            }
            trace!("at {} (g={}, h={})", edge.to, edge.distance, edge.heuristic);

            if edge.to == target {
                return Ok(Path::extract(&self.history, id));
            }

            self.visited.insert(edge.to);
            observer.finalized(edge.to);

            for next in edge.to.neighbors_4() {
                let h = self.heuristic.estimate(next, target);
                let child = self.history.extend(id, next, h);
                self.admit(grid, child, observer);
            }

            // Every expansion finalizes a new cell, so a correct engine can
            // never run more iterations than the grid has cells.
            self.stats.iterations += 1;
            debug_assert!(
                self.stats.iterations <= bound,
                "A* ran {} iterations on a grid of {bound} cells",
                self.stats.iterations
            );
        }
    }

    /// Put candidate `id` on the frontier unless it leaves the grid, hits an
    /// obstacle or revisits a finalized cell.
    fn admit<G, O>(&mut self, grid: &G, id: EdgeId, observer: &mut O) -> bool
    where
        G: GridOracle + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let edge = self.history[id];
        let rejection = if !grid.in_bounds(edge.to) {
            Some(Rejection::OutOfBounds)
        } else if grid.is_obstacle(edge.to) {
            Some(Rejection::Obstacle)
        } else if self.visited.contains(edge.to) {
            Some(Rejection::Visited)
        } else {
            None
        };
        if let Some(reason) = rejection {
            trace!("{} -> {}: rejected ({reason:?})", edge.from, edge.to);
            self.stats.record(reason);
            observer.rejected(id, &edge, reason);
            return false;
        }

        assert!(edge.distance >= 0, "negative distance on edge {id:?}");
        assert!(
            edge.distance as usize <= grid.area(),
            "distance {} exceeds grid area on edge {id:?}",
            edge.distance
        );
        assert!(edge.heuristic >= 0, "negative heuristic on edge {id:?}");
        assert!(grid.in_bounds(edge.from), "edge {id:?} starts off the grid");
        assert!(
            edge.is_seed() || edge.from.is_adjacent_4(edge.to),
            "edge {id:?} is not a single orthogonal step"
        );

        trace!("{} -> {}: enqueued as {}", edge.from, edge.to, id.index());
        self.frontier.push(id, &edge);
        self.stats.enqueued += 1;
        observer.enqueued(id, &edge);
        true
    }

    fn reset(&mut self) {
        self.reset_buffers();
        self.stats = SearchStats::default();
    }

    fn reset_buffers(&mut self) {
        self.history.clear();
        self.frontier.clear();
        self.visited.clear();
    }
}

/// Find a shortest path with fresh state and the Manhattan heuristic.
///
/// See [`PathSearch::search`].
pub fn search<G: GridOracle + ?Sized>(
    grid: &G,
    source: Cell,
    target: Cell,
) -> Result<Path, SearchError> {
    PathSearch::new().search(grid, source, target)
}
