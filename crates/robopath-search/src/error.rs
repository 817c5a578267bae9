use std::fmt;

use robopath_core::Cell;

/// Ways a search can end without a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds { cell: Cell },
    /// An endpoint sits on an obstacle.
    Blocked { cell: Cell },
    /// Every cell reachable from `source` was explored without meeting
    /// `target`.
    Unreachable {
        source: Cell,
        target: Cell,
        explored: usize,
    },
    /// The observer asked the search to stop.
    Cancelled { iterations: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "search: {cell} is outside the grid"),
            Self::Blocked { cell } => write!(f, "search: {cell} is an obstacle"),
            Self::Unreachable {
                source,
                target,
                explored,
            } => write!(
                f,
                "search: no path from {source} to {target} ({explored} cells explored)"
            ),
            Self::Cancelled { iterations } => {
                write!(f, "search: cancelled after {iterations} iterations")
            }
        }
    }
}

impl std::error::Error for SearchError {}
