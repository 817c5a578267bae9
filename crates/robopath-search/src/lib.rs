//! A\* shortest-path search for robots on obstacle grids.
//!
//! The engine finds a minimum-step, 4-connected route between two free cells
//! of a grid supplied through the [`GridOracle`] trait. It is built from a
//! few small parts:
//!
//! - an append-only [`EdgeHistory`] recording every expansion step, so that
//!   each candidate has a stable [`EdgeId`] and paths are rebuilt by walking
//!   parent ids;
//! - a [`Frontier`] ordered by estimated total cost, ties going to the
//!   earliest created edge;
//! - a [`Visited`] set of finalized cells, which also discards stale
//!   frontier entries when they are popped;
//! - the [`PathSearch`] driver, which owns all three and can be reused for
//!   any number of independent searches.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`GridOracle`] | bounds and obstacle queries, implemented for [`ObstacleGrid`](robopath_core::ObstacleGrid) |
//! | [`Heuristic`] | admissible remaining-distance estimate, [`Manhattan`] by default |
//! | [`SearchObserver`] | tracing and cooperative cancellation |

mod distance;
mod edge;
mod error;
mod frontier;
mod observer;
mod path;
mod search;
mod traits;
mod visited;

pub use distance::{Manhattan, manhattan};
pub use edge::{Edge, EdgeHistory, EdgeId};
pub use error::SearchError;
pub use frontier::Frontier;
pub use observer::SearchObserver;
pub use path::Path;
pub use search::{PathSearch, Rejection, SearchStats, search};
pub use traits::{GridOracle, Heuristic};
pub use visited::Visited;
