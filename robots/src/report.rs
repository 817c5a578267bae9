//! Plain-text route listing.

use std::collections::HashSet;
use std::io::{self, Write};

use robopath_core::Cell;
use robopath_search::Path;

/// A robot's planned route.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub path: Path,
}

/// Number of moves that appear, in the same direction, on both paths.
pub fn shared_segments(a: &Path, b: &Path) -> usize {
    let moves: HashSet<(Cell, Cell)> = a.segments().collect();
    b.segments().filter(|m| moves.contains(m)).count()
}

/// Write every route, then how many moves the first two have in common.
///
/// Coordinates are printed 1-based, matching the scenario input. With
/// `list_cells` unset only the step counts are written.
pub fn write_routes<W: Write>(out: &mut W, routes: &[Route], list_cells: bool) -> io::Result<()> {
    for route in routes {
        writeln!(out, "Robot {}: {} steps", route.name, route.path.steps())?;
        if list_cells {
            for c in route.path.cells() {
                writeln!(out, "{}", c.shift(1, 1))?;
            }
            writeln!(out)?;
        }
    }
    if let [a, b, ..] = routes {
        writeln!(
            out,
            "Shared segments: {}",
            shared_segments(&a.path, &b.path)
        )?;
    }
    Ok(())
}
