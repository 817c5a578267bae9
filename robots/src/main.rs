//! Robots — plans shortest routes for two robots heading to one target.
//!
//! Reads a scenario (see [`scenario`]) from a file or standard input, runs
//! one A\* search per robot over the shared obstacle grid and prints both
//! routes.

mod report;
mod scenario;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;
use robopath_search::PathSearch;

use report::Route;
use scenario::Scenario;

#[derive(Parser, Debug)]
#[command(version, about = "Plan shortest routes for two robots on an obstacle grid")]
struct Args {
    /// Scenario file. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Print step counts only, without the cell-by-cell routes.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let scenario = Scenario::parse(&text)?;
    info!(
        "grid {}x{} with {} obstacles, target {}",
        scenario.grid.width(),
        scenario.grid.height(),
        scenario.grid.obstacles().count(),
        scenario.target.shift(1, 1)
    );

    let routes = plan(&scenario)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_routes(&mut out, &routes, !args.quiet)?;
    Ok(())
}

/// Search a route for each robot, reusing one search state for both.
fn plan(scenario: &Scenario) -> Result<Vec<Route>, robopath_search::SearchError> {
    let mut planner = PathSearch::new();
    let mut routes = Vec::with_capacity(scenario.robots.len());
    for (name, robot) in ["A", "B"].into_iter().zip(scenario.robots) {
        info!("running A* for robot {name} from {}", robot.shift(1, 1));
        let path = planner.search(&scenario.grid, robot, scenario.target)?;
        let stats = planner.stats();
        info!(
            "robot {name}: {} steps, {} iterations, {} edges",
            path.steps(),
            stats.iterations,
            stats.edges_created
        );
        routes.push(Route { name, path });
    }
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use robopath_core::Cell;

    #[test]
    fn plans_both_robots() {
        let scenario = Scenario::parse(
            "\
5 5 1 1 5 5 3 3
OOOOO
OXXXO
OOOXO
OXOOO
OOOOO
",
        )
        .unwrap();
        let routes = plan(&scenario).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].name, "A");
        assert_eq!(routes[0].path.source(), Cell::new(0, 0));
        assert_eq!(routes[1].path.source(), Cell::new(4, 4));
        for r in &routes {
            assert_eq!(r.path.target(), Cell::new(2, 2));
            assert_eq!(r.path.steps(), 4);
        }
    }

    #[test]
    fn unreachable_target_is_an_error() {
        let scenario = Scenario::parse(
            "\
3 3 1 1 1 3 3 3
OXO
OXO
OXO
",
        )
        .unwrap();
        let err = plan(&scenario).unwrap_err();
        assert!(matches!(
            err,
            robopath_search::SearchError::Unreachable { .. }
        ));
    }
}
