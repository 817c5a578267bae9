//! Scenario input: grid size, two robots, a target and the obstacle map.
//!
//! ```text
//! 5 3 1 1 5 3 3 2
//! OOOOO
//! OXXXO
//! OOOOO
//! ```
//!
//! The header holds `W H Ax Ay Bx By Tx Ty` with 1-based coordinates,
//! followed by `H` lines of `W` map characters (`X` obstacle, `O` free).

use std::fmt;

use robopath_core::{Cell, GridError, ObstacleGrid};

/// A parsed two-robot planning problem, in 0-based coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: ObstacleGrid,
    pub robots: [Cell; 2],
    pub target: Cell,
}

impl Scenario {
    /// Parse and validate a scenario.
    pub fn parse(s: &str) -> Result<Self, ScenarioError> {
        let mut lines = s.lines().map(str::trim_end).filter(|l| !l.is_empty());
        let header = lines.next().ok_or(ScenarioError::MissingHeader)?;

        let fields = header
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>()
                    .map_err(|_| ScenarioError::BadNumber(tok.to_string()))
            })
            .collect::<Result<Vec<i32>, _>>()?;
        let [width, height, ax, ay, bx, by, tx, ty] = fields[..] else {
            return Err(ScenarioError::FieldCount(fields.len()));
        };
        if width <= 0 || height <= 0 {
            return Err(ScenarioError::BadSize { width, height });
        }

        let rows: Vec<&str> = lines.collect();
        let grid = ObstacleGrid::parse_lines(&rows, width, height)?;

        let place = |what: &'static str, x: i32, y: i32| {
            let cell = Cell::new(x - 1, y - 1);
            if !grid.contains(cell) {
                return Err(ScenarioError::OutOfBounds {
                    what,
                    at: Cell::new(x, y),
                });
            }
            if grid.is_obstacle(cell) {
                return Err(ScenarioError::Blocked {
                    what,
                    at: Cell::new(x, y),
                });
            }
            Ok(cell)
        };
        let robots = [place("robot A", ax, ay)?, place("robot B", bx, by)?];
        let target = place("target", tx, ty)?;

        Ok(Self {
            grid,
            robots,
            target,
        })
    }
}

/// Errors that can occur when reading a scenario.
///
/// Positions are reported in the 1-based coordinates of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The input is empty.
    MissingHeader,
    /// A header field is not an integer.
    BadNumber(String),
    /// The header does not have exactly eight fields.
    FieldCount(usize),
    /// The grid has no cells.
    BadSize { width: i32, height: i32 },
    /// A robot or the target lies outside the grid.
    OutOfBounds { what: &'static str, at: Cell },
    /// A robot or the target sits on an obstacle.
    Blocked { what: &'static str, at: Cell },
    /// The obstacle map is malformed.
    Map(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "scenario: empty input"),
            Self::BadNumber(tok) => write!(f, "scenario: \u{201c}{tok}\u{201d} is not a number"),
            Self::FieldCount(n) => write!(f, "scenario: header has {n} fields, expected 8"),
            Self::BadSize { width, height } => {
                write!(f, "scenario: invalid grid size {width}x{height}")
            }
            Self::OutOfBounds { what, at } => write!(f, "scenario: {what} at {at} is off the grid"),
            Self::Blocked { what, at } => write!(f, "scenario: {what} at {at} is on an obstacle"),
            Self::Map(err) => write!(f, "scenario: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ScenarioError {
    fn from(err: GridError) -> Self {
        Self::Map(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5 3 1 1 5 3 3 2
OOOOO
OXOXO
OOOOO
";

    #[test]
    fn parse_sample() {
        let s = Scenario::parse(SAMPLE).unwrap();
        assert_eq!(s.grid.width(), 5);
        assert_eq!(s.grid.height(), 3);
        assert_eq!(s.robots, [Cell::new(0, 0), Cell::new(4, 2)]);
        assert_eq!(s.target, Cell::new(2, 1));
        assert!(s.grid.is_obstacle(Cell::new(1, 1)));
        assert!(s.grid.is_obstacle(Cell::new(3, 1)));
    }

    #[test]
    fn blank_lines_and_crlf_are_ignored() {
        let text = "2 2 1 1 2 2 1 2\r\n\r\nOO\r\nOO\r\n\r\n";
        let s = Scenario::parse(text).unwrap();
        assert_eq!(s.target, Cell::new(0, 1));
    }

    #[test]
    fn header_errors() {
        assert_eq!(Scenario::parse(""), Err(ScenarioError::MissingHeader));
        assert_eq!(
            Scenario::parse("5 3 1 1\nOOOOO"),
            Err(ScenarioError::FieldCount(4))
        );
        assert_eq!(
            Scenario::parse("5 3 1 1 5 x 3 2"),
            Err(ScenarioError::BadNumber("x".into()))
        );
        assert_eq!(
            Scenario::parse("0 3 1 1 1 1 1 1"),
            Err(ScenarioError::BadSize {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn map_errors_are_wrapped() {
        let err = Scenario::parse("2 2 1 1 1 1 1 1\nOO\nO?").unwrap_err();
        assert_eq!(
            err,
            ScenarioError::Map(GridError::InvalidChar {
                ch: '?',
                at: Cell::new(1, 1)
            })
        );
        assert!(std::error::Error::source(&err).is_some());

        let err = Scenario::parse("2 2 1 1 1 1 1 1\nOO").unwrap_err();
        assert_eq!(
            err,
            ScenarioError::Map(GridError::HeightMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn endpoints_validated_in_input_coordinates() {
        assert_eq!(
            Scenario::parse("2 2 3 1 1 1 1 1\nOO\nOO"),
            Err(ScenarioError::OutOfBounds {
                what: "robot A",
                at: Cell::new(3, 1)
            })
        );
        assert_eq!(
            Scenario::parse("2 2 1 1 1 1 2 2\nOO\nOX"),
            Err(ScenarioError::Blocked {
                what: "target",
                at: Cell::new(2, 2)
            })
        );
    }
}
