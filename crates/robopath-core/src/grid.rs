//! Static obstacle maps.
//!
//! An [`ObstacleGrid`] is a `width × height` bitmap where each cell is either
//! free or blocked. It can be built programmatically or parsed from text
//! where `X` marks an obstacle and `O` a free cell.

use std::fmt;

use crate::geom::{Cell, Range};

/// Character marking a blocked cell in textual maps.
pub const OBSTACLE: char = 'X';
/// Character marking a free cell in textual maps.
pub const FREE: char = 'O';

/// A rectangular obstacle bitmap anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct ObstacleGrid {
    bounds: Range,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Create a grid of the given size with every cell free.
    ///
    /// Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
        }
    }

    /// Parse a textual map.
    ///
    /// Every line must have the same width and contain only [`OBSTACLE`] and
    /// [`FREE`]. Surrounding whitespace of the whole text and trailing `\r`
    /// on each line are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim()
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = match lines.first() {
            Some(l) if !l.is_empty() => l.chars().count(),
            _ => return Err(GridError::Empty),
        };
        Self::parse_lines(&lines, width as i32, lines.len() as i32)
    }

    /// Parse exactly `height` lines of exactly `width` characters each.
    pub fn parse_lines<S: AsRef<str>>(
        lines: &[S],
        width: i32,
        height: i32,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        if lines.len() != height as usize {
            return Err(GridError::HeightMismatch {
                expected: height,
                found: lines.len(),
            });
        }
        let mut grid = Self::new(width, height);
        for (y, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width as usize {
                return Err(GridError::WidthMismatch {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let at = Cell::new(x as i32, y as i32);
                match ch {
                    OBSTACLE => grid.set_obstacle(at, true),
                    FREE => {}
                    _ => return Err(GridError::InvalidChar { ch, at }),
                }
            }
        }
        Ok(grid)
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells (`width × height`).
    #[inline]
    pub fn area(&self) -> usize {
        self.blocked.len()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is blocked. Cells outside the grid are reported free;
    /// check [`contains`](Self::contains) first.
    #[inline]
    pub fn is_obstacle(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| self.blocked[i])
    }

    /// Block or clear `c`. No-op if `c` is outside the grid.
    pub fn set_obstacle(&mut self, c: Cell, blocked: bool) {
        if let Some(i) = self.index(c) {
            self.blocked[i] = blocked;
        }
    }

    /// Iterate over every blocked cell, line by line.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds.iter().filter(|&c| self.is_obstacle(c))
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        self.bounds.index(c)
    }
}

/// Serialized form of an [`ObstacleGrid`]: its size and row-major cells.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for ObstacleGrid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        if repr.width < 0 || repr.height < 0 {
            return Err(GridError::NegativeSize {
                width: repr.width,
                height: repr.height,
            });
        }
        let bounds = Range::with_size(repr.width, repr.height);
        if repr.blocked.len() != bounds.len() {
            return Err(GridError::CellCount {
                expected: bounds.len(),
                found: repr.blocked.len(),
            });
        }
        Ok(Self {
            bounds,
            blocked: repr.blocked,
        })
    }
}

#[cfg(feature = "serde")]
impl From<ObstacleGrid> for GridRepr {
    fn from(grid: ObstacleGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            blocked: grid.blocked,
        }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.is_obstacle(Cell::new(x, y)) {
                    OBSTACLE
                } else {
                    FREE
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing or decoding an obstacle map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map has no cells.
    Empty,
    /// A line does not have the expected number of characters.
    WidthMismatch {
        line: usize,
        expected: i32,
        found: usize,
    },
    /// The number of lines does not match the declared height.
    HeightMismatch { expected: i32, found: usize },
    /// A character other than `X` or `O` was found.
    InvalidChar { ch: char, at: Cell },
    /// A decoded grid declares a negative size.
    NegativeSize { width: i32, height: i32 },
    /// A decoded grid's cell list does not match its size.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::WidthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {} has {found} cells, expected {expected}",
                line + 1
            ),
            Self::HeightMismatch { expected, found } => {
                write!(f, "map: found {found} lines, expected {expected}")
            }
            Self::InvalidChar { ch, at } => write!(
                f,
                "map contains invalid character \u{201c}{ch}\u{201d} at {at}"
            ),
            Self::NegativeSize { width, height } => {
                write!(f, "map: negative size {width}x{height}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "map: {found} cells listed, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
OOOO
OXXO
OOOO";

    #[test]
    fn parse_and_size() {
        let g = ObstacleGrid::parse(ROOM).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.area(), 12);
        assert!(g.is_obstacle(Cell::new(1, 1)));
        assert!(g.is_obstacle(Cell::new(2, 1)));
        assert!(!g.is_obstacle(Cell::new(0, 0)));
        assert_eq!(
            g.obstacles().collect::<Vec<_>>(),
            vec![Cell::new(1, 1), Cell::new(2, 1)]
        );
    }

    #[test]
    fn display_matches_input() {
        let g = ObstacleGrid::parse(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn out_of_bounds_is_not_an_obstacle() {
        let mut g = ObstacleGrid::new(2, 2);
        g.set_obstacle(Cell::new(5, 5), true);
        assert!(!g.contains(Cell::new(5, 5)));
        assert!(!g.is_obstacle(Cell::new(5, 5)));
        assert!(!g.is_obstacle(Cell::new(-1, 0)));
        assert_eq!(g.obstacles().count(), 0);
    }

    #[test]
    fn set_and_clear_obstacle() {
        let mut g = ObstacleGrid::new(3, 3);
        let c = Cell::new(2, 1);
        g.set_obstacle(c, true);
        assert!(g.is_obstacle(c));
        g.set_obstacle(c, false);
        assert!(!g.is_obstacle(c));
    }

    #[test]
    fn crlf_lines_accepted() {
        let g = ObstacleGrid::parse("OX\r\nXO\r\n").unwrap();
        assert!(g.is_obstacle(Cell::new(1, 0)));
        assert!(g.is_obstacle(Cell::new(0, 1)));
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            ObstacleGrid::parse("OO\nOOO"),
            Err(GridError::WidthMismatch {
                line: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn invalid_char_error() {
        assert_eq!(
            ObstacleGrid::parse("OO\nO#"),
            Err(GridError::InvalidChar {
                ch: '#',
                at: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn declared_height_enforced() {
        let err = ObstacleGrid::parse_lines(&["OO"], 2, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::HeightMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(ObstacleGrid::parse("  \n"), Err(GridError::Empty));
    }

    #[test]
    fn far_corner_of_huge_grid() {
        // 2.5e9 cells: row-major offsets no longer fit in an i32.
        let mut g = ObstacleGrid::new(50_000, 50_000);
        let bottom_left = Cell::new(0, 49_999);
        let bottom_right = Cell::new(49_999, 49_999);
        g.set_obstacle(bottom_left, true);
        g.set_obstacle(bottom_right, true);
        assert!(g.is_obstacle(bottom_left));
        assert!(g.is_obstacle(bottom_right));
        assert!(!g.is_obstacle(Cell::new(1, 49_999)));
        assert!(!g.is_obstacle(Cell::new(0, 0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = ObstacleGrid::parse("OXO\nXOO").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(
            json,
            r#"{"width":3,"height":2,"blocked":[false,true,false,true,false,false]}"#
        );
        let back: ObstacleGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn short_cell_list_is_rejected() {
        let err = serde_json::from_str::<ObstacleGrid>(
            r#"{"width":3,"height":2,"blocked":[false,true]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2 cells listed, expected 6"));
    }

    #[test]
    fn negative_size_is_rejected() {
        let err = serde_json::from_str::<ObstacleGrid>(
            r#"{"width":-1,"height":2,"blocked":[]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("negative size -1x2"));
    }
}
