//! **robopath-core** — grid geometry and obstacle maps.
//!
//! This crate provides the foundational types used across the *robopath*
//! workspace: the [`Cell`] coordinate, the half-open [`Range`] rectangle and
//! the [`ObstacleGrid`] bitmap that path searches read from.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Range};
pub use grid::{GridError, ObstacleGrid};
