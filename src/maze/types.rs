use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid position. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingStart,
    InProgress,
    Completed,
}

/// Result of submitting a directional move. A rejected move (wall bump or
/// out-of-bounds) is a normal outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub position: Point,
    pub completed: bool,
}

/// Maze generation was requested with dimensions the carving lattice cannot
/// represent: rows and cols must both be odd and at least 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid maze dimensions {}x{}: rows and cols must be odd and >= 5",
            self.rows, self.cols
        )
    }
}

impl std::error::Error for InvalidDimensions {}
