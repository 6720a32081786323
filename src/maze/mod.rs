mod generator;
mod grid;
mod session;
mod solver;
mod types;

pub use generator::carve_maze;
pub use grid::Grid;
pub use session::MazeSession;
pub use solver::solve;
pub use types::{Cell, Direction, InvalidDimensions, MoveOutcome, Point, SessionPhase};
