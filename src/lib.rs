pub mod logger;
pub mod maze;
mod session_rng;
mod settings;

pub use maze::{Cell, Direction, Grid, InvalidDimensions, MazeSession, MoveOutcome, Point,
    SessionPhase, carve_maze, solve};
pub use session_rng::SessionRng;
pub use settings::MazeSettings;
