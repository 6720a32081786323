use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::MazeSettings;

use super::generator::carve_maze;
use super::grid::Grid;
use super::solver::solve;
use super::types::{Direction, InvalidDimensions, MoveOutcome, Point, SessionPhase};

/// One round of the maze game: the generated grid, the player's position and
/// move history, and the round phase. Single-owner, single-writer; every
/// state change goes through `try_move`, `undo` or `reset`.
pub struct MazeSession {
    settings: MazeSettings,
    grid: Grid,
    rng: SessionRng,
    position: Point,
    history: Vec<Point>,
    phase: SessionPhase,
    cached_solution: Option<Vec<Point>>,
}

impl MazeSession {
    pub fn new(settings: MazeSettings, mut rng: SessionRng) -> Result<Self, InvalidDimensions> {
        settings.validate()?;

        let grid = carve_maze(settings.rows, settings.cols, &mut rng)?;
        let entrance = grid.entrance();
        log!(
            "Generated {}x{} maze (seed {})",
            settings.rows,
            settings.cols,
            rng.seed()
        );

        Ok(Self {
            settings,
            grid,
            rng,
            position: entrance,
            history: vec![entrance],
            phase: SessionPhase::AwaitingStart,
            cached_solution: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Accepted moves this round. The first history entry is the entrance,
    /// not a move.
    pub fn moves_made(&self) -> usize {
        self.history.len() - 1
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Validates a directional move. Bumping a wall or the grid edge is a
    /// normal rejected outcome, never an error. The first accepted move
    /// starts the round; landing on the exit completes it, after which
    /// further moves are rejected until `reset`.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase == SessionPhase::Completed {
            return self.rejected();
        }

        let Some(candidate) = self.candidate(direction) else {
            return self.rejected();
        };
        if !self.grid.is_open(candidate) {
            return self.rejected();
        }

        self.position = candidate;
        self.history.push(candidate);
        if self.phase == SessionPhase::AwaitingStart {
            self.phase = SessionPhase::InProgress;
        }
        if candidate == self.grid.exit() {
            self.phase = SessionPhase::Completed;
            log!("Maze completed in {} moves", self.moves_made());
        }

        MoveOutcome {
            accepted: true,
            position: self.position,
            completed: self.phase == SessionPhase::Completed,
        }
    }

    /// Pops the last accepted move and restores the prior position. A no-op
    /// when only the entrance is recorded. The phase is untouched: a
    /// completed round stays completed until `reset`.
    pub fn undo(&mut self) -> Point {
        if self.history.len() > 1 {
            self.history.pop();
            self.position = *self
                .history
                .last()
                .expect("Move history always holds the entrance");
        }
        self.position
    }

    /// Shortest entrance-to-exit path, start-exclusive and end-inclusive.
    /// Computed on first call and cached until `reset`. `None` only for
    /// grids not produced by the generator.
    pub fn solution(&mut self) -> Option<&[Point]> {
        if self.cached_solution.is_none() {
            self.cached_solution = solve(&self.grid, self.grid.entrance(), self.grid.exit());
        }
        self.cached_solution.as_deref()
    }

    /// Starts a fresh round: new maze from the session's RNG stream, player
    /// back at the entrance, history and cached solution discarded.
    pub fn reset(&mut self) {
        self.grid = carve_maze(self.settings.rows, self.settings.cols, &mut self.rng)
            .expect("Settings were validated at construction");
        self.position = self.grid.entrance();
        self.history = vec![self.position];
        self.phase = SessionPhase::AwaitingStart;
        self.cached_solution = None;
        log!(
            "Round reset, new {}x{} maze",
            self.settings.rows,
            self.settings.cols
        );
    }

    fn candidate(&self, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.delta();
        let x = self.position.x as i64 + dx as i64;
        let y = self.position.y as i64 + dy as i64;
        if x < 0 || y < 0 {
            return None;
        }
        let candidate = Point::new(x as usize, y as usize);
        self.grid.in_bounds(candidate).then_some(candidate)
    }

    fn rejected(&self) -> MoveOutcome {
        MoveOutcome {
            accepted: false,
            position: self.position,
            completed: self.phase == SessionPhase::Completed,
        }
    }

    #[cfg(test)]
    fn with_grid(grid: Grid) -> Self {
        let entrance = grid.entrance();
        Self {
            settings: MazeSettings::new(grid.height(), grid.width()),
            grid,
            rng: SessionRng::new(0),
            position: entrance,
            history: vec![entrance],
            phase: SessionPhase::AwaitingStart,
            cached_solution: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ring corridor around a single wall pillar; exit is (3, 3).
    fn ring_session() -> MazeSession {
        MazeSession::with_grid(Grid::from_rows(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ]))
    }

    #[test]
    fn test_new_session_starts_at_entrance() {
        let session = MazeSession::new(MazeSettings::default(), SessionRng::new(42)).unwrap();
        assert_eq!(session.position(), Point::new(1, 1));
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
        assert_eq!(session.moves_made(), 0);
    }

    #[test]
    fn test_invalid_settings_rejected_before_carving() {
        let result = MazeSession::new(MazeSettings::new(10, 10), SessionRng::new(42));
        assert_eq!(result.err(), Some(InvalidDimensions { rows: 10, cols: 10 }));
    }

    #[test]
    fn test_wall_bump_rejected_without_state_change() {
        let mut session = ring_session();
        let outcome = session.try_move(Direction::Up);
        assert!(!outcome.accepted);
        assert_eq!(outcome.position, Point::new(1, 1));
        assert_eq!(session.position(), Point::new(1, 1));
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
    }

    #[test]
    fn test_out_of_bounds_move_rejected() {
        let mut session = MazeSession::with_grid(Grid::from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
        ]));
        // Walk to the top-left corner, then push past the edge.
        assert!(session.try_move(Direction::Up).accepted);
        assert!(session.try_move(Direction::Left).accepted);
        assert_eq!(session.position(), Point::new(0, 0));
        assert!(!session.try_move(Direction::Up).accepted);
        assert!(!session.try_move(Direction::Left).accepted);
        assert_eq!(session.position(), Point::new(0, 0));
    }

    #[test]
    fn test_accepted_move_updates_position_and_history() {
        let mut session = ring_session();
        let outcome = session.try_move(Direction::Right);
        assert!(outcome.accepted);
        assert_eq!(outcome.position, Point::new(2, 1));
        assert!(!outcome.completed);
        assert_eq!(session.position(), Point::new(2, 1));
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn test_first_accepted_move_starts_round() {
        let mut session = ring_session();
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
        session.try_move(Direction::Up);
        // A rejected move does not start the round.
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
        session.try_move(Direction::Down);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn test_reaching_exit_completes_round() {
        let mut session = ring_session();
        session.try_move(Direction::Right);
        session.try_move(Direction::Right);
        session.try_move(Direction::Down);
        let outcome = session.try_move(Direction::Down);
        assert!(outcome.accepted);
        assert!(outcome.completed);
        assert_eq!(outcome.position, Point::new(3, 3));
        assert_eq!(session.phase(), SessionPhase::Completed);
    }

    #[test]
    fn test_moves_after_completion_rejected() {
        let mut session = ring_session();
        for direction in [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Down,
        ] {
            assert!(session.try_move(direction).accepted);
        }
        let outcome = session.try_move(Direction::Left);
        assert!(!outcome.accepted);
        assert!(outcome.completed);
        assert_eq!(session.position(), Point::new(3, 3));
        assert_eq!(session.phase(), SessionPhase::Completed);
    }

    #[test]
    fn test_undo_restores_previous_position() {
        let mut session = ring_session();
        session.try_move(Direction::Right);
        let after_first = session.position();
        session.try_move(Direction::Right);
        assert_eq!(session.undo(), after_first);
        assert_eq!(session.position(), after_first);
        assert_eq!(session.moves_made(), 1);
    }

    #[test]
    fn test_undo_at_entrance_is_noop() {
        let mut session = ring_session();
        assert_eq!(session.undo(), Point::new(1, 1));
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
    }

    #[test]
    fn test_undo_chain_rewinds_whole_walk() {
        let mut session = ring_session();
        let mut positions = vec![session.position()];
        for direction in [Direction::Right, Direction::Right, Direction::Down] {
            session.try_move(direction);
            positions.push(session.position());
        }
        for expected in positions.iter().rev().skip(1) {
            assert_eq!(session.undo(), *expected);
        }
        // Fully rewound; further undo stays put.
        assert_eq!(session.undo(), Point::new(1, 1));
    }

    #[test]
    fn test_solution_reaches_exit_and_is_cached() {
        let mut session = MazeSession::new(MazeSettings::default(), SessionRng::new(42)).unwrap();
        let first: Vec<Point> = session.solution().unwrap().to_vec();
        assert_eq!(*first.last().unwrap(), Point::new(19, 19));
        assert!(first.len() >= 36);
        let second: Vec<Point> = session.solution().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_solution_none_on_unsolvable_grid() {
        let mut session = MazeSession::with_grid(Grid::from_rows(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 1, 1, 1],
            &[1, 1, 1, 1, 1],
            &[1, 1, 1, 0, 1],
            &[1, 1, 1, 1, 1],
        ]));
        assert_eq!(session.solution(), None);
    }

    #[test]
    fn test_reset_starts_fresh_round() {
        let mut session =
            MazeSession::new(MazeSettings::new(9, 9), SessionRng::new(42)).unwrap();
        session.try_move(Direction::Right);
        session.try_move(Direction::Down);
        session.solution();

        session.reset();
        assert_eq!(session.position(), Point::new(1, 1));
        assert_eq!(session.phase(), SessionPhase::AwaitingStart);
        assert_eq!(session.moves_made(), 0);
        // The regenerated grid still satisfies the round invariants.
        assert!(session.grid().is_open(session.grid().entrance()));
        assert!(session.grid().is_open(session.grid().exit()));
        assert!(session.solution().is_some());
    }
}
