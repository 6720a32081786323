use crate::session_rng::SessionRng;

use super::grid::Grid;
use super::types::{Direction, InvalidDimensions, Point};

struct CarveFrame {
    cell: Point,
    order: [Direction; 4],
    next: usize,
}

impl CarveFrame {
    fn new(cell: Point, rng: &mut SessionRng) -> Self {
        let mut order = Direction::ALL;
        rng.shuffle(&mut order);
        Self {
            cell,
            order,
            next: 0,
        }
    }
}

/// Carves a perfect maze of `rows` x `cols` cells with a randomized
/// depth-first backtracker. Walks the odd-coordinate lattice in steps of two,
/// opening the connector cell between the current cell and each newly visited
/// neighbor, so corridors are exactly one cell wide. The recursion of the
/// classic formulation is replaced by an explicit frame stack; each frame
/// keeps its own shuffled direction order.
///
/// Dimensions must be odd and at least 5, otherwise the lattice has no
/// representable between-cell walls.
pub fn carve_maze(
    rows: usize,
    cols: usize,
    rng: &mut SessionRng,
) -> Result<Grid, InvalidDimensions> {
    if rows < 5 || cols < 5 || rows % 2 == 0 || cols % 2 == 0 {
        return Err(InvalidDimensions { rows, cols });
    }

    let mut grid = Grid::filled(cols, rows);
    let entrance = grid.entrance();
    grid.set_open(entrance);

    let mut stack = vec![CarveFrame::new(entrance, rng)];
    while let Some(frame) = stack.last_mut() {
        let mut carved_into = None;

        while frame.next < frame.order.len() {
            let direction = frame.order[frame.next];
            frame.next += 1;

            let Some(neighbor) = step(frame.cell, direction, 2) else {
                continue;
            };
            if !grid.in_bounds(neighbor) || grid.is_open(neighbor) {
                continue;
            }

            // The connector is the midpoint of the two-cell step.
            let connector = Point::new(
                (frame.cell.x + neighbor.x) / 2,
                (frame.cell.y + neighbor.y) / 2,
            );
            grid.set_open(connector);
            grid.set_open(neighbor);
            carved_into = Some(neighbor);
            break;
        }

        match carved_into {
            Some(neighbor) => stack.push(CarveFrame::new(neighbor, rng)),
            None => {
                stack.pop();
            }
        }
    }

    // The exit sits on the carving lattice, so this is normally a no-op; it
    // guards the corner against any future change to the walk's start point.
    grid.set_open(grid.exit());

    Ok(grid)
}

fn step(pos: Point, direction: Direction, distance: i64) -> Option<Point> {
    let (dx, dy) = direction.delta();
    let x = pos.x as i64 + dx as i64 * distance;
    let y = pos.y as i64 + dy as i64 * distance;
    if x < 0 || y < 0 {
        return None;
    }
    Some(Point::new(x as usize, y as usize))
}
