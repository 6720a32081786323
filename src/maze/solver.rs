use std::collections::{HashMap, VecDeque};

use super::grid::Grid;
use super::types::{Direction, Point};

/// Shortest path between two open cells, breadth-first over the 4-connected
/// open-cell graph. The returned path excludes `start` and ends with `end`;
/// `None` means `end` is unreachable (or an endpoint is a wall or out of
/// bounds). Expansion order is fixed, so the result is deterministic for a
/// given grid.
pub fn solve(grid: &Grid, start: Point, end: Point) -> Option<Vec<Point>> {
    if !grid.is_open(start) || !grid.is_open(end) {
        return None;
    }
    if start == end {
        return Some(Vec::new());
    }

    let mut parents: HashMap<Point, Point> = HashMap::new();
    let mut frontier = VecDeque::new();
    parents.insert(start, start);
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell == end {
            return Some(reconstruct(&parents, start, end));
        }

        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let x = cell.x as i64 + dx as i64;
            let y = cell.y as i64 + dy as i64;
            if x < 0 || y < 0 {
                continue;
            }

            let neighbor = Point::new(x as usize, y as usize);
            if !grid.is_open(neighbor) || parents.contains_key(&neighbor) {
                continue;
            }

            // Marking on enqueue keeps a cell from entering the frontier
            // twice via different parents.
            parents.insert(neighbor, cell);
            frontier.push_back(neighbor);
        }
    }

    None
}

fn reconstruct(parents: &HashMap<Point, Point>, start: Point, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cell = end;
    while cell != start {
        path.push(cell);
        cell = parents[&cell];
    }
    path.reverse();
    path
}
