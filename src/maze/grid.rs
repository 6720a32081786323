use serde::{Deserialize, Serialize};

use super::types::{Cell, Point};

/// Rectangular Wall/Open grid, row-major. Immutable once built: generation
/// carves through the crate-private setter, after which no operation changes
/// a cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub(crate) fn filled(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::Wall; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from hand-authored rows, one `u8` per cell: 0 is Open,
    /// anything else is Wall. Rows shorter than the widest row are padded
    /// with Wall. Intended for collaborator-supplied fixtures; such grids
    /// carry no perfectness guarantee and the solver must cope.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut grid = Self::filled(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    grid.set_open(Point::new(x, y));
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Point) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.y * self.width + pos.x])
    }

    pub fn is_open(&self, pos: Point) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    pub(crate) fn set_open(&mut self, pos: Point) {
        if self.in_bounds(pos) {
            self.cells[pos.y * self.width + pos.x] = Cell::Open;
        }
    }

    /// Fixed round entrance, always (1, 1).
    pub fn entrance(&self) -> Point {
        Point::new(1, 1)
    }

    /// Fixed round exit, always (width-2, height-2).
    pub fn exit(&self) -> Point {
        Point::new(self.width - 2, self.height - 2)
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Open).count()
    }
}
