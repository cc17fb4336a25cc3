use serde::Serialize;

use crate::{PlayerId, HEIGHT, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The grid of cells. Row 0 is the top, row `HEIGHT - 1` is the bottom.
///
/// Cells only ever go from `Empty` to `Occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Lowest empty row in `column`, or `None` when the column is full or does not exist.
    pub fn find_drop_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }

        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Occupies an empty cell. The coordinates should come from `find_drop_row`.
    pub fn place(&mut self, row: usize, column: usize, player: PlayerId) {
        assert!(
            row < HEIGHT && column < WIDTH,
            "Cell ({}, {}) is outside the board",
            row,
            column
        );
        debug_assert!(
            self.cells[row][column].is_empty(),
            "Cell ({}, {}) is already occupied",
            row,
            column
        );

        self.cells[row][column] = Cell::Occupied(player);
    }

    /// Panics when `(row, column)` is off the board.
    pub fn cell_at(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Like `cell_at`, but signed and bounds checked for scanning lines off the edge.
    pub fn get(&self, row: isize, column: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;

        self.cells.get(row)?.get(column).copied()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.find_drop_row(column).is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| !self.is_column_full(column)).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
