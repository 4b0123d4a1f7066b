use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InsertError;

/// Board height in rows.
pub const ROWS: usize = 6;
/// Board width in columns.
pub const COLS: usize = 7;
/// Number of contiguous same-colored cells that form a winning line.
pub const WIN_LEN: usize = 4;

/// One grid position: empty, or occupied by a colored token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Get cell name for display
    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "Empty",
            Cell::Red => "Red",
            Cell::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        };
        write!(f, "{symbol}")
    }
}

/// A Connect Four grid.
///
/// Row 0 is the top, row `ROWS - 1` is the bottom; tokens fall to the lowest
/// empty cell of their column. The board enforces no turn order and never
/// locks: insertions are accepted even after a winning line exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a token into a column, returning the row where it landed.
    ///
    /// The token settles in the lowest empty cell of the column. Exactly one
    /// cell changes on success; on error the grid is untouched.
    pub fn insert(&mut self, color: Cell, column: usize) -> Result<usize, InsertError> {
        if color == Cell::Empty {
            return Err(InsertError::EmptyColor);
        }
        if column >= COLS {
            return Err(InsertError::InvalidColumn { column });
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = color;
                return Ok(row);
            }
        }

        Err(InsertError::ColumnFull { column })
    }

    /// Scan the whole grid for a winning line of [`WIN_LEN`] same-colored
    /// cells, returning the winning color if one exists.
    ///
    /// Scan order is fixed: horizontal, then vertical, then down-right
    /// diagonal, then down-left diagonal; the first qualifying line found
    /// determines the reported color. Read-only and idempotent.
    pub fn winner(&self) -> Option<Cell> {
        self.winner_horizontal()
            .or_else(|| self.winner_vertical())
            .or_else(|| self.winner_diagonal())
    }

    /// Tuple-shaped variant of [`Board::winner`]: `(true, color)` when a
    /// winning line exists, `(false, Cell::Empty)` otherwise.
    pub fn has_winner(&self) -> (bool, Cell) {
        match self.winner() {
            Some(color) => (true, color),
            None => (false, Cell::Empty),
        }
    }

    /// Check rows for 4-in-a-row, left to right
    fn winner_horizontal(&self) -> Option<Cell> {
        for i in 0..ROWS {
            for j in 0..=COLS - WIN_LEN {
                let color = self.cells[i][j];
                if color == Cell::Empty {
                    continue;
                }
                if (1..WIN_LEN).all(|k| self.cells[i][j + k] == color) {
                    return Some(color);
                }
            }
        }
        None
    }

    /// Check columns for 4-in-a-row, top to bottom
    fn winner_vertical(&self) -> Option<Cell> {
        for i in 0..=ROWS - WIN_LEN {
            for j in 0..COLS {
                let color = self.cells[i][j];
                if color == Cell::Empty {
                    continue;
                }
                if (1..WIN_LEN).all(|k| self.cells[i + k][j] == color) {
                    return Some(color);
                }
            }
        }
        None
    }

    /// Check both diagonal orientations: down-right (\) first, then
    /// down-left (/) with start columns scanned right to left
    fn winner_diagonal(&self) -> Option<Cell> {
        for i in 0..=ROWS - WIN_LEN {
            for j in 0..=COLS - WIN_LEN {
                let color = self.cells[i][j];
                if color == Cell::Empty {
                    continue;
                }
                if (1..WIN_LEN).all(|k| self.cells[i + k][j + k] == color) {
                    return Some(color);
                }
            }
        }

        for i in 0..=ROWS - WIN_LEN {
            for j in (WIN_LEN - 1..COLS).rev() {
                let color = self.cells[i][j];
                if color == Cell::Empty {
                    continue;
                }
                if (1..WIN_LEN).all(|k| self.cells[i + k][j - k] == color) {
                    return Some(color);
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
