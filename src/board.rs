//! Visible board: what the player knows about each cell.

use core::fmt;

use crate::config::BOARD_SIZE;

/// State of one board cell as seen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Hit,
    Miss,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// Square grid of cells addressed with 1-based (row, col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (`row`, `col`), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row == 0 || col == 0 {
            return None;
        }
        self.cells.get(row - 1)?.get(col - 1).copied()
    }

    /// Overwrite the cell at (`row`, `col`). Returns `false` if outside the grid.
    pub fn mark(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row == 0 || col == 0 {
            return false;
        }
        match self.cells.get_mut(row - 1).and_then(|r| r.get_mut(col - 1)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// `true` if a shot has already landed on (`row`, `col`).
    pub fn is_fired(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Hit | Cell::Miss))
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|&&c| c == state)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {} |", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let mut board = Board::new();
        board.mark(1, 2, Cell::Hit);
        board.mark(5, 5, Cell::Miss);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert_eq!(lines[0], "   | 1 | 2 | 3 | 4 | 5 |");
        assert_eq!(lines[1], " 1 | . | X | . | . | . |");
        assert_eq!(lines[5], " 5 | . | . | . | . | o |");
    }

    #[test]
    fn out_of_grid_access() {
        let mut board = Board::new();
        assert_eq!(board.get(0, 1), None);
        assert_eq!(board.get(1, BOARD_SIZE + 1), None);
        assert!(!board.mark(BOARD_SIZE + 1, 1, Cell::Hit));
        assert_eq!(board.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE);
    }
}
