pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

/// One immutable snapshot of the 3x3 grid, row-major:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// A move never mutates a snapshot; [`Board::with_mark`] builds the
/// successor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Mark::Empty; CELLS],
        }
    }

    /// Get the mark at a cell (0-8)
    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    /// Build the successor snapshot with one cell changed.
    /// The original board is left untouched.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[cell] = mark;
        Board { cells }
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Mark::Empty)
    }

    /// All nine cells in row-major order
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for cell in 0..CELLS {
            assert_eq!(board.get(cell), Mark::Empty);
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);

        assert_eq!(board.get(4), Mark::Empty);
        assert_eq!(next.get(4), Mark::X);

        // Every other cell carries over
        for cell in (0..CELLS).filter(|&c| c != 4) {
            assert_eq!(next.get(cell), Mark::Empty);
        }
    }

    #[test]
    fn test_with_mark_chains() {
        let board = Board::new().with_mark(0, Mark::X).with_mark(8, Mark::O);
        assert_eq!(board.get(0), Mark::X);
        assert_eq!(board.get(8), Mark::O);
        assert_eq!(board.get(4), Mark::Empty);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for cell in 0..CELLS {
            board = board.with_mark(cell, Mark::X);
        }
        assert!(board.is_full());
    }
}
