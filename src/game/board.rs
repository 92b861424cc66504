/// How many aligned pieces make a win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A rectangular grid of cells. Row 0 is the top, row `height - 1` the
/// bottom; pieces always occupy the lowest empty row of their column
/// (gravity invariant).
///
/// `Board` does not validate dimensions itself; `GameState::new` rejects
/// boards that could never produce four in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Find the row a piece dropped into `col` would land in: the lowest
    /// empty row, scanning from the bottom up. `None` means the column is
    /// full, which is a normal outcome rather than an error.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returning the row where it landed, or
    /// `None` if the column is full.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.find_drop_row(col)?;
        self.cells[row * self.width + col] = cell;
        Some(row)
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) completes a run of four.
    ///
    /// Only runs through the given cell are examined; a move can only create
    /// a win involving the piece it placed, so checking the four axes through
    /// it is equivalent to scanning the whole board after every move.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        // horizontal, vertical, diagonal \, diagonal /
        const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, cell, dr, dc)
                + self.run_length(row, col, cell, -dr, -dc)
                >= WIN_LENGTH
        })
    }

    /// Count consecutive cells equal to `cell` strictly beyond (row, col) in
    /// the direction (dr, dc).
    fn run_length(&self, row: usize, col: usize, cell: Cell, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && r < self.height as isize
            && c >= 0
            && c < self.width as isize
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}
