pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned discs needed to win.
pub const CONNECT: usize = 4;

/// The four cells of a winning alignment, ordered along the line.
pub type WinLine = [(usize, usize); CONNECT];

/// The four line orientations through a cell: horizontal, vertical,
/// and both diagonals.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
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

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win.
    ///
    /// Only lines through the anchor cell are examined, so this is O(1)
    /// per move instead of a full-board scan.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line(row, col).is_some()
    }

    /// The winning alignment through (row, col), if one exists.
    ///
    /// Scans outward from the anchor in both directions along each of the
    /// four orientations. If the combined run reaches four, returns the
    /// first four cells starting at the earliest cell of the run.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<WinLine> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return None;
        }

        for (dr, dc) in DIRECTIONS {
            let back = self.run_length(row, col, cell, -dr, -dc);
            let forward = self.run_length(row, col, cell, dr, dc);
            if back + forward + 1 >= CONNECT {
                let start_r = row as i32 - dr * back as i32;
                let start_c = col as i32 - dc * back as i32;
                let mut line = [(0, 0); CONNECT];
                for (i, slot) in line.iter_mut().enumerate() {
                    let r = start_r + dr * i as i32;
                    let c = start_c + dc * i as i32;
                    *slot = (r as usize, c as usize);
                }
                return Some(line);
            }
        }

        None
    }

    /// Number of same-colored discs extending from (row, col) along
    /// (dr, dc), not counting the anchor itself.
    fn run_length(&self, row: usize, col: usize, cell: Cell, dr: i32, dc: i32) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
