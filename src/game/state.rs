use super::board::{COLS, WinLine};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Columns currently open for play, in ascending order.
pub type LegalActions = Vec<usize>;

/// The full observable state of one game: board, side to move, disc count,
/// and (once terminal) the outcome and winning alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turn_count: usize,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinLine>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            turn_count: 0,
            outcome: None,
            winning_line: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of discs on the board. Unchanged by rejected moves, so callers
    /// can use it to tell a no-op from an accepted move.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The four cells of the winning alignment, once somebody has won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the new state, leaving `self` untouched.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. On rejection nothing changes.
    ///
    /// The win check runs before the draw check: a move that completes a
    /// line on the last free cell is a win, never a draw.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        self.turn_count += 1;

        if let Some(line) = self.board.winning_line(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}
