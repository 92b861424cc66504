use crate::error::GameError;

use super::{Board, Player};

/// Where a game stands. `Won` and `Tied` are terminal: any further
/// `apply_move` fails with `GameError::GameAlreadyOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Tied,
}

/// Result of a successful `apply_move` call.
///
/// `row` is where the piece landed. `Ignored` means the column was full and
/// nothing changed; dropping into a full column is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { row: usize },
    Win { row: usize, player: Player },
    Tie { row: usize },
    Ignored,
}

/// A single game: board, whose turn it is, and how far along it is.
///
/// All state lives in this value; there is no ambient board or player
/// anywhere, so independent games can coexist and tests stay trivial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    move_count: usize,
    phase: Phase,
}

impl GameState {
    /// Start a fresh game on a `width` x `height` board, player 1 to move.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Self::validate_dimensions(width, height)?;
        Ok(GameState {
            board: Board::new(width, height),
            active_player: Player::One,
            move_count: 0,
            phase: Phase::InProgress,
        })
    }

    /// Reject boards on which four in a row is impossible in every
    /// direction: zero-sized boards, and boards with both dimensions below
    /// four (a horizontal run needs width >= 4, a vertical run height >= 4,
    /// and diagonals need both).
    pub fn validate_dimensions(width: usize, height: usize) -> Result<(), GameError> {
        if width == 0 || height == 0 || (width < 4 && height < 4) {
            return Err(GameError::InvalidDimension { width, height });
        }
        Ok(())
    }

    /// Get current player
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Columns that can still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// On `Continue` the turn passes to the other player; on `Win` and `Tie`
    /// the game becomes terminal and the turn stays put. A full column
    /// yields `Ignored` and leaves the state untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if column >= self.board.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.board.width(),
            });
        }

        let player = self.active_player;
        let row = match self.board.drop_piece(column, player.mark()) {
            Some(row) => row,
            None => return Ok(MoveOutcome::Ignored),
        };
        self.move_count += 1;

        if self.board.check_win(row, column) {
            self.phase = Phase::Won(player);
            return Ok(MoveOutcome::Win { row, player });
        }
        if self.move_count == self.board.width() * self.board.height() {
            self.phase = Phase::Tied;
            return Ok(MoveOutcome::Tie { row });
        }

        self.active_player = player.other();
        Ok(MoveOutcome::Continue { row })
    }
}
