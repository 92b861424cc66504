//! Core Connect Four game logic: board representation, player types, and the
//! drop / win / tie state machine. Pure and side-effect free; scores and
//! settings live behind the [`crate::store`] boundary instead.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, WIN_LENGTH};
pub use player::Player;
pub use state::{GameState, MoveOutcome, Phase};
