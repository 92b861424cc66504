//! # Connect Four
//!
//! A two-player Connect Four engine. Pieces fall under gravity into columns
//! of a configurable board; the first run of four in a row, column, or
//! diagonal wins, and a full board with no run ties. The engine is pure and
//! synchronous: it takes column-drop requests and hands back outcomes, while
//! rendering, input, and score persistence stay on the caller's side of the
//! [`session`] and [`store`] boundaries.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, drop/win/tie state machine
//! - [`session`] — Click-in, event-out surface for front-ends, with score keeping
//! - [`store`] — Key-value persistence boundary and in-memory implementation
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod store;
