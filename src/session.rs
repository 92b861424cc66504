//! The boundary a front-end talks to: column clicks in, game events out.
//!
//! `MatchSession` strings successive games together, records win/loss tallies
//! into the injected [`KeyValueStore`], and lets stored dimensions override
//! the configured defaults on restart, so settings survive between sessions
//! when the store does.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameState, MoveOutcome, Player};
use crate::store::{KeyValueStore, ScoreRecord};

const KEY_WIDTH: &str = "width";
const KEY_HEIGHT: &str = "height";
const KEY_P1_RECORD: &str = "p1_record";
const KEY_P2_RECORD: &str = "p2_record";

/// What a single column click produced. A winning or tying click yields the
/// `MoveApplied` event followed by the terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied {
        row: usize,
        column: usize,
        player: Player,
    },
    GameWon {
        player: Player,
    },
    GameTied,
    MoveIgnored {
        column: usize,
    },
}

/// A sequence of games sharing one score store.
pub struct MatchSession<S: KeyValueStore> {
    config: GameConfig,
    store: S,
    game: GameState,
}

impl<S: KeyValueStore> MatchSession<S> {
    /// Start a session. Dimensions previously saved into the store win over
    /// the configured ones.
    pub fn new(config: GameConfig, store: S) -> Result<Self, GameError> {
        GameState::validate_dimensions(config.width, config.height)?;
        let mut session = MatchSession {
            config,
            // restart() below swaps this for the stored dimensions, if any
            game: GameState::new(config.width, config.height)?,
            store,
        };
        session.restart();
        Ok(session)
    }

    /// The game currently being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Handle a column click from the front-end.
    pub fn column_clicked(&mut self, column: usize) -> Result<Vec<GameEvent>, GameError> {
        let player = self.game.active_player();
        let events = match self.game.apply_move(column)? {
            MoveOutcome::Ignored => {
                debug!(column, "click on full column ignored");
                vec![GameEvent::MoveIgnored { column }]
            }
            MoveOutcome::Continue { row } => {
                debug!(row, column, player = player.name(), "piece placed");
                vec![GameEvent::MoveApplied { row, column, player }]
            }
            MoveOutcome::Win { row, player } => {
                info!(
                    player = player.name(),
                    moves = self.game.move_count(),
                    "game won"
                );
                self.record_win(player);
                vec![
                    GameEvent::MoveApplied { row, column, player },
                    GameEvent::GameWon { player },
                ]
            }
            MoveOutcome::Tie { row } => {
                info!(moves = self.game.move_count(), "game tied");
                vec![
                    GameEvent::MoveApplied { row, column, player },
                    GameEvent::GameTied,
                ]
            }
        };
        Ok(events)
    }

    /// Begin a fresh game, keeping the scores. Picks up any dimensions that
    /// were saved since the last game started.
    pub fn restart(&mut self) {
        let (width, height) = self.dimensions();
        debug!(width, height, "starting new game");
        self.game = GameState::new(width, height).expect("dimensions already validated");
    }

    /// Wipe all stored data (scores and saved dimensions) and start over on
    /// the configured board.
    pub fn reset(&mut self) {
        info!("resetting scores and settings");
        self.store.clear();
        self.restart();
    }

    /// Save new board dimensions. They take effect on the next `restart`,
    /// not mid-game.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), GameError> {
        GameState::validate_dimensions(width, height)?;
        self.write_json(KEY_WIDTH, &width);
        self.write_json(KEY_HEIGHT, &height);
        Ok(())
    }

    /// Current win/loss records for players 1 and 2.
    pub fn scores(&self) -> (ScoreRecord, ScoreRecord) {
        (
            self.read_json(KEY_P1_RECORD).unwrap_or_default(),
            self.read_json(KEY_P2_RECORD).unwrap_or_default(),
        )
    }

    fn record_win(&mut self, winner: Player) {
        let (mut one, mut two) = self.scores();
        match winner {
            Player::One => {
                one.wins += 1;
                two.losses += 1;
            }
            Player::Two => {
                two.wins += 1;
                one.losses += 1;
            }
        }
        self.write_json(KEY_P1_RECORD, &one);
        self.write_json(KEY_P2_RECORD, &two);
    }

    /// Board size for the next game: stored values where present and
    /// playable, configured defaults otherwise.
    fn dimensions(&self) -> (usize, usize) {
        let width = self.read_json(KEY_WIDTH).unwrap_or(self.config.width);
        let height = self.read_json(KEY_HEIGHT).unwrap_or(self.config.height);
        if GameState::validate_dimensions(width, height).is_err() {
            warn!(
                width,
                height, "stored dimensions are unplayable, using configured defaults"
            );
            return (self.config.width, self.config.height);
        }
        (width, height)
    }

    /// Read a JSON value from the store. An unreadable value is treated as
    /// absent; a corrupt entry should not brick the whole session.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable stored value");
                None
            }
        }
    }

    fn write_json<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let raw = serde_json::to_string(value).expect("store values serialize");
        self.store.set(key, raw);
    }
}
