//! Game configuration.
//!
//! A game is configured by its board size in dots and the player who opens.
//! Everything else about Dots and Boxes is fixed by the rules.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::EngineError;
use super::player::PlayerId;

/// Configuration for one game.
///
/// Missing fields take their defaults when deserialized, so `{}` is the
/// standard 3×3 game with player 1 to open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in dots (at least 2).
    pub width: usize,

    /// Board height in dots (at least 2).
    pub height: usize,

    /// Player who makes the first move.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            first_player: PlayerId::One,
        }
    }
}

impl GameConfig {
    /// Create a config with custom width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Create a config with custom height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Create a config with a custom opening player.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Check that the dimensions describe a playable board.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.build_board().map(|_| ())
    }

    /// Build the empty board for this configuration.
    pub fn build_board(&self) -> Result<Board, EngineError> {
        Board::new(self.width, self.height)
    }
}
