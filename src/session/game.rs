//! A game in progress.

use im::Vector;
use tracing::info;

use crate::core::{Board, EngineError, GameConfig, Move, MoveRecord, PlayerId, PlayerMap};
use crate::rules::{self, GameResult, PlayOutcome};

/// One running game: the authoritative board, whose turn it is, and what
/// has been played so far.
///
/// The board alone cannot say whose turn it is (a freshly closed box looks
/// the same whether or not the closer moves again), so the session follows
/// the `extra_turn` signal of every ply.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    to_move: PlayerId,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Start a new game from a configuration.
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        let board = config.build_board()?;
        Ok(Self::from_board(board, config.first_player))
    }

    /// Continue from an existing board with `to_move` to play.
    #[must_use]
    pub fn from_board(board: Board, to_move: PlayerId) -> Self {
        Self {
            board,
            to_move,
            history: Vector::new(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player_to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Moves accepted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Play the line at (row, col) for the player to move.
    ///
    /// On an illegal move the session is left exactly as it was.
    pub fn play(&mut self, row: usize, col: usize) -> Result<PlayOutcome, EngineError> {
        let player = self.to_move;
        let outcome = rules::play(&self.board, player, row, col)?;

        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord::new(
            player,
            Move::new(row, col),
            &outcome.closed_boxes,
            sequence,
        ));
        self.board = outcome.board.clone();
        if !outcome.extra_turn {
            self.to_move = player.other();
        }

        if rules::is_ended(&self.board) {
            info!(moves = self.history.len(), result = %rules::who_won(&self.board), "game over");
        }

        Ok(outcome)
    }

    /// Play a [`Move`] for the player to move.
    pub fn play_move(&mut self, mv: Move) -> Result<PlayOutcome, EngineError> {
        self.play(mv.row(), mv.col())
    }

    /// Current scores.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        rules::scores(&self.board)
    }

    /// Check if every line has been drawn.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        rules::is_ended(&self.board)
    }

    /// The final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_ended().then(|| rules::who_won(&self.board))
    }
}
