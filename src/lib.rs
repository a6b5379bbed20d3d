//! # dots-boxes
//!
//! A rules engine for [Dots and Boxes](https://en.wikipedia.org/wiki/Dots_and_Boxes).
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: the whole game position is one [`Board`] value
//!    passed to every call. The engine keeps no global state.
//!
//! 2. **Immutable boards**: transitions return a new board and leave the
//!    old one intact. Boards are backed by `im` persistent vectors, so
//!    keeping old positions around is cheap.
//!
//! 3. **Signals, not inference**: a ply reports whether the mover plays
//!    again (`extra_turn`) instead of leaving callers to re-scan the board.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, cells, the board, moves, config, errors
//! - `rules`: move legality, box closing, scoring, outcome
//! - `session`: turn tracking and seeded random playouts for front-ends
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{create_board, play, who_won, GameResult, PlayerId};
//!
//! let board = create_board(2, 2).unwrap();
//! let b = play(&board, PlayerId::One, 0, 1).unwrap().board;
//! let b = play(&b, PlayerId::Two, 1, 0).unwrap().board;
//! let b = play(&b, PlayerId::One, 1, 2).unwrap().board;
//! let last = play(&b, PlayerId::Two, 2, 1).unwrap();
//!
//! assert!(last.extra_turn);
//! assert_eq!(who_won(&last.board), GameResult::Winner(PlayerId::Two));
//! ```

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellKind, Coord, EngineError, GameConfig, GameRng, IllegalMoveReason,
    InvalidSnapshot, Move, MoveRecord, Orientation, PlayerId, PlayerMap,
};

pub use crate::rules::{
    close_boxes, count_cells_matching, create_board, find_newly_closed_boxes, is_ended,
    is_won_for_player, legal_moves, max_boxes, place_line, play, player_score, scores, spaces_left,
    who_won, GameResult, PlayOutcome,
};

pub use crate::session::{random_playout, GameSession};
