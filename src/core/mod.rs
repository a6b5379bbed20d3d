//! Core value types: players, coordinates, cells, the board, moves, RNG,
//! configuration and errors.
//!
//! Everything here is plain data. The rules that move a board from one
//! state to the next live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use board::{Board, InvalidSnapshot, MAX_DOTS, MIN_DOTS};
pub use cell::{Cell, CellKind, Orientation};
pub use config::GameConfig;
pub use coord::Coord;
pub use error::{EngineError, IllegalMoveReason};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
