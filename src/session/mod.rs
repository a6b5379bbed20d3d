//! Caller-side game driving on top of the pure rules.
//!
//! The rules never store whose turn it is. `GameSession` does that for a
//! front-end by following the extra-turn signal of each ply, and
//! `random_playout` plays whole games for simulation and benchmarks.

mod game;
mod playout;

pub use game::GameSession;
pub use playout::random_playout;
