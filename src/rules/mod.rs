//! The Dots and Boxes rules as pure functions over [`Board`](crate::core::Board).
//!
//! - `engine`: move legality, line placement, box closing
//! - `scoring`: scores, termination, outcome

mod engine;
mod scoring;

pub use engine::{
    close_boxes, create_board, find_newly_closed_boxes, legal_moves, place_line, play, PlayOutcome,
};
pub use scoring::{
    count_cells_matching, is_ended, is_won_for_player, max_boxes, player_score, scores, spaces_left,
    who_won, GameResult,
};
