//! Seeded random playouts.

use tracing::debug;

use crate::core::{EngineError, GameConfig, GameRng};
use crate::rules::legal_moves;

use super::game::GameSession;

/// Play a whole game, each ply picked uniformly from the legal moves.
///
/// The same config and seed always produce the same game.
///
/// ```
/// use dots_boxes::core::GameConfig;
/// use dots_boxes::session::random_playout;
///
/// let session = random_playout(&GameConfig::default(), 42).unwrap();
/// assert!(session.is_ended());
/// assert_eq!(session.history().len(), 12);
/// ```
pub fn random_playout(config: &GameConfig, seed: u64) -> Result<GameSession, EngineError> {
    let mut session = GameSession::new(config)?;
    let mut rng = GameRng::new(seed);

    while let Some(&mv) = rng.choose(&legal_moves(session.board())) {
        session.play_move(mv)?;
    }

    debug!(
        seed = rng.seed(),
        moves = session.history().len(),
        "playout finished"
    );
    Ok(session)
}
