//! Scoring, termination and outcome queries.
//!
//! All queries are read-only and take the board explicitly. They are
//! well-defined at any point in a game, not only at the end, so a front-end
//! can show a running score.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, PlayerId, PlayerMap};

/// Outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player owns more boxes.
    Winner(PlayerId),
    /// Both players own the same number of boxes.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Count the cells that satisfy `predicate`.
///
/// ```
/// use dots_boxes::core::{Board, Cell};
/// use dots_boxes::rules::count_cells_matching;
///
/// let board = Board::default();
/// assert_eq!(count_cells_matching(&board, |c| c == Cell::Dot), 9);
/// ```
pub fn count_cells_matching(board: &Board, predicate: impl Fn(Cell) -> bool) -> usize {
    board.cells().filter(|&(_, cell)| predicate(cell)).count()
}

/// Number of line slots still empty.
#[must_use]
pub fn spaces_left(board: &Board) -> usize {
    count_cells_matching(board, Cell::is_empty_line)
}

/// Number of boxes owned by `player`.
#[must_use]
pub fn player_score(board: &Board, player: PlayerId) -> usize {
    count_cells_matching(board, |cell| cell.owner() == Some(player))
}

/// Both players' scores.
#[must_use]
pub fn scores(board: &Board) -> PlayerMap<usize> {
    PlayerMap::new(|player| player_score(board, player))
}

/// Total number of boxes on the board: the whole score pool.
#[must_use]
pub fn max_boxes(board: &Board) -> usize {
    board.box_count()
}

/// Check if every line has been drawn.
#[must_use]
pub fn is_ended(board: &Board) -> bool {
    spaces_left(board) == 0
}

/// Compare the two scores.
///
/// Meaningful as a final result once [`is_ended`] holds; before that it
/// reports who is currently ahead.
#[must_use]
pub fn who_won(board: &Board) -> GameResult {
    let s = scores(board);
    match s[PlayerId::One].cmp(&s[PlayerId::Two]) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Check if `player` owns a strict majority of all boxes.
///
/// Once true the result can no longer change, even with lines left.
#[must_use]
pub fn is_won_for_player(board: &Board, player: PlayerId) -> bool {
    2 * player_score(board, player) > max_boxes(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::rules::{close_boxes, create_board, legal_moves, place_line};

    /// Fill every line of a board, then hand out its boxes in order.
    fn finished_board(width: usize, height: usize, owners: &[PlayerId]) -> Board {
        let mut board = create_board(width, height).unwrap();
        for mv in legal_moves(&board) {
            board = place_line(&board, mv.row(), mv.col()).unwrap();
        }
        let centres: Vec<Coord> = board.box_centres().collect();
        for (centre, &owner) in centres.iter().zip(owners) {
            board = close_boxes(&board, owner, &[*centre]);
        }
        board
    }

    #[test]
    fn test_fresh_board() {
        let board = create_board(3, 3).unwrap();
        assert_eq!(spaces_left(&board), 12);
        assert_eq!(max_boxes(&board), 4);
        assert_eq!(player_score(&board, PlayerId::One), 0);
        assert!(!is_ended(&board));
        assert_eq!(who_won(&board), GameResult::Draw);
    }

    #[test]
    fn test_three_one_win() {
        use PlayerId::{One, Two};
        let board = finished_board(3, 3, &[One, One, Two, One]);

        assert!(is_ended(&board));
        assert_eq!(player_score(&board, One), 3);
        assert_eq!(player_score(&board, Two), 1);
        assert_eq!(who_won(&board), GameResult::Winner(One));
        assert!(is_won_for_player(&board, One));
        assert!(!is_won_for_player(&board, Two));
    }

    #[test]
    fn test_two_two_draw() {
        use PlayerId::{One, Two};
        let board = finished_board(3, 3, &[One, Two, Two, One]);

        assert!(is_ended(&board));
        assert_eq!(who_won(&board), GameResult::Draw);
        assert!(!is_won_for_player(&board, One));
        assert!(!is_won_for_player(&board, Two));
    }

    #[test]
    fn test_scores_map() {
        use PlayerId::{One, Two};
        let board = finished_board(3, 2, &[Two, Two]);
        let s = scores(&board);
        assert_eq!(s[One], 0);
        assert_eq!(s[Two], 2);
        assert_eq!(who_won(&board), GameResult::Winner(Two));
    }

    #[test]
    fn test_game_result() {
        let result = GameResult::Winner(PlayerId::Two);
        assert!(result.is_winner(PlayerId::Two));
        assert!(!result.is_winner(PlayerId::One));
        assert_eq!(result.winner(), Some(PlayerId::Two));
        assert_eq!(result.to_string(), "Player 2 wins");

        assert!(!GameResult::Draw.is_winner(PlayerId::One));
        assert_eq!(GameResult::Draw.winner(), None);
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }
}
