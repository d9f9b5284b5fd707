//! Board evaluation: a signed heuristic score for a position.
//!
//! Positive scores favor the maximizer ([`Player::B`]), negative scores favor
//! the minimizer ([`Player::A`]).
//!
//! # Window Scoring
//!
//! [`HeuristicEvaluator`] looks at every window of `win_length` cells (the same
//! windows used for win detection) and scores each one separately for both
//! players. A window containing an opponent stone is blocked and worth
//! nothing, and so is a window without any of the player's stones. Otherwise,
//! with `k` of the player's stones in the window:
//!
//! | condition | maximizer | minimizer |
//! |---|---|---|
//! | `k == win_length - 1` | `+10000` | `-20000` |
//! | `k == win_length - 2` or gap template | `+2000 * m` | `-500 * m` |
//! | `k == win_length - 3` | `+500 * k²` | `-100 * k²` |
//! | otherwise | `0` | `0` |
//!
//! where `m` is 1 for a gap-template match and `k²` otherwise (see
//! [`gap_template`](crate::gap_template)). The minimizer's one-away threats
//! weigh twice as much as the maximizer's, so the maximizer prefers blocking
//! over racing.
//!
//! The board score is the sum of both players' contributions over all
//! windows. An empty board scores exactly 0.
//!
//! # Example
//!
//! ```
//! use connectn_engine::Board;
//! use connectn_evaluator::board_evaluator::{BoardEvaluator, HeuristicEvaluator};
//!
//! let board: Board = "O O O .".parse().unwrap();
//! assert_eq!(HeuristicEvaluator.evaluate(&board, 4), 10_000);
//! ```

use std::fmt;

use connectn_engine::{Board, Player, Window};

use crate::gap_template::gap_templates;

/// Scores board positions from the maximizer's point of view.
pub trait BoardEvaluator: fmt::Debug + Send + Sync {
    /// Returns the score of `board` for a game won by `win_length` in a row.
    fn evaluate(&self, board: &Board, win_length: usize) -> i64;
}

#[derive(Debug, Clone, Copy)]
struct TierWeight {
    maximizer: i64,
    minimizer: i64,
}

impl TierWeight {
    fn for_player(self, player: Player) -> i64 {
        if player.is_maximizer() {
            self.maximizer
        } else {
            self.minimizer
        }
    }
}

const ONE_AWAY: TierWeight = TierWeight {
    maximizer: 10_000,
    minimizer: -20_000,
};
const TWO_AWAY: TierWeight = TierWeight {
    maximizer: 2_000,
    minimizer: -500,
};
const THREE_AWAY: TierWeight = TierWeight {
    maximizer: 500,
    minimizer: -100,
};

/// Window-counting heuristic evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    /// Scores a single window for `player`.
    #[must_use]
    pub fn score_window(board: &Board, window: Window, player: Player) -> i64 {
        let opponent = player.opponent();
        if window.cells(board).any(|cell| cell.is_owned_by(opponent)) {
            return 0;
        }

        let length = window.len();
        let stones = window
            .cells(board)
            .filter(|cell| cell.is_owned_by(player))
            .count();
        // an untouched window has no potential, even when win_length is 1
        if stones == 0 {
            return 0;
        }
        let gap_match = gap_templates(length)
            .iter()
            .any(|template| template.matches(window.cells(board), player));
        let squared = i64::try_from(stones * stones).unwrap_or(i64::MAX);

        if stones + 1 == length {
            ONE_AWAY.for_player(player)
        } else if stones + 2 == length || gap_match {
            let multiplier = if gap_match { 1 } else { squared };
            TWO_AWAY.for_player(player) * multiplier
        } else if stones + 3 == length {
            THREE_AWAY.for_player(player) * squared
        } else {
            0
        }
    }
}

impl BoardEvaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board, win_length: usize) -> i64 {
        board
            .windows(win_length)
            .map(|window| {
                Player::ALL
                    .into_iter()
                    .map(|player| Self::score_window(board, window, player))
                    .sum::<i64>()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str, win_length: usize) -> i64 {
        let board: Board = text.parse().unwrap();
        HeuristicEvaluator.evaluate(&board, win_length)
    }

    #[test]
    fn test_empty_board_scores_zero() {
        for (rows, cols, win_length) in [(6, 7, 4), (1, 1, 1), (4, 4, 4), (8, 9, 5), (3, 3, 7)] {
            let board = Board::new(rows, cols).unwrap();
            assert_eq!(HeuristicEvaluator.evaluate(&board, win_length), 0);
        }
    }

    #[test]
    fn test_single_window_tiers() {
        // a 1x4 board has exactly one window
        assert_eq!(evaluate("O O O .", 4), 10_000);
        assert_eq!(evaluate("O O . .", 4), 8_000);
        assert_eq!(evaluate("O . . .", 4), 500);
        assert_eq!(evaluate("X X X .", 4), -20_000);
        assert_eq!(evaluate("X X . .", 4), -2_000);
        assert_eq!(evaluate("X . . .", 4), -100);
    }

    #[test]
    fn test_one_away_asymmetry() {
        let maximizer = evaluate("O . O O", 4);
        let minimizer = evaluate("X . X X", 4);
        assert_eq!(maximizer, 10_000);
        assert_eq!(minimizer, -2 * maximizer);
    }

    #[test]
    fn test_blocked_and_complete_windows_score_zero() {
        assert_eq!(evaluate("X O . .", 4), 0);
        assert_eq!(evaluate("O O O X", 4), 0);
        assert_eq!(evaluate("O O O O", 4), 0);
    }

    #[test]
    fn test_gap_bonus_for_length_five() {
        // gap templates replace the k² multiplier with 1
        assert_eq!(evaluate("O . O . O", 5), 2_000);
        assert_eq!(evaluate("O . . O O", 5), 2_000);
        assert_eq!(evaluate("O O O . .", 5), 18_000);
        assert_eq!(evaluate("X X . . X", 5), -500);
        assert_eq!(evaluate("X X X . .", 5), -4_500);
    }

    #[test]
    fn test_single_stone_counts_every_window() {
        // a corner stone lies in one horizontal, one vertical and one diagonal window
        let empty_rows = ". . . . . . .\n".repeat(5);
        assert_eq!(evaluate(&format!("{empty_rows}O . . . . . ."), 4), 1_500);
        assert_eq!(evaluate(&format!("{empty_rows}X . . . . . ."), 4), -300);
    }

    #[test]
    fn test_score_grows_with_threats() {
        let one = evaluate(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . O . . .
            ",
            4,
        );
        let two = evaluate(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . O . . .
            . . . O . . .
            ",
            4,
        );
        let three = evaluate(
            "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . O . . .
            . . . O . . .
            . . . O . . .
            ",
            4,
        );
        assert!(0 < one && one < two && two < three);
        assert_eq!(three, 30_500);
    }
}
