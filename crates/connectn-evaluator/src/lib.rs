//! Move selection for Connect-N: a heuristic board evaluator and a minimax
//! search built on top of it.
//!
//! # Architecture
//!
//! ```text
//! Search (pick a column, report its minimax score)
//!     ↓ uses
//! Board Evaluation (score a position)
//!     ↓ uses
//! Gap Templates (recognize split but winnable patterns)
//! ```
//!
//! - [`search`] - [`SearchEngine`](search::SearchEngine), the depth-limited minimax
//! - [`board_evaluator`] - [`BoardEvaluator`](board_evaluator::BoardEvaluator) trait and
//!   the window-counting [`HeuristicEvaluator`](board_evaluator::HeuristicEvaluator)
//! - [`gap_template`] - Catalog of gap patterns rewarded by the heuristic
//!
//! Scores are always from the maximizer's point of view: [`Player::B`] tries to
//! push the score up and [`Player::A`] tries to push it down.
//!
//! [`Player::B`]: connectn_engine::Player::B
//! [`Player::A`]: connectn_engine::Player::A
//!
//! # Example
//!
//! ```
//! use connectn_engine::{Board, Player};
//! use connectn_evaluator::search::SearchEngine;
//!
//! let mut board = Board::new(6, 7).unwrap();
//! board.drop_piece(3, Player::A).unwrap();
//!
//! let engine = SearchEngine::heuristic(4);
//! let result = engine.search(&board, 2, true);
//! let column = result.selected_column().unwrap();
//! assert!(board.is_valid_move(column));
//! ```

pub mod board_evaluator;
pub mod gap_template;
pub mod search;
