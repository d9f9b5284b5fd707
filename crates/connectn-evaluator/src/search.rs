//! Depth-limited minimax search over board evaluations.
//!
//! [`SearchEngine::search`] explores every legal column to a fixed depth and
//! returns the best column for the side to move together with its minimax
//! score. There is no pruning and no memoization, so the chosen column only
//! depends on the board, the depth, the role and the evaluator.
//!
//! # Search Rules
//!
//! At every node:
//!
//! 1. If the depth is exhausted, or either player already has a winning run,
//!    the node is a leaf scored by the evaluator.
//! 2. Columns are tried in ascending order. The maximizer drops
//!    [`Player::B`] stones, the minimizer [`Player::A`] stones.
//! 3. A column that wins on the spot is returned immediately, scored by the
//!    evaluator on the winning board; later columns are not examined.
//! 4. Otherwise the child is searched one ply shallower with the roles
//!    swapped. A later column replaces the current best only when its score
//!    is strictly better, so ties go to the lowest column.
//! 5. A node without legal columns reports [`SearchResult::NoLegalMove`]
//!    with the worst possible score for the side to move.
//!
//! # Example
//!
//! ```
//! use connectn_engine::Board;
//! use connectn_evaluator::search::{SearchEngine, SearchResult};
//!
//! let board: Board = "
//!     . . . .
//!     . O . .
//!     . O . .
//!     X O X .
//! "
//! .parse()
//! .unwrap();
//!
//! let engine = SearchEngine::heuristic(4);
//! let result = engine.search(&board, 3, true);
//! assert_eq!(result.column(), Some(1));
//! ```

use connectn_engine::{Board, Player};
use serde::Serialize;

use crate::board_evaluator::{BoardEvaluator, HeuristicEvaluator};

/// Score reported by a maximizing node that has no legal column.
pub const MAXIMIZER_NO_MOVE_SCORE: i64 = i64::MIN;
/// Score reported by a minimizing node that has no legal column.
pub const MINIMIZER_NO_MOVE_SCORE: i64 = i64::MAX;

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResult {
    /// The searched board itself was a leaf (depth 0 or already won).
    Leaf { score: i64 },
    /// The best column for the side to move.
    Move { column: usize, score: i64 },
    /// No column could be played. This must be treated as a draw, never as a
    /// move to apply.
    NoLegalMove { score: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveSelectionError {
    #[display("no legal move available")]
    NoLegalMove,
    #[display("search ended at a leaf without choosing a move")]
    Leaf,
}

impl SearchResult {
    #[must_use]
    pub fn score(self) -> i64 {
        match self {
            SearchResult::Leaf { score }
            | SearchResult::Move { score, .. }
            | SearchResult::NoLegalMove { score } => score,
        }
    }

    #[must_use]
    pub fn column(self) -> Option<usize> {
        match self {
            SearchResult::Move { column, .. } => Some(column),
            SearchResult::Leaf { .. } | SearchResult::NoLegalMove { .. } => None,
        }
    }

    /// Returns the column to play, or why there is none.
    pub fn selected_column(self) -> Result<usize, MoveSelectionError> {
        match self {
            SearchResult::Move { column, .. } => Ok(column),
            SearchResult::Leaf { .. } => Err(MoveSelectionError::Leaf),
            SearchResult::NoLegalMove { .. } => Err(MoveSelectionError::NoLegalMove),
        }
    }
}

/// Minimax searcher parameterized by a board evaluator.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    evaluator: Box<dyn BoardEvaluator + 'a>,
    win_length: usize,
}

impl SearchEngine<'static> {
    /// Creates a search engine using [`HeuristicEvaluator`].
    #[must_use]
    pub fn heuristic(win_length: usize) -> Self {
        Self::new(Box::new(HeuristicEvaluator), win_length)
    }
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn BoardEvaluator + 'a>, win_length: usize) -> Self {
        Self {
            evaluator,
            win_length,
        }
    }

    #[must_use]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i64 {
        self.evaluator.evaluate(board, self.win_length)
    }

    /// Searches `depth` plies ahead for the side given by `maximizing`.
    ///
    /// `board` is not modified; the search works on its own copy.
    #[must_use]
    pub fn search(&self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        let mut search = Search {
            engine: self,
            board: board.clone(),
            root_depth: depth,
            nodes: 0,
        };
        let result = search.node(depth, maximizing);
        debug_assert_eq!(&search.board, board);
        tracing::debug!(
            depth,
            maximizing,
            nodes = search.nodes,
            ?result,
            "search finished"
        );
        result
    }
}

/// State of one running search.
///
/// Children are explored by dropping a stone on the working board and
/// lifting it again afterwards, so every node sees exactly its own move
/// history.
struct Search<'e, 'a> {
    engine: &'e SearchEngine<'a>,
    board: Board,
    root_depth: usize,
    nodes: u64,
}

impl Search<'_, '_> {
    fn is_terminal(&self, depth: usize) -> bool {
        depth == 0
            || Player::ALL
                .into_iter()
                .any(|player| self.board.has_run(player, self.engine.win_length))
    }

    fn node(&mut self, depth: usize, maximizing: bool) -> SearchResult {
        self.nodes += 1;
        if self.is_terminal(depth) {
            return SearchResult::Leaf {
                score: self.engine.evaluate(&self.board),
            };
        }

        let mover = Player::for_role(maximizing);
        let mut best: Option<(usize, i64)> = None;
        for column in 0..self.board.cols() {
            // full columns are rejected by the drop itself
            let Ok(row) = self.board.drop_piece(column, mover) else {
                continue;
            };

            if self.board.has_run(mover, self.engine.win_length) {
                let score = self.engine.evaluate(&self.board);
                self.board.lift_piece(column);
                return SearchResult::Move { column, score };
            }

            let score = self.node(depth - 1, !maximizing).score();
            self.board.lift_piece(column);

            if depth == self.root_depth {
                tracing::trace!(column, row, score, "root column scored");
            }

            let improves = best.is_none_or(|(_, best_score)| {
                if maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            });
            if improves {
                best = Some((column, score));
            }
        }

        match best {
            Some((column, score)) => SearchResult::Move { column, score },
            None => SearchResult::NoLegalMove {
                score: if maximizing {
                    MAXIMIZER_NO_MOVE_SCORE
                } else {
                    MINIMIZER_NO_MOVE_SCORE
                },
            },
        }
    }
}
