use crate::core::{Board, BoardError, Player};

use super::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    #[display("game is already over")]
    GameOver,
    #[display("{_0}")]
    Board(BoardError),
}

/// A game between two players, alternating turns from an empty board.
///
/// The outcome is updated after every move: the mover wins as soon as they
/// complete a run of `win_length` stones, and the game is drawn once no
/// column can accept another stone.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    to_move: Player,
    outcome: GameOutcome,
    moves: Vec<usize>,
}

impl Game {
    pub fn new(config: GameConfig, first: Player) -> Result<Self, BoardError> {
        Ok(Self {
            config,
            board: Board::new(config.rows, config.cols)?,
            to_move: first,
            outcome: GameOutcome::InProgress,
            moves: vec![],
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Once the game is over this is the player
    /// who made the last move.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Columns played so far, in order.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Drops a stone for the player to move into `column`.
    pub fn play(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if !self.outcome.is_in_progress() {
            return Err(MoveError::GameOver);
        }

        let mover = self.to_move;
        let row = self.board.drop_piece(column, mover)?;
        self.moves.push(column);

        self.outcome = if self.board.has_run(mover, self.config.win_length) {
            GameOutcome::Won(mover)
        } else if !self.board.has_valid_moves() {
            GameOutcome::Draw
        } else {
            self.to_move = mover.opponent();
            GameOutcome::InProgress
        };

        tracing::debug!(player = %mover, column, row, outcome = ?self.outcome, "move played");
        Ok(self.outcome)
    }
}
