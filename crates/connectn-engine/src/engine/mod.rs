//! Game rules layered over the board: configuration and turn sequencing.
//!
//! - [`GameConfig`] - Board dimensions, win length and search depth
//! - [`Game`] - A single game in progress (board, side to move, outcome)
//!
//! # Example
//!
//! ```
//! use connectn_engine::{Game, GameConfig, GameOutcome, Player};
//!
//! let mut game = Game::new(GameConfig::default(), Player::A).unwrap();
//! for column in [0, 1, 0, 1, 0, 1] {
//!     assert_eq!(game.play(column).unwrap(), GameOutcome::InProgress);
//! }
//! assert_eq!(game.play(0).unwrap(), GameOutcome::Won(Player::A));
//! ```

pub use self::{config::*, game::*};

mod config;
mod game;
