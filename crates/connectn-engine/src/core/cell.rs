use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// The search assigns fixed roles: [`Player::B`] is the maximizer (positive
/// scores favor it) and [`Player::A`] is the minimizer. Which side a human
/// controls is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Minimizing side, drawn as `X`.
    A,
    /// Maximizing side, drawn as `O`.
    B,
}

impl Player {
    pub const ALL: [Self; 2] = [Player::A, Player::B];

    /// Returns the player moving for the given minimax role.
    #[must_use]
    pub fn for_role(maximizing: bool) -> Self {
        if maximizing { Player::B } else { Player::A }
    }

    #[must_use]
    pub fn is_maximizer(self) -> bool {
        self == Player::B
    }

    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '.';

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Stone(player)
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Stone(player) => player.symbol(),
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Self::EMPTY_SYMBOL => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Stone(Player::A)),
            'O' | 'o' => Some(Cell::Stone(Player::B)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Stone(player)
    }
}
