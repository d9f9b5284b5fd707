//! Catalog of "broken but winnable" stone patterns.
//!
//! A gap template describes an open window in which a player's stones are
//! split by empty cells, e.g. `X.XX`. Windows matching a template earn the
//! gap bonus in the heuristic evaluator even when their stone count alone
//! would not reach that tier.
//!
//! Templates are matched cell by cell against a window of exactly the same
//! length. The catalog is defined for windows of 4 and 5 cells only; other
//! win lengths get no gap bonus.

use std::fmt;

use connectn_engine::{Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Stone,
    Gap,
}

impl Mark {
    fn accepts(self, cell: Cell, player: Player) -> bool {
        match self {
            Mark::Stone => cell.is_owned_by(player),
            Mark::Gap => cell.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapTemplate {
    marks: &'static [Mark],
}

use Mark::{Gap as G, Stone as S};

static LENGTH_4: [GapTemplate; 4] = [
    GapTemplate::new(&[S, G, S, S]),
    GapTemplate::new(&[S, S, G, S]),
    GapTemplate::new(&[G, S, S, S]),
    GapTemplate::new(&[S, S, S, G]),
];

static LENGTH_5: [GapTemplate; 3] = [
    GapTemplate::new(&[S, G, S, G, S]),
    GapTemplate::new(&[S, G, G, S, S]),
    GapTemplate::new(&[S, S, G, G, S]),
];

/// Returns the gap templates that apply to windows of `length` cells.
#[must_use]
pub fn gap_templates(length: usize) -> &'static [GapTemplate] {
    match length {
        4 => &LENGTH_4,
        5 => &LENGTH_5,
        _ => &[],
    }
}

impl GapTemplate {
    const fn new(marks: &'static [Mark]) -> Self {
        Self { marks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` if `cells` has exactly this template's length and each
    /// cell agrees with the mark at the same position.
    pub fn matches<I>(&self, cells: I, player: Player) -> bool
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut cells = cells.into_iter();
        self.marks
            .iter()
            .all(|mark| cells.next().is_some_and(|cell| mark.accepts(cell, player)))
            && cells.next().is_none()
    }
}

impl fmt::Display for GapTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks {
            let c = match mark {
                Mark::Stone => 'X',
                Mark::Gap => '.',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
