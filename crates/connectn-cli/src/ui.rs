use std::io::{self, Write};

use connectn_engine::{Board, Cell, Player};
use crossterm::style::{Color, Stylize as _};

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Red,
        Player::B => Color::Blue,
    }
}

/// Writes `board` in the same layout as its `Display` impl, optionally with
/// colored stones.
pub(crate) fn write_board<W>(out: &mut W, board: &Board, colored: bool) -> io::Result<()>
where
    W: Write,
{
    if !colored {
        return writeln!(out, "{board}");
    }

    for row in board.rows_top_down() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                write!(out, " ")?;
            }
            match cell {
                Cell::Empty => write!(out, "{}", Cell::EMPTY_SYMBOL)?,
                Cell::Stone(player) => {
                    write!(out, "{}", player.symbol().with(player_color(*player)))?;
                }
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", "-".repeat(2 * board.cols() - 1))?;
    let indices = (0..board.cols())
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{indices}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HumanInput {
    Column(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum InputError {
    #[display("Please enter a valid column number.")]
    Empty,
    #[display("Invalid input. Please enter a valid column number.")]
    NotANumber,
}

pub(crate) fn parse_input(line: &str) -> Result<HumanInput, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if line.eq_ignore_ascii_case("q") {
        return Ok(HumanInput::Quit);
    }
    line.parse()
        .map(HumanInput::Column)
        .map_err(|_| InputError::NotANumber)
}
