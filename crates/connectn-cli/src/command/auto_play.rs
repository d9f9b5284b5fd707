use std::io::{self, Write};

use anyhow::Context as _;
use connectn_engine::{Game, GameOutcome, Player};
use connectn_evaluator::search::SearchEngine;

use crate::{config::GameArg, ui};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Side {
    /// Minimizing side (`X`)
    A,
    /// Maximizing side (`O`)
    #[default]
    B,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Player::A,
            Side::B => Player::B,
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Side that makes the first move
    #[clap(long, value_enum, default_value_t = Side::B)]
    first: Side,
    /// Print the board without colors
    #[clap(long)]
    no_color: bool,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let config = arg.game.resolve()?;
    let mut game = Game::new(config, arg.first.into()).context("Failed to create game")?;
    let engine = SearchEngine::heuristic(config.win_length);
    let mut output = io::stdout().lock();
    auto_play(&mut game, &engine, !arg.no_color, &mut output)?;
    Ok(())
}

/// Plays both sides with the search engine until the game is decided.
fn auto_play<W>(
    game: &mut Game,
    engine: &SearchEngine<'_>,
    colored: bool,
    output: &mut W,
) -> anyhow::Result<GameOutcome>
where
    W: Write,
{
    ui::write_board(output, game.board(), colored)?;

    while game.outcome().is_in_progress() {
        let player = game.to_move();
        let result = engine.search(
            game.board(),
            game.config().search_depth,
            player.is_maximizer(),
        );
        let column = result
            .selected_column()
            .with_context(|| format!("Player {player} could not choose a move"))?;
        game.play(column)?;

        writeln!(output, "Player {player} plays {column} (score {})", result.score())?;
        ui::write_board(output, game.board(), colored)?;
    }

    match game.outcome() {
        GameOutcome::Won(player) => writeln!(output, "Player {player} wins!")?,
        GameOutcome::Draw => writeln!(output, "It's a draw!")?,
        GameOutcome::InProgress => {}
    }
    output.flush()?;
    Ok(game.outcome())
}
