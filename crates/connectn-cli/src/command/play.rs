use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use connectn_engine::{Board, Game, GameOutcome, Player};
use connectn_evaluator::search::{MoveSelectionError, SearchEngine};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    config::GameArg,
    ui::{self, HumanInput},
};

const HUMAN_PLAYER: Player = Player::A;
const AI_PLAYER: Player = Player::B;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FirstMover {
    Human,
    Ai,
    #[default]
    Random,
}

impl FirstMover {
    fn choose(self, seed: Option<u64>) -> Player {
        match self {
            FirstMover::Human => HUMAN_PLAYER,
            FirstMover::Ai => AI_PLAYER,
            FirstMover::Random => {
                let mut rng = match seed {
                    Some(seed) => Pcg32::seed_from_u64(seed),
                    None => Pcg32::from_rng(&mut rand::rng()),
                };
                if rng.random_bool(0.5) {
                    HUMAN_PLAYER
                } else {
                    AI_PLAYER
                }
            }
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameArg,
    /// Who makes the first move
    #[clap(long, value_enum, default_value_t = FirstMover::Random)]
    first: FirstMover,
    /// Seed for choosing the first mover at random
    #[clap(long)]
    seed: Option<u64>,
    /// Print the board without colors
    #[clap(long)]
    no_color: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = arg.game.resolve()?;
    let first = arg.first.choose(arg.seed);
    tracing::info!(%first, "starting game");

    let mut game = Game::new(config, first).context("Failed to create game")?;
    let engine = SearchEngine::heuristic(config.win_length);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    play_session(&mut game, &engine, !arg.no_color, &mut input, &mut output)?;
    Ok(())
}

/// Runs a human-versus-AI game on the given streams.
///
/// Returns the final outcome, or `None` if the human quit (or the input
/// ended) before the game was decided.
fn play_session<R, W>(
    game: &mut Game,
    engine: &SearchEngine<'_>,
    colored: bool,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<GameOutcome>>
where
    R: BufRead,
    W: Write,
{
    ui::write_board(output, game.board(), colored)?;

    while game.outcome().is_in_progress() {
        let outcome = if game.to_move() == HUMAN_PLAYER {
            let Some(column) = read_human_move(game.board(), input, output)? else {
                writeln!(output, "Bye.")?;
                return Ok(None);
            };
            let outcome = game.play(column)?;
            ui::write_board(output, game.board(), colored)?;
            outcome
        } else {
            let depth = game.config().search_depth;
            let column = match engine.search(game.board(), depth, true).selected_column() {
                Ok(column) => column,
                Err(MoveSelectionError::NoLegalMove) => {
                    writeln!(output, "It's a draw!")?;
                    return Ok(Some(GameOutcome::Draw));
                }
                Err(err @ MoveSelectionError::Leaf) => {
                    return Err(err).context("AI failed to choose a move");
                }
            };
            let outcome = game.play(column)?;
            writeln!(output, "AI's move: {column}")?;
            ui::write_board(output, game.board(), colored)?;
            outcome
        };

        match outcome {
            GameOutcome::InProgress => {}
            GameOutcome::Won(HUMAN_PLAYER) => writeln!(output, "You win!")?,
            GameOutcome::Won(_) => writeln!(output, "AI wins!")?,
            GameOutcome::Draw => writeln!(output, "It's a draw!")?,
        }
    }

    output.flush()?;
    Ok(Some(game.outcome()))
}

/// Prompts until the human enters a playable column.
///
/// Returns `None` when the human quits or the input is exhausted.
fn read_human_move<R, W>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Enter your move (0-{}): ", board.cols() - 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        match ui::parse_input(&line) {
            Ok(HumanInput::Quit) => return Ok(None),
            Ok(HumanInput::Column(column)) if board.is_valid_move(column) => {
                return Ok(Some(column));
            }
            Ok(HumanInput::Column(_)) => writeln!(output, "Invalid move. Please try again.")?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
