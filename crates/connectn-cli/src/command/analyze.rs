use std::path::PathBuf;

use connectn_engine::{Board, GameConfig};
use connectn_evaluator::search::{SearchEngine, SearchResult};

use crate::{config::GameArg, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    game: GameArg,
    /// Board text file to analyze (reads stdin if omitted)
    #[clap(long)]
    board: Option<PathBuf>,
    /// Search for the minimizing side (`X`) instead of the maximizing side (`O`)
    #[clap(long)]
    minimize: bool,
    /// Output file for the result (writes to stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let config = arg.game.resolve()?;
    let board = util::read_board(arg.board.as_ref())?;
    if (board.rows(), board.cols()) != (config.rows, config.cols) {
        tracing::debug!(
            rows = board.rows(),
            cols = board.cols(),
            "using the dimensions of the input board"
        );
    }

    let result = analyze(&board, &config, !arg.minimize);
    let mut output = util::Output::from_output_path(arg.output.clone())?;
    output.write_json(result)?;
    Ok(())
}

fn analyze(board: &Board, config: &GameConfig, maximizing: bool) -> SearchResult {
    SearchEngine::heuristic(config.win_length).search(board, config.search_depth, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(win_length: usize, search_depth: usize) -> GameConfig {
        GameConfig {
            win_length,
            search_depth,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_finds_winning_column() {
        let board: Board = "O O O .".parse().unwrap();
        assert_eq!(
            analyze(&board, &config(4, 1), true),
            SearchResult::Move {
                column: 3,
                score: 0
            }
        );
    }

    #[test]
    fn test_decided_board_is_a_leaf() {
        let board: Board = "X X X X".parse().unwrap();
        assert!(analyze(&board, &config(4, 3), false).is_leaf());
    }

    #[test]
    fn test_result_is_written_as_json() {
        let path =
            std::env::temp_dir().join(format!("connectn-analyze-{}.json", std::process::id()));
        let board: Board = "X X X .".parse().unwrap();
        let result = analyze(&board, &config(4, 1), false);
        let mut output = util::Output::open(path.clone()).unwrap();
        output.write_json(result).unwrap();
        drop(output);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(json["kind"], "move");
        assert_eq!(json["column"], 3);
    }
}
