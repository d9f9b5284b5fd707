use std::path::PathBuf;

use anyhow::Context as _;
use connectn_engine::GameConfig;

use crate::util;

/// Game parameters shared by every subcommand.
///
/// Values are taken from `--config` first and then overridden by any flag
/// given explicitly.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// JSON file with a game configuration
    #[clap(long)]
    config: Option<PathBuf>,
    /// Number of rows in the board [default: 6]
    #[clap(long)]
    rows: Option<usize>,
    /// Number of columns in the board [default: 7]
    #[clap(long)]
    cols: Option<usize>,
    /// Length of consecutive pieces to win [default: 4]
    #[clap(long)]
    length: Option<usize>,
    /// Depth of the minimax search [default: 4]
    #[clap(long)]
    depth: Option<usize>,
}

impl GameArg {
    pub(crate) fn resolve(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file::<GameConfig, _>("game config", path)?,
            None => GameConfig::default(),
        };
        self.apply_overrides(&mut config);

        config.validate().context("Invalid game configuration")?;
        if let Some(message) = win_length_warning(&config) {
            tracing::warn!(
                rows = config.rows,
                cols = config.cols,
                win_length = config.win_length,
                "{message}"
            );
        }
        tracing::debug!(?config, "resolved game configuration");
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        let overrides = [
            (self.rows, &mut config.rows),
            (self.cols, &mut config.cols),
            (self.length, &mut config.win_length),
            (self.depth, &mut config.search_depth),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

fn win_length_warning(config: &GameConfig) -> Option<&'static str> {
    if !config.win_is_possible() {
        Some("win length exceeds both board sides, the game can only end in a draw")
    } else if !config.win_length_fits() {
        Some("win length exceeds the shorter board side, diagonal wins are impossible")
    } else {
        None
    }
}
