use clap::{ArgAction, Parser};
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::ResultsError;
use crate::logging::parse_level;
use crate::score::DEFAULT_PREVIEW_LIMIT;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Rank tournament round records into a leaderboard", long_about = None)]
pub struct Cli {
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// Round 1 rows (or the only round) as a JSON array of flat objects.
    #[arg(long)]
    pub round1_json: Option<PathBuf>,
    #[arg(long)]
    pub round2_json: Option<PathBuf>,
    #[arg(long)]
    pub par_json: Option<PathBuf>,
    #[arg(long)]
    pub roster_json: Option<PathBuf>,
    #[arg(long)]
    pub tournament_id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    /// Treat the tournament as two rounds even if only one round file is
    /// given (`true`/`false`, overrides the config file).
    #[arg(long, action = ArgAction::Set)]
    pub two_round_format: Option<bool>,
    #[arg(long)]
    pub preview_limit: Option<usize>,
    /// Profile lookup: player id.
    #[arg(long)]
    pub player_id: Option<String>,
    /// Profile lookup: player name.
    #[arg(long)]
    pub player_name: Option<String>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub output_json: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    round1_json: Option<PathBuf>,
    round2_json: Option<PathBuf>,
    par_json: Option<PathBuf>,
    roster_json: Option<PathBuf>,
    tournament_id: Option<String>,
    title: Option<String>,
    two_round_format: Option<bool>,
    preview_limit: Option<usize>,
    player_id: Option<String>,
    player_name: Option<String>,
    log_level: Option<String>,
    output_json: Option<PathBuf>,
}

/// Settings after merging the command line over the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub round1_json: Option<PathBuf>,
    pub round2_json: Option<PathBuf>,
    pub par_json: Option<PathBuf>,
    pub roster_json: Option<PathBuf>,
    pub tournament_id: String,
    pub title: String,
    pub two_round_format: bool,
    pub preview_limit: usize,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub log_level: LevelFilter,
    pub output_json: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn wants_player(&self) -> bool {
        self.player_id.is_some() || self.player_name.is_some()
    }
}

/// Load settings from CLI and optional TOML file. Command line values win.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if the
/// log level is not recognised.
pub fn load_settings(cli: Cli) -> Result<Settings, ResultsError> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| ResultsError::Io(format!("read config toml {}: {e}", path.display())))?;
            toml::from_str::<FileConfig>(&contents).map_err(|e| {
                ResultsError::Config(format!("parse config toml {}: {e}", path.display()))
            })?
        }
        None => FileConfig::default(),
    };

    let level_text = cli
        .log_level
        .or(file_config.log_level)
        .unwrap_or_else(|| "warn".to_string());
    let log_level = parse_level(&level_text)
        .ok_or_else(|| ResultsError::Config(format!("unknown log level '{level_text}'")))?;

    let tournament_id = cli
        .tournament_id
        .or(file_config.tournament_id)
        .unwrap_or_default();
    let title = cli
        .title
        .or(file_config.title)
        .unwrap_or_else(|| tournament_id.clone());

    Ok(Settings {
        round1_json: cli.round1_json.or(file_config.round1_json),
        round2_json: cli.round2_json.or(file_config.round2_json),
        par_json: cli.par_json.or(file_config.par_json),
        roster_json: cli.roster_json.or(file_config.roster_json),
        tournament_id,
        title,
        two_round_format: cli
            .two_round_format
            .or(file_config.two_round_format)
            .unwrap_or(false),
        preview_limit: cli
            .preview_limit
            .or(file_config.preview_limit)
            .unwrap_or(DEFAULT_PREVIEW_LIMIT),
        player_id: cli.player_id.or(file_config.player_id),
        player_name: cli.player_name.or(file_config.player_name),
        log_level,
        output_json: cli.output_json.or(file_config.output_json),
    })
}
