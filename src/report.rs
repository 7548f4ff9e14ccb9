use log::info;
use serde::Serialize;

use crate::args::Settings;
use crate::error::ResultsError;
use crate::model::{Leaderboard, PlayerRoster, TournamentMeta, TournamentRounds};
use crate::score::{
    HoleGrid, LeaderboardPreview, PlayerQuery, PlayerTournamentResult, RankingEngine, ScoreSymbol,
    leaderboard_preview, player_history,
};
use crate::source::{load_par, load_records, load_roster};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub symbol: String,
    pub label: String,
    pub highlight: bool,
}

/// Everything the results page needs for one tournament.
#[derive(Serialize, Debug, Clone)]
pub struct ResultsReport {
    pub tournament: TournamentMeta,
    pub column_labels: (String, String),
    pub leaderboard: Leaderboard,
    pub hole_grid: Option<HoleGrid>,
    pub preview: LeaderboardPreview,
    pub legend: Vec<LegendItem>,
    pub player: Option<Vec<PlayerTournamentResult>>,
}

#[must_use]
pub fn legend() -> Vec<LegendItem> {
    ScoreSymbol::legend()
        .iter()
        .map(|(symbol, label)| LegendItem {
            symbol: symbol.to_string(),
            label: (*label).to_string(),
            highlight: symbol.is_under_par(),
        })
        .collect()
}

/// Reads the configured inputs into a [`TournamentRounds`]. Absent round
/// files are empty rounds.
///
/// # Errors
/// Returns an error if a configured file cannot be read or parsed.
pub fn load_rounds(settings: &Settings) -> Result<TournamentRounds, ResultsError> {
    let meta = TournamentMeta {
        tournament_id: settings.tournament_id.clone(),
        title: settings.title.clone(),
        is_two_round_format: settings.two_round_format,
    };
    let round1 = match settings.round1_json.as_deref() {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };
    let round2 = match settings.round2_json.as_deref() {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };
    let par = match settings.par_json.as_deref() {
        Some(path) => Some(load_par(path)?),
        None => None,
    };
    info!(
        "{}: loaded {} round 1 rows, {} round 2 rows",
        meta.tournament_id,
        round1.len(),
        round2.len()
    );
    Ok(TournamentRounds::new(meta)
        .with_round1(round1)
        .with_round2(round2)
        .with_par(par))
}

/// Ranks `rounds` and assembles the page data.
#[must_use]
pub fn build_report(
    rounds: &TournamentRounds,
    roster: &PlayerRoster,
    preview_limit: usize,
    player: Option<&PlayerQuery>,
) -> ResultsReport {
    let leaderboard = RankingEngine::with_roster(roster).rank(rounds);
    let (first, second) = leaderboard.format.column_labels();
    ResultsReport {
        tournament: rounds.meta.clone(),
        column_labels: (first.to_string(), second.to_string()),
        hole_grid: HoleGrid::build(&leaderboard, rounds),
        preview: leaderboard_preview(&leaderboard, preview_limit),
        legend: legend(),
        player: player.map(|p| player_history(p, std::slice::from_ref(rounds), Some(roster))),
        leaderboard,
    }
}

/// Loads every configured input and builds the report.
///
/// # Errors
/// Returns an error if a configured file cannot be read or parsed.
pub fn run(settings: &Settings) -> Result<ResultsReport, ResultsError> {
    let rounds = load_rounds(settings)?;
    let roster = match settings.roster_json.as_deref() {
        Some(path) => PlayerRoster::from_players(&load_roster(path)?),
        None => PlayerRoster::new(),
    };
    let player = settings.wants_player().then(|| {
        PlayerQuery::new(
            settings.player_id.clone(),
            settings.player_name.clone().unwrap_or_default(),
        )
    });
    Ok(build_report(
        &rounds,
        &roster,
        settings.preview_limit,
        player.as_ref(),
    ))
}
