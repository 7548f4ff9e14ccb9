use log::debug;
use serde::{Deserialize, Serialize};

use super::match_key::match_key;
use super::ranking::RankingEngine;
use crate::model::{EntryStatus, PlayerRoster, RoundFormat, TournamentRounds};

/// Who to look for: a profile id, a name, or both.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub player_id: Option<String>,
    pub name: String,
}

impl PlayerQuery {
    #[must_use]
    pub fn new(player_id: Option<String>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.filter(|id| !id.trim().is_empty()),
            name: name.into(),
        }
    }
}

/// A player's final placing in one tournament, as listed on the profile page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerTournamentResult {
    pub tournament_id: String,
    pub title: String,
    pub format: RoundFormat,
    pub status: EntryStatus,
    pub display_rank: String,
    pub display_score: String,
    pub combined_total: Option<u32>,
    pub total_display: String,
    /// Completed players in the field.
    pub field_size: usize,
}

/// Ranks every tournament with the shared engine and keeps the rows that
/// belong to `player`, in the order the tournaments were supplied.
#[must_use]
pub fn player_history(
    player: &PlayerQuery,
    tournaments: &[TournamentRounds],
    roster: Option<&PlayerRoster>,
) -> Vec<PlayerTournamentResult> {
    let key = match_key(&player.name);
    let engine = roster.map_or_else(RankingEngine::new, RankingEngine::with_roster);

    tournaments
        .iter()
        .filter_map(|rounds| {
            let leaderboard = engine.rank(rounds);
            let Some(entry) = leaderboard.find_player(player.player_id.as_deref(), &key) else {
                debug!(
                    "{}: '{}' not in results",
                    rounds.meta.tournament_id, player.name
                );
                return None;
            };
            Some(PlayerTournamentResult {
                tournament_id: rounds.meta.tournament_id.clone(),
                title: rounds.meta.title.clone(),
                format: leaderboard.format,
                status: entry.status,
                display_rank: entry.display_rank.clone(),
                display_score: entry.display_score.clone(),
                combined_total: entry.combined_total,
                total_display: entry.total_display(),
                field_size: leaderboard.completed().count(),
            })
        })
        .collect()
}
