use serde::{Deserialize, Serialize};

use crate::model::{Leaderboard, LeaderboardEntry, RoundFormat};

/// Rows shown in the home page results box.
pub const DEFAULT_PREVIEW_LIMIT: usize = 25;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow {
    pub rank: String,
    pub name: String,
    pub is_amateur: bool,
    pub first: String,
    pub second: String,
    pub score: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardPreview {
    pub first_label: String,
    pub second_label: String,
    pub rows: Vec<PreviewRow>,
}

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}

fn preview_row(entry: &LeaderboardEntry, format: RoundFormat) -> PreviewRow {
    let (first, second) = match format {
        RoundFormat::TwoRound => (
            entry.round1_total.map(|t| t.to_string()),
            entry
                .round2_total
                .map(|t| t.to_string())
                .or_else(|| entry.raw_total.clone()),
        ),
        RoundFormat::SingleRound => (entry.out.clone(), entry.in_.clone()),
    };
    PreviewRow {
        rank: entry.display_rank.clone(),
        name: entry.name.clone(),
        is_amateur: entry.is_amateur,
        first: or_dash(first),
        second: or_dash(second),
        score: entry.display_score.clone(),
    }
}

/// The first `limit` entries of `leaderboard` as compact rows.
#[must_use]
pub fn leaderboard_preview(leaderboard: &Leaderboard, limit: usize) -> LeaderboardPreview {
    let (first_label, second_label) = leaderboard.format.column_labels();
    LeaderboardPreview {
        first_label: first_label.to_string(),
        second_label: second_label.to_string(),
        rows: leaderboard
            .entries
            .iter()
            .take(limit)
            .map(|entry| preview_row(entry, leaderboard.format))
            .collect(),
    }
}
