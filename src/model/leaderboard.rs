use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    Completed,
    NoReturn,
    DidNotStart,
    Disqualified,
}

impl EntryStatus {
    /// Classifies a raw rank token. Anything that is not a special token
    /// is a completed round.
    #[must_use]
    pub fn from_rank_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("NR") {
            Self::NoReturn
        } else if token.eq_ignore_ascii_case("DNS") {
            Self::DidNotStart
        } else if token.eq_ignore_ascii_case("DQ") {
            Self::Disqualified
        } else {
            Self::Completed
        }
    }

    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, Self::Completed)
    }

    #[must_use]
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Completed => None,
            Self::NoReturn => Some("NR"),
            Self::DidNotStart => Some("DNS"),
            Self::Disqualified => Some("DQ"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundFormat {
    SingleRound,
    TwoRound,
}

impl RoundFormat {
    /// Headers for the two per-round columns of the results table.
    #[must_use]
    pub fn column_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::SingleRound => ("Out", "In"),
            Self::TwoRound => ("1R", "2R"),
        }
    }
}

impl fmt::Display for RoundFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundFormat::SingleRound => "single round",
            RoundFormat::TwoRound => "two rounds",
        };
        write!(f, "{s}")
    }
}

/// How an entry's totals were put together.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundLink {
    /// Single-round tournament, the round total is the result.
    Single,
    /// Both rounds found and summed.
    Merged,
    /// Final-round row without a usable first-round counterpart.
    Unmatched,
    /// First-round total found but the final-round total is unusable.
    Incomplete,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub is_amateur: bool,
    pub match_key: String,
    pub player_id: Option<String>,
    pub affiliation: Option<String>,
    pub status: EntryStatus,
    pub link: RoundLink,
    pub round1_total: Option<u32>,
    pub round2_total: Option<u32>,
    pub combined_total: Option<u32>,
    /// Source text of the (final round) total, shown when it does not parse.
    pub raw_total: Option<String>,
    pub out: Option<String>,
    #[serde(rename = "in")]
    pub in_: Option<String>,
    pub display_score: String,
    pub display_rank: String,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        !self.status.is_special()
    }

    /// Numeric part of the display rank, `None` for special statuses.
    #[must_use]
    pub fn rank_position(&self) -> Option<usize> {
        if self.status.is_special() {
            return None;
        }
        self.display_rank.trim_start_matches('T').parse().ok()
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.is_completed() && self.display_rank.starts_with('T')
    }

    /// Combined total, or the raw source text, or `-`.
    #[must_use]
    pub fn total_display(&self) -> String {
        match (self.combined_total, self.raw_total.as_deref()) {
            (Some(total), _) => total.to_string(),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

/// Anomalies found while ranking. None of them stop the computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DataQualityIssue {
    UnmatchedRound2Player { name: String },
    UnknownTotal { name: String, raw: Option<String> },
    MissingPar,
    TwoRoundFormatWithoutRoundData,
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityIssue::UnmatchedRound2Player { name } => {
                write!(f, "no usable round 1 total for '{name}', using round 2 only")
            }
            DataQualityIssue::UnknownTotal { name, raw } => write!(
                f,
                "total for '{name}' is not a stroke count ({})",
                raw.as_deref().unwrap_or("missing")
            ),
            DataQualityIssue::MissingPar => write!(f, "no par reference row"),
            DataQualityIssue::TwoRoundFormatWithoutRoundData => {
                write!(f, "two-round format flagged but only one round of data supplied")
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    pub format: RoundFormat,
    /// Stroke total the combined totals are compared against.
    pub reference_total: Option<u32>,
    pub entries: Vec<LeaderboardEntry>,
    pub issues: Vec<DataQualityIssue>,
}

impl Leaderboard {
    #[must_use]
    pub fn empty(format: RoundFormat) -> Self {
        Self {
            format,
            reference_total: None,
            entries: Vec::new(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn completed(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|e| e.is_completed())
    }

    /// Finds an entry by player id first, then by match key.
    #[must_use]
    pub fn find_player(&self, player_id: Option<&str>, match_key: &str) -> Option<&LeaderboardEntry> {
        player_id
            .and_then(|id| {
                self.entries
                    .iter()
                    .find(|e| e.player_id.as_deref() == Some(id))
            })
            .or_else(|| {
                if match_key.is_empty() {
                    None
                } else {
                    self.entries.iter().find(|e| e.match_key == match_key)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_tokens_are_classified() {
        assert_eq!(EntryStatus::from_rank_token("DNS"), EntryStatus::DidNotStart);
        assert_eq!(EntryStatus::from_rank_token(" nr "), EntryStatus::NoReturn);
        assert_eq!(EntryStatus::from_rank_token("DQ"), EntryStatus::Disqualified);
        assert_eq!(EntryStatus::from_rank_token("T3"), EntryStatus::Completed);
        assert_eq!(EntryStatus::from_rank_token(""), EntryStatus::Completed);
    }

    #[test]
    fn column_labels_follow_format() {
        assert_eq!(RoundFormat::TwoRound.column_labels(), ("1R", "2R"));
        assert_eq!(RoundFormat::SingleRound.column_labels(), ("Out", "In"));
    }
}
