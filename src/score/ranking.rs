use log::{debug, warn};
use std::collections::HashMap;

use super::match_key::{display_name, index_by_key, is_amateur, match_key};
use super::relative::{RelativeScore, format_supplied_score};
use super::sort_utils::{assign_ranks, sort_entries};
use crate::model::{
    DataQualityIssue, EntryStatus, Leaderboard, LeaderboardEntry, PlayerRoster, RoundFormat,
    RoundLink, RoundRecord, TournamentRounds, competitors,
};

/// Turns the round records of one tournament into a ranked leaderboard.
///
/// The same engine serves the results page, the player profile and the home
/// page preview. It never fails: rows it cannot fully interpret are kept with
/// whatever could be derived and reported in [`Leaderboard::issues`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine<'a> {
    roster: Option<&'a PlayerRoster>,
}

/// Totals for one player before scoring.
struct Totals {
    link: RoundLink,
    round1: Option<u32>,
    round2: Option<u32>,
    combined: Option<u32>,
}

impl<'a> RankingEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { roster: None }
    }

    /// Decorate entries with profile ids and affiliations from `roster`.
    #[must_use]
    pub fn with_roster(roster: &'a PlayerRoster) -> Self {
        Self {
            roster: Some(roster),
        }
    }

    #[must_use]
    pub fn rank(&self, rounds: &TournamentRounds) -> Leaderboard {
        let merge = rounds.has_both_rounds();
        let format = if merge || rounds.meta.is_two_round_format {
            RoundFormat::TwoRound
        } else {
            RoundFormat::SingleRound
        };

        let rows: Vec<&RoundRecord> = if merge || competitors(&rounds.round1).next().is_none() {
            competitors(&rounds.round2).collect()
        } else {
            competitors(&rounds.round1).collect()
        };
        if rows.is_empty() {
            debug!("{}: no round data", rounds.meta.tournament_id);
            return Leaderboard::empty(format);
        }

        let mut issues = Vec::new();
        if format == RoundFormat::TwoRound && !merge {
            issues.push(DataQualityIssue::TwoRoundFormatWithoutRoundData);
        }

        let par = rounds.par_reference();
        if par.is_none() {
            issues.push(DataQualityIssue::MissingPar);
        }
        let par_total = par.and_then(RoundRecord::total_strokes);
        // Same course both days; no per-round par is modelled.
        let reference_total = match format {
            RoundFormat::SingleRound => par_total,
            RoundFormat::TwoRound if merge => par_total.map(|t| t.saturating_mul(2)),
            RoundFormat::TwoRound => None,
        };

        let round1_by_key = if merge {
            index_by_key(&rounds.round1)
        } else {
            HashMap::default()
        };

        debug!(
            "{}: ranking {} rows, {format}, reference {:?}",
            rounds.meta.tournament_id,
            rows.len(),
            reference_total
        );

        let mut entries: Vec<LeaderboardEntry> = rows
            .into_iter()
            .map(|row| {
                let key = match_key(&row.name);
                let totals = if merge {
                    merged_totals(row, round1_by_key.get(key.as_str()).copied())
                } else {
                    Totals {
                        link: RoundLink::Single,
                        round1: row.total_strokes(),
                        round2: None,
                        combined: row.total_strokes(),
                    }
                };
                self.build_entry(row, key, &totals, reference_total, &mut issues)
            })
            .collect();

        sort_entries(&mut entries);
        assign_ranks(&mut entries);

        for issue in &issues {
            warn!("{}: {issue}", rounds.meta.tournament_id);
        }

        Leaderboard {
            format,
            reference_total,
            entries,
            issues,
        }
    }

    fn build_entry(
        &self,
        row: &RoundRecord,
        key: String,
        totals: &Totals,
        reference_total: Option<u32>,
        issues: &mut Vec<DataQualityIssue>,
    ) -> LeaderboardEntry {
        let status = EntryStatus::from_rank_token(&row.rank);
        let name = display_name(&row.name);

        if !status.is_special() {
            if totals.link == RoundLink::Unmatched {
                issues.push(DataQualityIssue::UnmatchedRound2Player { name: name.clone() });
            }
            if totals.combined.is_none() {
                issues.push(DataQualityIssue::UnknownTotal {
                    name: name.clone(),
                    raw: row.total.clone(),
                });
            }
        }

        let display_score = match (status, totals.link, totals.combined, reference_total) {
            (
                EntryStatus::Completed,
                RoundLink::Single | RoundLink::Merged,
                Some(total),
                Some(reference),
            ) => RelativeScore::between(total, reference).to_string(),
            _ => format_supplied_score(row.score.as_deref()),
        };

        let roster_entry = self.roster.and_then(|r| r.lookup(&key));
        let player_id = row
            .player_id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| roster_entry.map(|e| e.player_id.clone()));

        LeaderboardEntry {
            is_amateur: is_amateur(&row.name),
            name,
            match_key: key,
            player_id,
            affiliation: roster_entry.and_then(|e| e.affiliation.clone()),
            status,
            link: totals.link,
            round1_total: totals.round1,
            round2_total: totals.round2,
            combined_total: totals.combined,
            raw_total: row.total.clone(),
            out: row.out.clone(),
            in_: row.in_.clone(),
            display_score,
            // Completed rows are relabelled once sorted.
            display_rank: row.rank.trim().to_string(),
        }
    }
}

fn merged_totals(row: &RoundRecord, round1: Option<&RoundRecord>) -> Totals {
    let round2 = row.total_strokes();
    let round1 = round1.and_then(RoundRecord::total_strokes);
    match (round1, round2) {
        (Some(first), Some(second)) => Totals {
            link: RoundLink::Merged,
            round1: Some(first),
            round2: Some(second),
            combined: Some(first.saturating_add(second)),
        },
        (Some(first), None) => Totals {
            link: RoundLink::Incomplete,
            round1: Some(first),
            round2: None,
            combined: None,
        },
        (None, _) => Totals {
            link: RoundLink::Unmatched,
            round1,
            round2,
            combined: round2,
        },
    }
}

/// Ranks `rounds` with an optional roster.
#[must_use]
pub fn rank_tournament(rounds: &TournamentRounds, roster: Option<&PlayerRoster>) -> Leaderboard {
    match roster {
        Some(roster) => RankingEngine::with_roster(roster).rank(rounds),
        None => RankingEngine::new().rank(rounds),
    }
}
