mod common;

use common::{par, row, single_round};
use proptest::prelude::*;
use rusty_golf_results::model::{RoundFormat, RoundLink, RoundRecord, TournamentRounds};
use rusty_golf_results::score::tie_groups;
use rusty_golf_results::{Leaderboard, RankingEngine};

fn rank_token() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        8 => Just(""),
        1 => Just("DNS"),
        1 => Just("NR"),
        1 => Just("DQ"),
    ]
}

fn total_text() -> impl Strategy<Value = String> {
    prop_oneof![
        10 => (66u32..80).prop_map(|t| t.to_string()),
        1 => Just("-".to_string()),
        1 => Just(String::new()),
    ]
}

fn field() -> impl Strategy<Value = Vec<RoundRecord>> {
    prop::collection::vec((rank_token(), total_text()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (rank, total))| row(&format!("Player {i}"), rank, &total))
            .collect()
    })
}

fn two_round_field() -> impl Strategy<Value = TournamentRounds> {
    prop::collection::vec((rank_token(), 66u32..80, prop::option::of(66u32..80)), 1..16).prop_map(
        |rows| {
            let mut round1 = vec![par(72)];
            let mut round2 = vec![par(72)];
            for (i, (rank, second, first)) in rows.into_iter().enumerate() {
                let name = format!("Player {i}");
                if let Some(first) = first {
                    round1.push(row(&name, "", &first.to_string()));
                }
                round2.push(row(&name, rank, &second.to_string()));
            }
            TournamentRounds::new(common::meta("brillia2024"))
                .with_round1(round1)
                .with_round2(round2)
        },
    )
}

fn check_invariants(leaderboard: &Leaderboard) -> Result<(), TestCaseError> {
    let entries = &leaderboard.entries;

    // Completed rows with totals are ascending.
    let totals: Vec<u32> = entries
        .iter()
        .filter(|e| e.is_completed())
        .filter_map(|e| e.combined_total)
        .collect();
    prop_assert!(totals.windows(2).all(|w| w[0] <= w[1]), "{totals:?}");

    // Special statuses come after every completed row.
    if let Some(first_special) = entries.iter().position(|e| !e.is_completed()) {
        prop_assert!(entries[first_special..].iter().all(|e| !e.is_completed()));
        for e in &entries[first_special..] {
            prop_assert_eq!(Some(e.display_rank.as_str()), e.status.token());
        }
    }

    for group in tie_groups(entries) {
        let first = &entries[group.start];
        if !first.is_completed() {
            continue;
        }
        for entry in &entries[group.clone()] {
            prop_assert_eq!(entry.rank_position(), Some(group.start + 1));
            prop_assert_eq!(entry.is_tied(), group.len() > 1);
            prop_assert_eq!(entry.combined_total, first.combined_total);
        }
        // A group is never continued past its end by an equal total.
        if let (Some(total), Some(next)) = (first.combined_total, entries.get(group.end)) {
            prop_assert!(!(next.is_completed() && next.combined_total == Some(total)));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test5_single_round_invariants(rows in field()) {
        let rounds = single_round("arima", rows, 72);
        let engine = RankingEngine::new();
        let leaderboard = engine.rank(&rounds);
        check_invariants(&leaderboard)?;
        prop_assert_eq!(leaderboard.entries.len(), rounds.round1.len());
        prop_assert_eq!(engine.rank(&rounds), leaderboard);
    }

    #[test]
    fn test5_two_round_invariants(rounds in two_round_field()) {
        let engine = RankingEngine::new();
        let leaderboard = engine.rank(&rounds);
        check_invariants(&leaderboard)?;
        prop_assert_eq!(leaderboard.entries.len(), rounds.round2.len() - 1);
        let merged = rounds.round1.len() > 1;
        prop_assert_eq!(leaderboard.format == RoundFormat::TwoRound, merged);
        for entry in leaderboard.completed() {
            // Without any round 1 totals round 2 is ranked as a single round.
            let expected = match entry.link {
                RoundLink::Single => entry.round1_total,
                RoundLink::Merged => entry.round1_total.zip(entry.round2_total).map(|(a, b)| a + b),
                RoundLink::Unmatched => entry.round2_total,
                RoundLink::Incomplete => None,
            };
            prop_assert_eq!(entry.combined_total, expected);
        }
        prop_assert_eq!(engine.rank(&rounds), leaderboard);
    }
}
