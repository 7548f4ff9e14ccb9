#![allow(dead_code)]

use rusty_golf_results::model::{HOLES, RoundRecord, TournamentMeta, TournamentRounds};
use rusty_golf_results::source::records_from_json;

pub fn row(name: &str, rank: &str, total: &str) -> RoundRecord {
    RoundRecord {
        name: name.to_string(),
        rank: rank.to_string(),
        total: Some(total.to_string()).filter(|t| !t.is_empty()),
        holes: vec![None; HOLES],
        ..RoundRecord::default()
    }
}

pub fn par(total: u32) -> RoundRecord {
    row("PAR", "PAR", &total.to_string())
}

pub fn meta(id: &str) -> TournamentMeta {
    TournamentMeta {
        tournament_id: id.to_string(),
        title: format!("{id} open"),
        is_two_round_format: false,
    }
}

pub fn single_round(id: &str, rows: Vec<RoundRecord>, par_total: u32) -> TournamentRounds {
    TournamentRounds::new(meta(id))
        .with_round1(rows)
        .with_par(Some(par(par_total)))
}

pub fn two_round_fixture() -> Result<TournamentRounds, Box<dyn std::error::Error>> {
    Ok(TournamentRounds::new(meta("brillia2024"))
        .with_round1(records_from_json(include_str!("../fixtures/two_round_1.json"))?)
        .with_round2(records_from_json(include_str!("../fixtures/two_round_2.json"))?))
}

pub fn single_round_fixture() -> Result<TournamentRounds, Box<dyn std::error::Error>> {
    Ok(TournamentRounds::new(meta("tsuruya2024"))
        .with_round1(records_from_json(include_str!("../fixtures/single_round.json"))?))
}

pub fn ranks(rounds: &TournamentRounds) -> Vec<(String, String)> {
    rusty_golf_results::RankingEngine::new()
        .rank(rounds)
        .entries
        .into_iter()
        .map(|e| (e.name, e.display_rank))
        .collect()
}
