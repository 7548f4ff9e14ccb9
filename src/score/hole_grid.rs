use serde::{Deserialize, Serialize};

use super::match_key::index_by_key;
use super::symbol::ScoreSymbol;
use crate::model::{
    EntryStatus, HOLES, Leaderboard, RoundFormat, RoundRecord, TournamentRounds, competitors,
};

const FRONT_NINE: (usize, usize) = (1, 9);
const BACK_NINE: (usize, usize) = (10, 18);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleCell {
    pub hole: usize,
    pub raw: Option<String>,
    pub strokes: Option<u32>,
    pub symbol: Option<ScoreSymbol>,
}

/// One round of one player across the eighteen holes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleLine {
    /// `Some(1)`/`Some(2)` for two-round events, `None` otherwise.
    pub round: Option<u8>,
    pub cells: Vec<HoleCell>,
    pub front_nine: Option<u32>,
    pub back_nine: Option<u32>,
}

impl HoleLine {
    #[must_use]
    pub fn label(&self) -> String {
        self.round.map_or_else(|| "-".to_string(), |r| format!("{r}R"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleGridRow {
    pub name: String,
    pub is_amateur: bool,
    pub display_rank: String,
    pub status: EntryStatus,
    /// Empty for players who did not start or returned no card.
    pub lines: Vec<HoleLine>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParLine {
    pub holes: Vec<Option<u32>>,
    pub front_nine: Option<u32>,
    pub back_nine: Option<u32>,
    pub total: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleGrid {
    pub par: ParLine,
    pub rows: Vec<HoleGridRow>,
}

impl HoleGrid {
    /// Builds the hole-by-hole grid in leaderboard order. `None` when there
    /// is no par reference carrying hole values.
    #[must_use]
    pub fn build(leaderboard: &Leaderboard, rounds: &TournamentRounds) -> Option<Self> {
        let par = rounds.par_reference().filter(|p| p.has_hole_scores())?;
        let par_holes: Vec<Option<u32>> = (1..=HOLES).map(|h| par.hole_strokes(h)).collect();

        let two_round = leaderboard.format == RoundFormat::TwoRound && rounds.has_both_rounds();
        let round1 = index_by_key(&rounds.round1);
        let round2 = index_by_key(&rounds.round2);
        let single = if competitors(&rounds.round1).next().is_some() {
            &round1
        } else {
            &round2
        };

        let rows = leaderboard
            .entries
            .iter()
            .map(|entry| {
                let no_card =
                    matches!(entry.status, EntryStatus::NoReturn | EntryStatus::DidNotStart);
                let lines = if no_card {
                    Vec::new()
                } else if two_round {
                    [(1, round1.get(&entry.match_key)), (2, round2.get(&entry.match_key))]
                        .into_iter()
                        .filter_map(|(round, record)| {
                            record.map(|r| hole_line(Some(round), r, &par_holes))
                        })
                        .collect()
                } else {
                    single
                        .get(&entry.match_key)
                        .map(|r| vec![hole_line(None, r, &par_holes)])
                        .unwrap_or_default()
                };
                HoleGridRow {
                    name: entry.name.clone(),
                    is_amateur: entry.is_amateur,
                    display_rank: entry.display_rank.clone(),
                    status: entry.status,
                    lines,
                }
            })
            .collect();

        Some(Self {
            par: ParLine {
                holes: par_holes,
                front_nine: par.sum_holes(FRONT_NINE.0, FRONT_NINE.1),
                back_nine: par.sum_holes(BACK_NINE.0, BACK_NINE.1),
                total: par.total_strokes(),
            },
            rows,
        })
    }
}

fn hole_line(round: Option<u8>, record: &RoundRecord, par_holes: &[Option<u32>]) -> HoleLine {
    let cells = (1..=HOLES)
        .map(|hole| {
            let strokes = record.hole_strokes(hole);
            let par = par_holes.get(hole - 1).copied().flatten();
            HoleCell {
                hole,
                raw: record.hole(hole).map(str::to_string),
                strokes,
                symbol: ScoreSymbol::for_hole(strokes, par),
            }
        })
        .collect();
    HoleLine {
        round,
        cells,
        front_nine: record.sum_holes(FRONT_NINE.0, FRONT_NINE.1),
        back_nine: record.sum_holes(BACK_NINE.0, BACK_NINE.1),
    }
}
