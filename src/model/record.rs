use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use unicode_normalization::UnicodeNormalization;

/// Holes on a regulation course.
pub const HOLES: usize = 18;

/// Rank token marking the course reference row.
pub const PAR_RANK: &str = "PAR";

/// A flat key/value row exactly as the record source produced it.
pub type FlatRecord = BTreeMap<String, String>;

pub const NAME_ALIASES: &[&str] = &["name", "Name", "選手名", "氏名", "player", "Player"];
pub const PLAYER_ID_ALIASES: &[&str] = &["player_id", "playerId", "PlayerId"];
pub const RANK_ALIASES: &[&str] = &["rank", "Rank", "RANK"];
pub const TOTAL_ALIASES: &[&str] = &["total", "TOTAL", "Total"];
pub const OUT_ALIASES: &[&str] = &["out", "OUT", "Out"];
pub const IN_ALIASES: &[&str] = &["in", "IN", "In"];
pub const SCORE_ALIASES: &[&str] = &["score", "Score", "SCORE"];

/// One player's row for one round. Numeric columns are kept as the raw
/// source text; use the `*_strokes` accessors for arithmetic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundRecord {
    pub name: String,
    pub player_id: Option<String>,
    pub rank: String,
    pub holes: Vec<Option<String>>,
    pub out: Option<String>,
    #[serde(rename = "in")]
    pub in_: Option<String>,
    pub total: Option<String>,
    pub score: Option<String>,
}

/// Returns the first non-empty value among `aliases`, probed in order.
#[must_use]
pub fn probe<'a>(record: &'a FlatRecord, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|key| record.get(*key))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
}

fn probe_owned(record: &FlatRecord, aliases: &[&str]) -> Option<String> {
    probe(record, aliases).map(str::to_string)
}

/// Hole columns are accepted as `h5`, `H5` or `5`, in that order.
#[must_use]
pub fn probe_hole(record: &FlatRecord, hole: usize) -> Option<String> {
    let keys = [format!("h{hole}"), format!("H{hole}"), hole.to_string()];
    keys.iter()
        .filter_map(|key| record.get(key))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses a stroke count. Width variants are folded first; anything that is
/// not a positive integer counts as unknown.
#[must_use]
pub fn parse_strokes(raw: &str) -> Option<u32> {
    let folded: String = raw.nfkc().collect();
    match folded.trim().parse::<i64>() {
        Ok(v) if v > 0 => u32::try_from(v).ok(),
        _ => None,
    }
}

/// Parses a signed integer such as a pre-supplied relative score (`-3`, `+2`).
#[must_use]
pub fn parse_signed(raw: &str) -> Option<i32> {
    let folded: String = raw.nfkc().collect();
    folded.trim().trim_start_matches('+').parse::<i32>().ok()
}

impl RoundRecord {
    #[must_use]
    pub fn from_flat(record: &FlatRecord) -> Self {
        Self {
            name: probe_owned(record, NAME_ALIASES).unwrap_or_default(),
            player_id: probe_owned(record, PLAYER_ID_ALIASES),
            rank: probe_owned(record, RANK_ALIASES).unwrap_or_default(),
            holes: (1..=HOLES).map(|hole| probe_hole(record, hole)).collect(),
            out: probe_owned(record, OUT_ALIASES),
            in_: probe_owned(record, IN_ALIASES),
            total: probe_owned(record, TOTAL_ALIASES),
            score: probe_owned(record, SCORE_ALIASES),
        }
    }

    #[must_use]
    pub fn is_par(&self) -> bool {
        self.rank.trim() == PAR_RANK
    }

    #[must_use]
    pub fn total_strokes(&self) -> Option<u32> {
        self.total.as_deref().and_then(parse_strokes)
    }

    /// Raw value for hole `hole` (1-based).
    #[must_use]
    pub fn hole(&self, hole: usize) -> Option<&str> {
        hole.checked_sub(1)
            .and_then(|idx| self.holes.get(idx))
            .and_then(Option::as_deref)
    }

    #[must_use]
    pub fn hole_strokes(&self, hole: usize) -> Option<u32> {
        self.hole(hole).and_then(parse_strokes)
    }

    #[must_use]
    pub fn has_hole_scores(&self) -> bool {
        (1..=HOLES).any(|hole| self.hole_strokes(hole).is_some())
    }

    /// Sum of the known hole values in `first..=last`, `None` when none are known.
    #[must_use]
    pub fn sum_holes(&self, first: usize, last: usize) -> Option<u32> {
        let known: Vec<u32> = (first..=last).filter_map(|h| self.hole_strokes(h)).collect();
        if known.is_empty() {
            None
        } else {
            Some(known.iter().sum())
        }
    }
}

impl From<&FlatRecord> for RoundRecord {
    fn from(record: &FlatRecord) -> Self {
        Self::from_flat(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pairs: &[(&str, &str)]) -> FlatRecord {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn aliases_probe_in_priority_order() {
        let rec = RoundRecord::from_flat(&flat(&[
            ("Name", "Taro"),
            ("TOTAL", "71"),
            ("Total", "99"),
            ("H1", "4"),
            ("2", "5"),
        ]));
        assert_eq!(rec.name, "Taro");
        assert_eq!(rec.total.as_deref(), Some("71"));
        assert_eq!(rec.hole_strokes(1), Some(4));
        assert_eq!(rec.hole_strokes(2), Some(5));
        assert_eq!(rec.hole(3), None);
    }

    #[test]
    fn empty_alias_values_fall_through() {
        let rec = RoundRecord::from_flat(&flat(&[("total", " "), ("TOTAL", "70")]));
        assert_eq!(rec.total_strokes(), Some(70));
    }

    #[test]
    fn strokes_must_be_positive_integers() {
        assert_eq!(parse_strokes("72"), Some(72));
        assert_eq!(parse_strokes("７２"), Some(72));
        assert_eq!(parse_strokes("0"), None);
        assert_eq!(parse_strokes("-"), None);
        assert_eq!(parse_strokes("DNS"), None);
        assert_eq!(parse_signed("+3"), Some(3));
        assert_eq!(parse_signed("-2"), Some(-2));
        assert_eq!(parse_signed("E"), None);
    }

    #[test]
    fn nine_sums_skip_unknown_holes() {
        let rec = RoundRecord::from_flat(&flat(&[("h1", "4"), ("h2", "x"), ("h3", "3")]));
        assert_eq!(rec.sum_holes(1, 9), Some(7));
        assert_eq!(rec.sum_holes(10, 18), None);
    }
}
