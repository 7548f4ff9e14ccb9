use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::record::parse_signed;

/// Strokes relative to par. Displays as `E`, `+N` or `-N`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelativeScore(pub i32);

impl RelativeScore {
    #[must_use]
    pub fn between(strokes: u32, reference: u32) -> Self {
        let diff = i64::from(strokes) - i64::from(reference);
        Self(i32::try_from(diff).unwrap_or(if diff < 0 { i32::MIN } else { i32::MAX }))
    }
}

impl fmt::Display for RelativeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "E"),
            n if n > 0 => write!(f, "+{n}"),
            n => write!(f, "{n}"),
        }
    }
}

/// Formats a score column supplied by the source. Numbers get the relative
/// notation, other text is kept, nothing becomes `-`.
#[must_use]
pub fn format_supplied_score(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => "-".to_string(),
        Some(s) => parse_signed(s).map_or_else(|| s.to_string(), |n| RelativeScore(n).to_string()),
    }
}
