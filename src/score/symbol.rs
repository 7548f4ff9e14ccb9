use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-hole result relative to par, as drawn on the hole-by-hole grid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreSymbol {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    /// Three or more over; carries the difference.
    Over(i32),
}

impl ScoreSymbol {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            n => Self::Over(n),
        }
    }

    /// Symbol for a hole, `None` unless both values are stroke counts.
    #[must_use]
    pub fn for_hole(strokes: Option<u32>, par: Option<u32>) -> Option<Self> {
        let (strokes, par) = (strokes?, par?);
        let diff = i64::from(strokes) - i64::from(par);
        i32::try_from(diff).ok().map(Self::from_diff)
    }

    #[must_use]
    pub fn is_under_par(self) -> bool {
        matches!(self, Self::EagleOrBetter | Self::Birdie)
    }

    /// Symbols with their legend captions, in legend order.
    #[must_use]
    pub fn legend() -> [(Self, &'static str); 5] {
        [
            (Self::EagleOrBetter, "EAGLE"),
            (Self::Birdie, "BIRDIE"),
            (Self::Par, "PAR"),
            (Self::Bogey, "BOGEY"),
            (Self::DoubleBogey, "DOUBLE BOGEY"),
        ]
    }
}

impl fmt::Display for ScoreSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSymbol::EagleOrBetter => write!(f, "◎"),
            ScoreSymbol::Birdie => write!(f, "○"),
            ScoreSymbol::Par => write!(f, "－"),
            ScoreSymbol::Bogey => write!(f, "△"),
            ScoreSymbol::DoubleBogey => write!(f, "□"),
            ScoreSymbol::Over(n) => write!(f, "+{n}"),
        }
    }
}

impl From<i32> for ScoreSymbol {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_differences_to_symbols() {
        assert_eq!(ScoreSymbol::from_diff(-3).to_string(), "◎");
        assert_eq!(ScoreSymbol::from_diff(-2).to_string(), "◎");
        assert_eq!(ScoreSymbol::from_diff(-1).to_string(), "○");
        assert_eq!(ScoreSymbol::from_diff(0).to_string(), "－");
        assert_eq!(ScoreSymbol::from_diff(1).to_string(), "△");
        assert_eq!(ScoreSymbol::from_diff(2).to_string(), "□");
        assert_eq!(ScoreSymbol::from_diff(3).to_string(), "+3");
        assert_eq!(ScoreSymbol::from_diff(5).to_string(), "+5");
    }

    #[test]
    fn missing_values_give_no_symbol() {
        assert_eq!(ScoreSymbol::for_hole(None, Some(4)), None);
        assert_eq!(ScoreSymbol::for_hole(Some(4), None), None);
        assert_eq!(ScoreSymbol::for_hole(Some(3), Some(5)), Some(ScoreSymbol::EagleOrBetter));
        assert_eq!(ScoreSymbol::for_hole(Some(4), Some(5)), Some(ScoreSymbol::Birdie));
    }

    #[test]
    fn legend_highlights_under_par() {
        let highlighted: Vec<String> = ScoreSymbol::legend()
            .iter()
            .filter(|(s, _)| s.is_under_par())
            .map(|(s, _)| s.to_string())
            .collect();
        assert_eq!(highlighted, vec!["◎", "○"]);
    }
}
