use serde::{Deserialize, Serialize};

use crate::model::record::RoundRecord;

/// Tournament metadata handed over by the record source.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentMeta {
    pub tournament_id: String,
    #[serde(default)]
    pub title: String,
    /// Treat the event as two rounds even when only one round file exists.
    #[serde(default)]
    pub is_two_round_format: bool,
}

/// Everything the ranking engine needs for one tournament.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentRounds {
    pub meta: TournamentMeta,
    #[serde(default)]
    pub round1: Vec<RoundRecord>,
    #[serde(default)]
    pub round2: Vec<RoundRecord>,
    #[serde(default)]
    pub par: Option<RoundRecord>,
}

impl TournamentRounds {
    #[must_use]
    pub fn new(meta: TournamentMeta) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_round1(mut self, rows: Vec<RoundRecord>) -> Self {
        self.round1 = rows;
        self
    }

    #[must_use]
    pub fn with_round2(mut self, rows: Vec<RoundRecord>) -> Self {
        self.round2 = rows;
        self
    }

    #[must_use]
    pub fn with_par(mut self, par: Option<RoundRecord>) -> Self {
        self.par = par;
        self
    }

    /// The explicit par record, else the first `PAR` row of round 2, then round 1.
    #[must_use]
    pub fn par_reference(&self) -> Option<&RoundRecord> {
        self.par.as_ref().or_else(|| {
            self.round2
                .iter()
                .chain(self.round1.iter())
                .find(|r| r.is_par())
        })
    }

    #[must_use]
    pub fn has_both_rounds(&self) -> bool {
        competitors(&self.round1).next().is_some() && competitors(&self.round2).next().is_some()
    }
}

/// Rows that are players, not the par reference.
pub fn competitors(rows: &[RoundRecord]) -> impl Iterator<Item = &RoundRecord> {
    rows.iter().filter(|r| !r.is_par())
}
