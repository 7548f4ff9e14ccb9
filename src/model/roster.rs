use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::score::match_key::match_key;

/// Player as listed in the CMS roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterPlayer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_id: String,
    pub affiliation: Option<String>,
}

/// Lookup from normalized name to roster entry.
#[derive(Clone, Debug, Default)]
pub struct PlayerRoster {
    by_key: HashMap<String, RosterEntry, RandomState>,
}

impl PlayerRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Later players with the same key replace earlier ones.
    #[must_use]
    pub fn from_players(players: &[RosterPlayer]) -> Self {
        let mut roster = Self::new();
        for player in players {
            roster.insert(player);
        }
        roster
    }

    pub fn insert(&mut self, player: &RosterPlayer) {
        let key = match_key(&player.name);
        if key.is_empty() {
            return;
        }
        self.by_key.insert(
            key,
            RosterEntry {
                player_id: player.id.clone(),
                affiliation: player
                    .affiliation
                    .as_ref()
                    .map(|a| a.trim().to_string())
                    .filter(|a| !a.is_empty()),
            },
        );
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&RosterEntry> {
        self.by_key.get(key)
    }

    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&RosterEntry> {
        self.lookup(&match_key(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
