//! Event snapshot and the string keys it is indexed by

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{AuditEntry, EndScores, GameScore, Pairing, Player, PlayerId, Rules};

/// Everything known about one tournament day.
///
/// Pairings are keyed `section:round`, scores `section:round:rink`. The
/// engine only ever reads a snapshot; persistence lives in the shell.
/// Ordered maps keep the saved file stable between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventState {
    pub event_name: String,
    pub sections: Vec<String>,
    pub rinks: u32,
    pub rounds: u32,
    pub players: BTreeMap<PlayerId, Player>,
    pub pairings: BTreeMap<String, Vec<Pairing>>,
    pub scores: BTreeMap<String, GameScore>,
    pub scores_per_end: BTreeMap<String, EndScores>,
    pub rules: Rules,
    /// `section:round` keys that may no longer be changed.
    pub locks: BTreeMap<String, bool>,
    pub audit: Vec<AuditEntry>,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            event_name: "SISHEN BORGDAG".to_string(),
            sections: vec!["SEKSIE 1".to_string(), "SEKSIE 2".to_string()],
            rinks: 7,
            rounds: 6,
            players: BTreeMap::new(),
            pairings: BTreeMap::new(),
            scores: BTreeMap::new(),
            scores_per_end: BTreeMap::new(),
            rules: Rules::default(),
            locks: BTreeMap::new(),
            audit: Vec::new(),
        }
    }
}

impl EventState {
    /// Player numbers of one section, ascending.
    pub fn players_in_section(&self, section: &str) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.section == section)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn player_name(&self, id: PlayerId) -> &str {
        self.players.get(&id).map(|p| p.name.as_str()).unwrap_or("?")
    }

    pub fn is_locked(&self, section: &str, round: u32) -> bool {
        self.locks
            .get(&pair_key(section, round))
            .copied()
            .unwrap_or(false)
    }
}

pub fn pair_key(section: &str, round: u32) -> String {
    format!("{}:{}", section, round)
}

pub fn score_key(section: &str, round: u32, rink: u32) -> String {
    format!("{}:{}:{}", section, round, rink)
}

/// Split a pairings key back into section and round.
///
/// Anything that is not exactly `section:round` with a numeric round
/// yields `None`; callers skip such keys rather than fail.
pub fn parse_pair_key(key: &str) -> Option<(&str, u32)> {
    let (section, round) = key.split_once(':')?;
    let round: u32 = round.parse().ok()?;
    Some((section, round))
}
