//! Deterministic standings ordering

use crate::types::{PlayerId, StandingRow};

/// One ranking criterion. Every criterion maps a row to an integer where
/// lower means better placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiebreakKey {
    Total,
    Punte,
    Bonus,
    Verskil,
    PlayerNumber,
    Coinflip,
    SkipsDrawToJack,
}

impl TiebreakKey {
    /// Parse an operator-facing key name. Unknown names give `None`; the
    /// sorter drops them so stored rule lists survive renames.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Total" => Some(Self::Total),
            "Punte" => Some(Self::Punte),
            "Bonus" => Some(Self::Bonus),
            "Verskil" => Some(Self::Verskil),
            "Player#" => Some(Self::PlayerNumber),
            "Coinflip" => Some(Self::Coinflip),
            "Skips draw to Jack" => Some(Self::SkipsDrawToJack),
            _ => None,
        }
    }

    fn component(self, row: &StandingRow) -> i64 {
        match self {
            Self::Total => -(row.punte + row.bonus),
            Self::Punte => -row.punte,
            Self::Bonus => -row.bonus,
            Self::Verskil => -row.verskil,
            Self::PlayerNumber => row.player_id as i64,
            Self::Coinflip => coinflip(row.player_id),
            // Reserved for a physical draw to the jack; always a tie here.
            Self::SkipsDrawToJack => 0,
        }
    }
}

/// Fixed linear-congruential hash of the player number, so a coin-flip
/// placing comes out the same on every recomputation.
fn coinflip(id: PlayerId) -> i64 {
    (id as i64 * 9301 + 49297) % 233280
}

/// Sort rows best first by the named keys, in order.
///
/// The player number always serves as the forced last key, so the result
/// is a strict total order no matter which keys were picked (an empty or
/// fully unrecognized list degrades to number order).
pub fn sort_standings(mut rows: Vec<StandingRow>, tiebreakers: &[String]) -> Vec<StandingRow> {
    let keys: Vec<TiebreakKey> = tiebreakers
        .iter()
        .filter_map(|name| TiebreakKey::from_name(name))
        .collect();
    rows.sort_by_cached_key(|row| {
        let mut parts: Vec<i64> = keys.iter().map(|k| k.component(row)).collect();
        parts.push(row.player_id as i64);
        parts
    });
    rows
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
