//! Shared data model for the tournament engine

use serde::{Deserialize, Serialize};

/// Player numbers are event-wide, not per section.
pub type PlayerId = u32;

/// An opponent pair before rink assignment; `None` marks a bye side.
pub type DrawPair = (Option<PlayerId>, Option<PlayerId>);

/// Ends played per game unless the rules say otherwise.
pub const ENDS_PER_GAME: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub section: String,
}

/// One scheduled game (or bye) on a rink.
///
/// `rink == 0` means no rink could be assigned; a side of `None` is a bye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub rink: u32,
    pub a_id: Option<PlayerId>,
    pub b_id: Option<PlayerId>,
}

impl Pairing {
    pub fn new(rink: u32, a_id: Option<PlayerId>, b_id: Option<PlayerId>) -> Self {
        Self { rink, a_id, b_id }
    }

    /// True when two real players meet on a real rink.
    pub fn is_playable(&self) -> bool {
        self.rink != 0 && self.a_id.is_some() && self.b_id.is_some()
    }
}

/// Shots for (`vir`) and against (`teen`) one side of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideScore {
    pub vir: u32,
    pub teen: u32,
}

/// Final score of one game, both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub a: SideScore,
    pub b: SideScore,
}

/// Shots taken on a single end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndScore {
    pub a: u32,
    pub b: u32,
}

/// End-by-end capture for one game; `n` is the planned number of ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndScores {
    pub n: u32,
    pub ends: Vec<EndScore>,
}

impl EndScores {
    /// Column totals, A's perspective first.
    pub fn totals(&self) -> (u32, u32) {
        let a: u32 = self.ends.iter().map(|e| e.a).sum();
        let b: u32 = self.ends.iter().map(|e| e.b).sum();
        (a, b)
    }
}

/// Scoring and ranking rules for the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub points_win: u32,
    pub points_draw: u32,
    pub points_loss: u32,
    pub bonus_enabled: bool,
    /// Minimum winning margin for a bonus point. Must stay positive.
    pub bonus_threshold: u32,
    pub bonus_points: u32,
    pub ends_per_game: u32,
    /// Ordered tiebreak key names; unknown names are kept but ignored.
    pub tiebreakers: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            points_win: 2,
            points_draw: 1,
            points_loss: 0,
            bonus_enabled: false,
            bonus_threshold: 10,
            bonus_points: 1,
            ends_per_game: ENDS_PER_GAME,
            tiebreakers: vec![
                "Total".to_string(),
                "Verskil".to_string(),
                "Player#".to_string(),
            ],
        }
    }
}

/// One line of a standings table. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub section: String,
    /// Cumulative shot difference (vir minus teen).
    pub verskil: i64,
    /// Cumulative win/draw/loss points.
    pub punte: i64,
    pub bonus: i64,
}

impl StandingRow {
    pub fn zeroed(player_id: PlayerId, name: &str, section: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            section: section.to_string(),
            verskil: 0,
            punte: 0,
            bonus: 0,
        }
    }

    pub fn total(&self) -> i64 {
        self.punte + self.bonus
    }
}

/// One entry of the append-only audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unix seconds.
    pub ts: u64,
    pub action: String,
    pub detail: String,
}
