//! Round generation, one mode per way of running a day

use rand::Rng;
use std::collections::HashMap;

use crate::history::{build_history, OpponentHistory};
use crate::pairing::{random_pairs, strength_pairs};
use crate::rinks::{assign_rinks, last_rink_map};
use crate::schedule::round_robin_round;
use crate::standings::{combined_standings, compute_standings};
use crate::state::{pair_key, EventState};
use crate::types::{Pairing, PlayerId, StandingRow};

/// How the opponents of one round are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Shuffled draw, the usual round one.
    Random,
    /// Pair the leaders off the current standings.
    Strength,
    /// Follow the precomputed circle schedule.
    RoundRobin,
    /// Cross-section finals: one field, every section's key.
    Finals,
}

impl RoundMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "strength" => Some(Self::Strength),
            "robin" => Some(Self::RoundRobin),
            "finals" => Some(Self::Finals),
            _ => None,
        }
    }
}

/// A generated round ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    /// Sections whose `section:round` key must receive the pairings.
    /// More than one only for finals, and then every copy must stay
    /// identical.
    pub sections: Vec<String>,
    pub pairings: Vec<Pairing>,
}

/// Plan one round for `section` under the given mode.
///
/// The snapshot is read only; the caller persists the plan (and reports
/// any rink 0 in it as a rink shortage).
pub fn generate_round(
    state: &EventState,
    section: &str,
    round: u32,
    mode: RoundMode,
    rng: &mut impl Rng,
) -> RoundPlan {
    match mode {
        RoundMode::Random => {
            let roster = state.players_in_section(section);
            let pairs = random_pairs(&roster, rng);
            let last = last_rink_map(state, section, round);
            RoundPlan {
                sections: vec![section.to_string()],
                pairings: assign_rinks(state.rinks, &pairs, &last),
            }
        }
        RoundMode::Strength => {
            let rows = compute_standings(state, section, &state.rules, &state.rules.tiebreakers);
            let history = section_history(state, section, round);
            let pairs = strength_pairs(&standings_order(&rows), &history);
            let last = last_rink_map(state, section, round);
            RoundPlan {
                sections: vec![section.to_string()],
                pairings: assign_rinks(state.rinks, &pairs, &last),
            }
        }
        RoundMode::RoundRobin => {
            let roster = state.players_in_section(section);
            let pairs = round_robin_round(&roster, round);
            let last = last_rink_map(state, section, round);
            RoundPlan {
                sections: vec![section.to_string()],
                pairings: assign_rinks(state.rinks, &pairs, &last),
            }
        }
        RoundMode::Finals => {
            let rows = combined_standings(state, &state.rules, &state.rules.tiebreakers);
            let history = event_history(state, round);

            // Last rinks across the whole green, later sections winning
            // collisions like the section order says.
            let mut last = HashMap::new();
            for section in &state.sections {
                last.extend(last_rink_map(state, section, round));
            }

            let pairs = strength_pairs(&standings_order(&rows), &history);
            RoundPlan {
                sections: state.sections.clone(),
                pairings: assign_rinks(state.rinks, &pairs, &last),
            }
        }
    }
}

fn standings_order(rows: &[StandingRow]) -> Vec<PlayerId> {
    rows.iter().map(|r| r.player_id).collect()
}

/// Opponents met in this section before `round`.
fn section_history(state: &EventState, section: &str, round: u32) -> OpponentHistory {
    let mut prior = Vec::new();
    for r in 1..round {
        if let Some(pairings) = state.pairings.get(&pair_key(section, r)) {
            prior.push(pairings.clone());
        }
    }
    build_history(&prior)
}

/// Opponents met anywhere in the event before `round`.
fn event_history(state: &EventState, round: u32) -> OpponentHistory {
    let mut prior = Vec::new();
    for section in &state.sections {
        for r in 1..round {
            if let Some(pairings) = state.pairings.get(&pair_key(section, r)) {
                prior.push(pairings.clone());
            }
        }
    }
    build_history(&prior)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod generate_tests;
