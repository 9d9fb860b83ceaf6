//! Scores into standings

use std::collections::HashMap;

use crate::state::{parse_pair_key, score_key, EventState};
use crate::tiebreak::sort_standings;
use crate::types::{PlayerId, Rules, StandingRow};

/// Deltas one side earns from one game: (verskil, punte, bonus).
///
/// The bonus tests the absolute margin, so a side beaten past the
/// threshold collects it as well.
pub fn round_result(vir: u32, teen: u32, rules: &Rules) -> (i64, i64, i64) {
    let diff = vir as i64 - teen as i64;
    let punte = if diff > 0 {
        rules.points_win
    } else if diff == 0 {
        rules.points_draw
    } else {
        rules.points_loss
    };
    let mut bonus = 0;
    if rules.bonus_enabled && diff.unsigned_abs() >= rules.bonus_threshold as u64 {
        bonus = rules.bonus_points as i64;
    }
    (diff, punte as i64, bonus)
}

/// Standings for one section, read from the whole event.
///
/// Pairing keys of every section are scanned round by round, because a
/// finals round stores its games under one key per participating section;
/// a player is credited wherever their game was filed, but only into their
/// home section's table. Keys that do not parse as `section:round` are
/// skipped. Players without a single scored game keep a zero row.
pub fn compute_standings(
    state: &EventState,
    section: &str,
    rules: &Rules,
    tiebreakers: &[String],
) -> Vec<StandingRow> {
    let mut rows: HashMap<PlayerId, StandingRow> = HashMap::new();
    for (&pid, p) in &state.players {
        if p.section == section {
            rows.insert(pid, StandingRow::zeroed(pid, &p.name, section));
        }
    }

    for round in 1..=state.rounds {
        for (key, pairings) in &state.pairings {
            let (key_section, key_round) = match parse_pair_key(key) {
                Some(parsed) => parsed,
                None => continue,
            };
            if key_round != round {
                continue;
            }
            for pairing in pairings {
                if !pairing.is_playable() {
                    continue;
                }
                let score = match state.scores.get(&score_key(key_section, round, pairing.rink)) {
                    Some(score) => score,
                    None => continue,
                };
                if let Some(row) = pairing.a_id.and_then(|id| rows.get_mut(&id)) {
                    let (dv, dp, db) = round_result(score.a.vir, score.a.teen, rules);
                    row.verskil += dv;
                    row.punte += dp;
                    row.bonus += db;
                }
                if let Some(row) = pairing.b_id.and_then(|id| rows.get_mut(&id)) {
                    let (dv, dp, db) = round_result(score.b.vir, score.b.teen, rules);
                    row.verskil += dv;
                    row.punte += dp;
                    row.bonus += db;
                }
            }
        }
    }

    sort_standings(rows.into_values().collect(), tiebreakers)
}

/// Every section's standings thrown together and ranked as one field.
pub fn combined_standings(
    state: &EventState,
    rules: &Rules,
    tiebreakers: &[String],
) -> Vec<StandingRow> {
    let mut rows = Vec::new();
    for section in &state.sections {
        rows.extend(compute_standings(state, section, rules, tiebreakers));
    }
    sort_standings(rows, tiebreakers)
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
