//! Rink assignment with centre-court preference

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::state::{pair_key, EventState};
use crate::types::{DrawPair, Pairing, PlayerId};

/// Rinks from the middle of the green outward.
///
/// The centre rink is best watched and best kept, so the strongest game
/// goes there. Seven rinks prefer 4, 3, 5, 2, 6, 1, 7.
pub fn preferred_rink_order(total_rinks: u32) -> Vec<u32> {
    if total_rinks == 0 {
        return Vec::new();
    }
    let center = (total_rinks + 1) / 2;
    let mut order = vec![center];
    let mut offset = 1;
    while (order.len() as u32) < total_rinks {
        if center > offset {
            order.push(center - offset);
        }
        if center + offset <= total_rinks {
            order.push(center + offset);
        }
        offset += 1;
    }
    order
}

/// Where everyone played in the round before `round`; empty for round one.
/// Unassigned games (rink 0) leave no entry.
pub fn last_rink_map(state: &EventState, section: &str, round: u32) -> HashMap<PlayerId, u32> {
    let mut last = HashMap::new();
    if round <= 1 {
        return last;
    }
    let key = pair_key(section, round - 1);
    for pairing in state.pairings.get(&key).into_iter().flatten() {
        if pairing.rink == 0 {
            continue;
        }
        if let Some(a) = pairing.a_id {
            last.insert(a, pairing.rink);
        }
        if let Some(b) = pairing.b_id {
            last.insert(b, pairing.rink);
        }
    }
    last
}

/// Put pairs on rinks, strongest pair first.
///
/// Each pair takes the first free rink in preference order that neither
/// player stood on last round; failing that, the lowest free rink not
/// played last round; failing that, the lowest free rink even if it is a
/// repeat. With no rinks left the pair keeps rink 0, which callers report
/// as a shortage. Pairs that are byes on both sides are dropped.
pub fn assign_rinks(
    total_rinks: u32,
    pairs: &[DrawPair],
    last_rink: &HashMap<PlayerId, u32>,
) -> Vec<Pairing> {
    let order = preferred_rink_order(total_rinks);
    let mut available: BTreeSet<u32> = (1..=total_rinks).collect();
    let mut out = Vec::with_capacity(pairs.len());

    for &(a, b) in pairs {
        if a.is_none() && b.is_none() {
            continue;
        }
        let mut forbidden: HashSet<u32> = HashSet::new();
        if let Some(&r) = a.and_then(|id| last_rink.get(&id)) {
            forbidden.insert(r);
        }
        if let Some(&r) = b.and_then(|id| last_rink.get(&id)) {
            forbidden.insert(r);
        }

        let rink = order
            .iter()
            .copied()
            .find(|r| available.contains(r) && !forbidden.contains(r))
            .or_else(|| available.iter().copied().find(|r| !forbidden.contains(r)))
            .or_else(|| available.iter().next().copied())
            .unwrap_or(0);

        available.remove(&rink);
        out.push(Pairing::new(rink, a, b));
    }
    out
}

#[cfg(test)]
#[path = "rinks_tests.rs"]
mod rinks_tests;
