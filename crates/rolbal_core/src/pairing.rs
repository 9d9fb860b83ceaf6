//! Opponent pairing policies

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::history::{have_met, OpponentHistory};
use crate::types::{DrawPair, PlayerId};

/// Round-one draw: shuffle the roster and pair neighbours.
///
/// Sides carry no meaning. An odd roster leaves the last player with a bye.
pub fn random_pairs(player_ids: &[PlayerId], rng: &mut impl Rng) -> Vec<DrawPair> {
    let mut ids = player_ids.to_vec();
    ids.shuffle(rng);
    ids.chunks(2)
        .map(|pair| (Some(pair[0]), pair.get(1).copied()))
        .collect()
}

/// Pair the leaders: walk `ordered_ids` best to worst and give each open
/// player the best-placed opponent they have not met yet.
///
/// When only past opponents remain, the best-placed of those is taken
/// anyway; a rematch beats an avoidable bye. The walk is greedy and never
/// unwinds an earlier pick, so later seats can lose their last fresh
/// opponent to an earlier one.
pub fn strength_pairs(ordered_ids: &[PlayerId], history: &OpponentHistory) -> Vec<DrawPair> {
    let mut used: HashSet<PlayerId> = HashSet::new();
    let mut pairs = Vec::with_capacity((ordered_ids.len() + 1) / 2);

    for &a in ordered_ids {
        if used.contains(&a) {
            continue;
        }
        used.insert(a);

        let partner = ordered_ids
            .iter()
            .copied()
            .find(|&b| !used.contains(&b) && !have_met(history, a, b))
            .or_else(|| ordered_ids.iter().copied().find(|&b| !used.contains(&b)));

        if let Some(b) = partner {
            used.insert(b);
        }
        pairs.push((Some(a), partner));
    }
    pairs
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
