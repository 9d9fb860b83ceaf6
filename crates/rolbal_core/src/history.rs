//! Who has already played whom

use std::collections::{HashMap, HashSet};

use crate::types::{Pairing, PlayerId};

/// Opponents met so far, symmetric by construction.
pub type OpponentHistory = HashMap<PlayerId, HashSet<PlayerId>>;

/// Fold prior rounds' pairings into an opponent-history map.
///
/// Byes and unassigned sides carry no history. An empty slice gives an
/// empty map, which downstream pairing treats as "anyone goes".
pub fn build_history(prior_rounds: &[Vec<Pairing>]) -> OpponentHistory {
    let mut history: OpponentHistory = HashMap::new();
    for round in prior_rounds {
        for pairing in round {
            if let (Some(a), Some(b)) = (pairing.a_id, pairing.b_id) {
                history.entry(a).or_default().insert(b);
                history.entry(b).or_default().insert(a);
            }
        }
    }
    history
}

/// True when `a` and `b` have met in any recorded round.
pub fn have_met(history: &OpponentHistory, a: PlayerId, b: PlayerId) -> bool {
    history.get(&a).map_or(false, |seen| seen.contains(&b))
}
