use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn history_of(entries: &[(PlayerId, &[PlayerId])]) -> OpponentHistory {
    let mut history: OpponentHistory = HashMap::new();
    for (a, opponents) in entries {
        for &b in *opponents {
            history.entry(*a).or_default().insert(b);
            history.entry(b).or_default().insert(*a);
        }
    }
    history
}

#[test]
fn test_random_pairs_cover_roster() {
    let ids = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut rng = StdRng::seed_from_u64(7);
    let pairs = random_pairs(&ids, &mut rng);

    assert_eq!(pairs.len(), 4);
    let mut seen: Vec<PlayerId> = pairs
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .flatten()
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, ids);
}

#[test]
fn test_random_pairs_odd_roster_one_bye() {
    let ids = [1, 2, 3, 4, 5];
    let mut rng = StdRng::seed_from_u64(1);
    let pairs = random_pairs(&ids, &mut rng);

    assert_eq!(pairs.len(), 3);
    let byes = pairs.iter().filter(|&&(_, b)| b.is_none()).count();
    assert_eq!(byes, 1);
    assert!(pairs.iter().all(|&(a, _)| a.is_some()));
}

#[test]
fn test_random_pairs_seed_reproducible() {
    let ids = [1, 2, 3, 4, 5, 6];
    let first = random_pairs(&ids, &mut StdRng::seed_from_u64(42));
    let second = random_pairs(&ids, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn test_strength_pairs_without_history() {
    let pairs = strength_pairs(&[1, 2, 3, 4], &HashMap::new());
    assert_eq!(pairs, vec![(Some(1), Some(2)), (Some(3), Some(4))]);
}

#[test]
fn test_strength_pairs_skip_past_opponent() {
    // 1 already met 2, so the leader takes 3 and 2 drops to 4.
    let history = history_of(&[(1, &[2])]);
    let pairs = strength_pairs(&[1, 2, 3, 4], &history);
    assert_eq!(pairs, vec![(Some(1), Some(3)), (Some(2), Some(4))]);
}

#[test]
fn test_strength_pairs_rematch_beats_bye() {
    let history = history_of(&[(1, &[2])]);
    let pairs = strength_pairs(&[1, 2], &history);
    assert_eq!(pairs, vec![(Some(1), Some(2))]);
}

#[test]
fn test_strength_pairs_fallback_keeps_order() {
    // Leader has met the whole field; the best-placed rematch wins.
    let history = history_of(&[(1, &[2, 3, 4])]);
    let pairs = strength_pairs(&[1, 2, 3, 4], &history);
    assert_eq!(pairs, vec![(Some(1), Some(2)), (Some(3), Some(4))]);
}

#[test]
fn test_strength_pairs_odd_roster() {
    let history = history_of(&[(1, &[2])]);
    let pairs = strength_pairs(&[1, 2, 3], &history);
    assert_eq!(pairs, vec![(Some(1), Some(3)), (Some(2), None)]);
}

#[test]
fn test_strength_pairs_empty() {
    assert!(strength_pairs(&[], &HashMap::new()).is_empty());
}
