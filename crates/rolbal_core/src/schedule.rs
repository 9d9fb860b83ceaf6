//! Full round-robin schedules by the circle method

use crate::types::{DrawPair, PlayerId};

/// Build the complete round-robin schedule for one section.
///
/// An odd roster gets a placeholder seat, so every competitor sits out
/// exactly once. The circle is rotated around a fixed first seat; for an
/// even working list of n seats this yields n-1 rounds of n/2 pairs, with
/// every unordered pair of real players meeting exactly once.
pub fn round_robin_rounds(player_ids: &[PlayerId]) -> Vec<Vec<DrawPair>> {
    let mut seats: Vec<Option<PlayerId>> = player_ids.iter().copied().map(Some).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }
    let n = seats.len();
    if n == 0 {
        return Vec::new();
    }
    let half = n / 2;
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let mut pairs = Vec::with_capacity(half);
        for i in 0..half {
            pairs.push((seats[i], seats[n - 1 - i]));
        }
        rounds.push(pairs);
        // Fixed first seat; the last seat moves up to second place.
        seats[1..].rotate_right(1);
    }
    rounds
}

/// Pairs for one 1-based round of the schedule; rounds past the end of the
/// schedule (or round 0) have no pairs.
pub fn round_robin_round(player_ids: &[PlayerId], round: u32) -> Vec<DrawPair> {
    if round == 0 {
        return Vec::new();
    }
    round_robin_rounds(player_ids)
        .into_iter()
        .nth(round as usize - 1)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
