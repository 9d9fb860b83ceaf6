use super::*;
use crate::state::pair_key;
use crate::types::{GameScore, Pairing, Player, SideScore};

fn add_player(state: &mut EventState, id: PlayerId, section: &str) {
    state.players.insert(
        id,
        Player {
            name: format!("Speler {}", id),
            section: section.to_string(),
        },
    );
}

fn add_game(
    state: &mut EventState,
    section: &str,
    round: u32,
    rink: u32,
    a: PlayerId,
    b: PlayerId,
    vir_a: u32,
    vir_b: u32,
) {
    state
        .pairings
        .entry(pair_key(section, round))
        .or_default()
        .push(Pairing::new(rink, Some(a), Some(b)));
    state.scores.insert(
        score_key(section, round, rink),
        GameScore {
            a: SideScore { vir: vir_a, teen: vir_b },
            b: SideScore { vir: vir_b, teen: vir_a },
        },
    );
}

fn row_for(rows: &[StandingRow], id: PlayerId) -> &StandingRow {
    rows.iter().find(|r| r.player_id == id).unwrap()
}

#[test]
fn test_win_and_loss_credited() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    add_game(&mut state, "SEKSIE 1", 1, 4, 1, 2, 21, 15);

    let rules = Rules::default();
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_id, 1);
    let winner = row_for(&rows, 1);
    assert_eq!((winner.verskil, winner.punte, winner.bonus), (6, 2, 0));
    let loser = row_for(&rows, 2);
    assert_eq!((loser.verskil, loser.punte, loser.bonus), (-6, 0, 0));
}

#[test]
fn test_draw_points() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    add_game(&mut state, "SEKSIE 1", 1, 4, 1, 2, 17, 17);

    let rules = Rules::default();
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);
    assert_eq!(row_for(&rows, 1).punte, 1);
    assert_eq!(row_for(&rows, 2).punte, 1);
}

#[test]
fn test_bonus_follows_absolute_margin() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    add_game(&mut state, "SEKSIE 1", 1, 4, 1, 2, 25, 10);

    let mut rules = Rules::default();
    rules.bonus_enabled = true;
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);

    let winner = row_for(&rows, 1);
    assert_eq!((winner.punte, winner.bonus), (2, 1));
    // The losing side is fifteen down, which also clears the threshold.
    let loser = row_for(&rows, 2);
    assert_eq!((loser.punte, loser.bonus), (0, 1));
}

#[test]
fn test_round_result_margin_under_threshold() {
    let mut rules = Rules::default();
    rules.bonus_enabled = true;
    assert_eq!(round_result(18, 12, &rules), (6, 2, 0));
    assert_eq!(round_result(22, 12, &rules), (10, 2, 1));
    assert_eq!(round_result(0, 0, &rules), (0, 1, 0));
}

#[test]
fn test_unplayed_players_keep_zero_rows() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    add_player(&mut state, 3, "SEKSIE 1");
    add_game(&mut state, "SEKSIE 1", 1, 4, 1, 2, 21, 15);

    let rules = Rules::default();
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);
    assert_eq!(rows.len(), 3);
    let idle = row_for(&rows, 3);
    assert_eq!((idle.verskil, idle.punte, idle.bonus), (0, 0, 0));
}

#[test]
fn test_finals_game_filed_under_other_section() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 10, "SEKSIE 2");

    // Finals pairing lives under both section keys; the score was entered
    // under SEKSIE 2 only.
    let pairing = Pairing::new(4, Some(1), Some(10));
    state.pairings.insert(pair_key("SEKSIE 1", 5), vec![pairing]);
    state.pairings.insert(pair_key("SEKSIE 2", 5), vec![pairing]);
    state.scores.insert(
        score_key("SEKSIE 2", 5, 4),
        GameScore {
            a: SideScore { vir: 20, teen: 12 },
            b: SideScore { vir: 12, teen: 20 },
        },
    );

    let rules = Rules::default();
    let home = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);
    let visitor = row_for(&home, 1);
    assert_eq!((visitor.verskil, visitor.punte), (8, 2));
    // The SEKSIE 2 player is credited in their own table, not here.
    assert!(home.iter().all(|r| r.player_id != 10));

    let away = compute_standings(&state, "SEKSIE 2", &rules, &rules.tiebreakers);
    assert_eq!((row_for(&away, 10).verskil, row_for(&away, 10).punte), (-8, 0));
}

#[test]
fn test_malformed_keys_and_unplayable_rows_skipped() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");

    state.pairings.insert("garbage".to_string(), vec![Pairing::new(4, Some(1), Some(2))]);
    state.pairings.insert("SEKSIE 1:x".to_string(), vec![Pairing::new(4, Some(1), Some(2))]);
    state.pairings.insert(
        pair_key("SEKSIE 1", 1),
        vec![
            Pairing::new(0, Some(1), Some(2)),
            Pairing::new(3, Some(1), None),
        ],
    );
    state.scores.insert(
        score_key("SEKSIE 1", 1, 3),
        GameScore {
            a: SideScore { vir: 21, teen: 0 },
            b: SideScore { vir: 0, teen: 21 },
        },
    );

    let rules = Rules::default();
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);
    for row in &rows {
        assert_eq!((row.verskil, row.punte, row.bonus), (0, 0, 0));
    }
}

#[test]
fn test_rounds_past_the_configured_total_ignored() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    state.rounds = 2;
    add_game(&mut state, "SEKSIE 1", 3, 4, 1, 2, 21, 15);

    let rules = Rules::default();
    let rows = compute_standings(&state, "SEKSIE 1", &rules, &rules.tiebreakers);
    assert_eq!(row_for(&rows, 1).punte, 0);
}

#[test]
fn test_combined_standings_rank_across_sections() {
    let mut state = EventState::default();
    add_player(&mut state, 1, "SEKSIE 1");
    add_player(&mut state, 2, "SEKSIE 1");
    add_player(&mut state, 10, "SEKSIE 2");
    add_player(&mut state, 11, "SEKSIE 2");
    add_game(&mut state, "SEKSIE 1", 1, 4, 1, 2, 18, 15);
    add_game(&mut state, "SEKSIE 2", 1, 4, 10, 11, 25, 3);

    let rules = Rules::default();
    let rows = combined_standings(&state, &rules, &rules.tiebreakers);
    assert_eq!(rows.len(), 4);
    // Both section winners are on two points; verskil puts 10 on top.
    assert_eq!(rows[0].player_id, 10);
    assert_eq!(rows[1].player_id, 1);
}
