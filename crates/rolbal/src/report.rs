//! Tables and files for the day's paperwork

use rolbal_core::{pair_key, AuditEntry, EventState, PlayerId, StandingRow};
use std::path::Path;

fn side_name(state: &EventState, id: Option<PlayerId>) -> String {
    match id {
        Some(id) => format!("{} {}", id, state.player_name(id)),
        None => "(bye)".to_string(),
    }
}

/// Render one round's draw for a section.
pub fn schedule_table(state: &EventState, section: &str, round: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} / Ronde {} ===\n", section, round));
    out.push_str(&format!("{:<6} {:<26} {:<26}\n", "Rink", "A", "B"));
    out.push_str(&"-".repeat(58));
    out.push('\n');
    match state.pairings.get(&pair_key(section, round)) {
        Some(pairings) if !pairings.is_empty() => {
            for p in pairings {
                out.push_str(&format!(
                    "{:<6} {:<26} {:<26}\n",
                    p.rink,
                    side_name(state, p.a_id),
                    side_name(state, p.b_id)
                ));
            }
        }
        _ => {
            out.push_str("(no pairings saved)\n");
        }
    }
    out
}

pub fn print_schedule(state: &EventState, section: &str, round: u32) {
    println!("{}", schedule_table(state, section, round));
}

/// Render a standings table; `show_section` adds the Sek column for the
/// combined leaderboard.
pub fn standings_table(title: &str, rows: &[StandingRow], show_section: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", title));
    if show_section {
        out.push_str(&format!(
            "{:<4} {:<4} {:<24} {:<10} {:>8} {:>6} {:>6} {:>6}\n",
            "Pos", "#", "Speler", "Sek", "Verskil", "Punte", "Bonus", "Total"
        ));
        out.push_str(&"-".repeat(76));
    } else {
        out.push_str(&format!(
            "{:<4} {:<4} {:<24} {:>8} {:>6} {:>6} {:>6}\n",
            "Pos", "#", "Speler", "Verskil", "Punte", "Bonus", "Total"
        ));
        out.push_str(&"-".repeat(65));
    }
    out.push('\n');
    for (i, r) in rows.iter().enumerate() {
        if show_section {
            out.push_str(&format!(
                "{:<4} {:<4} {:<24} {:<10} {:>8} {:>6} {:>6} {:>6}\n",
                i + 1,
                r.player_id,
                r.name,
                r.section,
                r.verskil,
                r.punte,
                r.bonus,
                r.total()
            ));
        } else {
            out.push_str(&format!(
                "{:<4} {:<4} {:<24} {:>8} {:>6} {:>6} {:>6}\n",
                i + 1,
                r.player_id,
                r.name,
                r.verskil,
                r.punte,
                r.bonus,
                r.total()
            ));
        }
    }
    out
}

pub fn print_standings(title: &str, rows: &[StandingRow], show_section: bool) {
    println!("{}", standings_table(title, rows, show_section));
}

/// Standings as comma-separated rows, headers matching the table labels.
pub fn standings_csv(rows: &[StandingRow]) -> String {
    let mut out = String::new();
    out.push_str("Posisie,#,Speler,Sek,Verskil,Punte,Bonus,Total\n");
    for (i, r) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            i + 1,
            r.player_id,
            r.name,
            r.section,
            r.verskil,
            r.punte,
            r.bonus,
            r.total()
        ));
    }
    out
}

/// The roster as a table, optionally narrowed to one section.
pub fn roster_table(state: &EventState, section: Option<&str>) -> String {
    let mut out = String::new();
    match section {
        Some(section) => out.push_str(&format!("=== Spelers / {} ===\n", section)),
        None => out.push_str("=== Spelers ===\n"),
    }
    out.push_str(&format!("{:<6} {:<26} {}\n", "#", "Speler", "Sek"));
    out.push_str(&"-".repeat(44));
    out.push('\n');
    let mut shown = 0;
    for (id, p) in &state.players {
        if section.map_or(true, |s| p.section == s) {
            out.push_str(&format!("{:<6} {:<26} {}\n", id, p.name, p.section));
            shown += 1;
        }
    }
    if shown == 0 {
        out.push_str("(no players)\n");
    }
    out
}

/// The roster in the same shape `player import` reads back, narrowed to
/// one section when a filter is given.
pub fn players_csv(state: &EventState, section: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("Speler nr,Speler,Sek\n");
    for (id, p) in &state.players {
        if section.map_or(true, |s| p.section == s) {
            out.push_str(&format!("{},{},{}\n", id, p.name, p.section));
        }
    }
    out
}

/// The CSV rows are plain comma joins, so a comma inside a name would
/// split into an extra column on re-import. Rejected at entry instead of
/// quoted on the way out.
pub fn player_name_ok(name: &str) -> bool {
    !name.is_empty() && !name.contains(',')
}

pub fn write_csv(path: &Path, csv: &str) -> Result<(), String> {
    std::fs::write(path, csv).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Parse a `Speler nr,Speler,Sek` roster file.
///
/// Returns the good rows plus one warning per line that could not be
/// used. A first line whose number column does not parse is taken as the
/// header and skipped without a warning.
pub fn parse_players_csv(text: &str) -> (Vec<(PlayerId, String, String)>, Vec<String>) {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() != 3 {
            warnings.push(format!(
                "line {}: expected 3 columns, got {}",
                lineno + 1,
                fields.len()
            ));
            continue;
        }
        match fields[0].parse::<PlayerId>() {
            Ok(id) if id > 0 => rows.push((id, fields[1].to_string(), fields[2].to_string())),
            Ok(_) => warnings.push(format!("line {}: player number must be positive", lineno + 1)),
            Err(_) if lineno == 0 => {} // header line
            Err(_) => warnings.push(format!(
                "line {}: bad player number '{}'",
                lineno + 1,
                fields[0]
            )),
        }
    }
    (rows, warnings)
}

/// Newest-first audit listing.
pub fn audit_table(entries: &[AuditEntry], limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12} {:<16} {}\n", "Tyd", "Aksie", "Detail"));
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for entry in entries.iter().rev().take(limit) {
        out.push_str(&format!(
            "{:<12} {:<16} {}\n",
            entry.ts, entry.action, entry.detail
        ));
    }
    out
}
