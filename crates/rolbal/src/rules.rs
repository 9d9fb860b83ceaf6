//! Rule changes from the command line

use rolbal_core::{Rules, TiebreakKey};

const TIEBREAK_NAMES: &str =
    "Total, Punte, Bonus, Verskil, Player#, Coinflip, Skips draw to Jack";

/// Render the current rules, one setting per line, keys spelled the way
/// `rules set` takes them back.
pub fn rules_table(rules: &Rules) -> String {
    let mut out = String::new();
    out.push_str("=== Reels ===\n");
    out.push_str(&format!("{:<16} {}\n", "points_win", rules.points_win));
    out.push_str(&format!("{:<16} {}\n", "points_draw", rules.points_draw));
    out.push_str(&format!("{:<16} {}\n", "points_loss", rules.points_loss));
    out.push_str(&format!("{:<16} {}\n", "bonus_enabled", rules.bonus_enabled));
    out.push_str(&format!("{:<16} {}\n", "bonus_threshold", rules.bonus_threshold));
    out.push_str(&format!("{:<16} {}\n", "bonus_points", rules.bonus_points));
    out.push_str(&format!("{:<16} {}\n", "ends_per_game", rules.ends_per_game));
    out.push_str(&format!("{:<16} {}\n", "tiebreakers", rules.tiebreakers.join(", ")));
    out
}

/// Apply one `rules set <key> <value> ...` request.
///
/// Returns the `key = value` line for the audit trail; on any bad key or
/// value the rules are left untouched.
pub fn apply_rule_setting(rules: &mut Rules, key: &str, values: &[&str]) -> Result<String, String> {
    match key {
        "points_win" => rules.points_win = one_count(key, values)?,
        "points_draw" => rules.points_draw = one_count(key, values)?,
        "points_loss" => rules.points_loss = one_count(key, values)?,
        "bonus_points" => rules.bonus_points = one_count(key, values)?,
        "bonus_enabled" => rules.bonus_enabled = one_flag(key, values)?,
        "bonus_threshold" => rules.bonus_threshold = one_positive(key, values)?,
        "ends_per_game" => rules.ends_per_game = one_positive(key, values)?,
        "tiebreakers" => {
            if values.is_empty() || values.len() > 3 {
                return Err("tiebreakers takes one to three key names".to_string());
            }
            for name in values {
                if TiebreakKey::from_name(name).is_none() {
                    return Err(format!("unknown tiebreaker '{}' ({})", name, TIEBREAK_NAMES));
                }
            }
            rules.tiebreakers = values.iter().map(|s| s.to_string()).collect();
        }
        other => {
            return Err(format!(
                "unknown rule '{}' (points_win, points_draw, points_loss, bonus_enabled, \
                 bonus_threshold, bonus_points, ends_per_game, tiebreakers)",
                other
            ))
        }
    }
    Ok(format!("{} = {}", key, values.join(" ")))
}

fn one_value<'a>(key: &str, values: &[&'a str]) -> Result<&'a str, String> {
    match values {
        &[value] => Ok(value),
        _ => Err(format!("{} takes exactly one value", key)),
    }
}

fn one_count(key: &str, values: &[&str]) -> Result<u32, String> {
    let value = one_value(key, values)?;
    value
        .parse()
        .map_err(|_| format!("bad {} '{}'", key, value))
}

fn one_positive(key: &str, values: &[&str]) -> Result<u32, String> {
    match one_count(key, values)? {
        0 => Err(format!("{} must be positive", key)),
        n => Ok(n),
    }
}

fn one_flag(key: &str, values: &[&str]) -> Result<bool, String> {
    match one_value(key, values)? {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        other => Err(format!("bad {} '{}' (true or false)", key, other)),
    }
}
