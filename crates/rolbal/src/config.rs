//! Day setup from a TOML file

use rolbal_core::EventState;
use serde::Deserialize;
use std::path::Path;

/// Optional overrides for a fresh event; anything missing keeps the stock
/// default. Read once by `init`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub event_name: Option<String>,
    pub sections: Option<Vec<String>>,
    pub rinks: Option<u32>,
    pub rounds: Option<u32>,
    pub rules: RulesConfig,
}

/// The `[rules]` table, per-field like the event fields above.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub points_win: Option<u32>,
    pub points_draw: Option<u32>,
    pub points_loss: Option<u32>,
    pub bonus_enabled: Option<bool>,
    pub bonus_threshold: Option<u32>,
    pub bonus_points: Option<u32>,
    pub ends_per_game: Option<u32>,
    pub tiebreakers: Option<Vec<String>>,
}

impl EventConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Fold the configured values into a fresh default event.
    pub fn into_state(self) -> EventState {
        let mut state = EventState::default();
        if let Some(event_name) = self.event_name {
            state.event_name = event_name;
        }
        if let Some(sections) = self.sections {
            state.sections = sections;
        }
        if let Some(rinks) = self.rinks {
            state.rinks = rinks;
        }
        if let Some(rounds) = self.rounds {
            state.rounds = rounds;
        }
        if let Some(points_win) = self.rules.points_win {
            state.rules.points_win = points_win;
        }
        if let Some(points_draw) = self.rules.points_draw {
            state.rules.points_draw = points_draw;
        }
        if let Some(points_loss) = self.rules.points_loss {
            state.rules.points_loss = points_loss;
        }
        if let Some(bonus_enabled) = self.rules.bonus_enabled {
            state.rules.bonus_enabled = bonus_enabled;
        }
        if let Some(bonus_threshold) = self.rules.bonus_threshold {
            state.rules.bonus_threshold = bonus_threshold;
        }
        if let Some(bonus_points) = self.rules.bonus_points {
            state.rules.bonus_points = bonus_points;
        }
        if let Some(ends_per_game) = self.rules.ends_per_game {
            state.rules.ends_per_game = ends_per_game;
        }
        if let Some(tiebreakers) = self.rules.tiebreakers {
            state.rules.tiebreakers = tiebreakers;
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_the_stock_event() {
        let config: EventConfig = toml::from_str("").unwrap();
        let state = config.into_state();
        assert_eq!(state.event_name, "SISHEN BORGDAG");
        assert_eq!(state.rinks, 7);
        assert_eq!(state.rounds, 6);
        assert_eq!(state.sections, vec!["SEKSIE 1", "SEKSIE 2"]);
    }

    #[test]
    fn test_partial_config_overrides_only_what_it_names() {
        let config: EventConfig = toml::from_str(
            r#"
event_name = "KLUB KAMPIOENSKAP"
rinks = 5
"#,
        )
        .unwrap();
        let state = config.into_state();
        assert_eq!(state.event_name, "KLUB KAMPIOENSKAP");
        assert_eq!(state.rinks, 5);
        assert_eq!(state.rounds, 6);
    }

    #[test]
    fn test_full_config() {
        let config: EventConfig = toml::from_str(
            r#"
event_name = "PROEF"
sections = ["A", "B", "C"]
rinks = 12
rounds = 4
"#,
        )
        .unwrap();
        let state = config.into_state();
        assert_eq!(state.sections.len(), 3);
        assert_eq!(state.rinks, 12);
        assert_eq!(state.rounds, 4);
    }

    #[test]
    fn test_rules_table_overrides_rule_defaults() {
        let config: EventConfig = toml::from_str(
            r#"
rinks = 5

[rules]
points_win = 3
bonus_enabled = true
bonus_threshold = 12
tiebreakers = ["Punte", "Coinflip", "Player#"]
"#,
        )
        .unwrap();
        let state = config.into_state();
        assert_eq!(state.rinks, 5);
        assert_eq!(state.rules.points_win, 3);
        assert!(state.rules.bonus_enabled);
        assert_eq!(state.rules.bonus_threshold, 12);
        assert_eq!(state.rules.tiebreakers, vec!["Punte", "Coinflip", "Player#"]);
        // Untouched rule fields keep the stock values.
        assert_eq!(state.rules.points_draw, 1);
        assert_eq!(state.rules.ends_per_game, 18);
    }

    #[test]
    fn test_config_without_rules_keeps_stock_rules() {
        let config: EventConfig = toml::from_str("rounds = 4").unwrap();
        let state = config.into_state();
        assert_eq!(state.rules, rolbal_core::Rules::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(toml::from_str::<EventConfig>("rinks = \"seven\"").is_err());
    }
}
