//! The event file on disk

use rolbal_core::{
    pair_key, score_key, AuditEntry, EndScore, EndScores, EventState, GameScore, SideScore,
};
use std::path::{Path, PathBuf};

/// One JSON file holding one tournament day.
///
/// Commands mutate `state` in memory, log what they did, then `save`.
pub struct Store {
    pub path: PathBuf,
    pub state: EventState,
}

impl Store {
    /// Open an event file, seeding a stock event if none exists yet.
    pub fn open(path: &Path) -> Result<Self, String> {
        if path.exists() {
            let state = load_state(path)?;
            Ok(Self {
                path: path.to_path_buf(),
                state,
            })
        } else {
            let store = Self {
                path: path.to_path_buf(),
                state: EventState::default(),
            };
            store.save()?;
            Ok(store)
        }
    }

    /// Write the event back, pretty-printed.
    pub fn save(&self) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.state)
            .map_err(|e| format!("Failed to serialize event: {}", e))?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }

    /// Append one audit entry; persisted on the next `save`.
    pub fn log(&mut self, action: &str, detail: String) {
        self.state.audit.push(AuditEntry {
            ts: unix_now(),
            action: action.to_string(),
            detail,
        });
    }

    pub fn set_lock(&mut self, section: &str, round: u32, locked: bool) {
        self.state.locks.insert(pair_key(section, round), locked);
    }

    /// Save end-by-end rows for one rink and refresh the final score from
    /// their column totals. Rows are cut or padded with blank ends to the
    /// rules' ends per game. Returns A's totals.
    pub fn save_per_end(
        &mut self,
        section: &str,
        round: u32,
        rink: u32,
        mut ends: Vec<EndScore>,
    ) -> (u32, u32) {
        let n = self.state.rules.ends_per_game;
        ends.resize(n as usize, EndScore::default());
        let per_end = EndScores { n, ends };
        let (vir_a, vir_b) = per_end.totals();

        let key = score_key(section, round, rink);
        self.state.scores_per_end.insert(key.clone(), per_end);
        self.state.scores.insert(
            key,
            GameScore {
                a: SideScore { vir: vir_a, teen: vir_b },
                b: SideScore { vir: vir_b, teen: vir_a },
            },
        );
        (vir_a, vir_b)
    }
}

/// Load an event file.
pub fn load_state(path: &Path) -> Result<EventState, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Unix seconds without an external clock dependency.
fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolbal_core::Player;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("rolbal-store-{}-{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_open_seeds_default_event() {
        let path = scratch_path("seed");
        let _ = std::fs::remove_file(&path);

        let store = Store::open(&path).unwrap();
        assert_eq!(store.state.event_name, "SISHEN BORGDAG");
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_state_round_trips() {
        let path = scratch_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut store = Store::open(&path).unwrap();
        store.state.players.insert(
            3,
            Player {
                name: "Jan".to_string(),
                section: "SEKSIE 1".to_string(),
            },
        );
        store.set_lock("SEKSIE 1", 2, true);
        store.log("player_add", "3 Jan".to_string());
        store.save().unwrap();

        let reloaded = Store::open(&path).unwrap();
        assert_eq!(reloaded.state.players.get(&3).unwrap().name, "Jan");
        assert!(reloaded.state.is_locked("SEKSIE 1", 2));
        assert!(!reloaded.state.is_locked("SEKSIE 1", 3));
        assert_eq!(reloaded.state.audit.len(), 1);
        assert_eq!(reloaded.state.audit[0].action, "player_add");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = scratch_path("badjson");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_state(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_per_end_rows_rewrite_the_final_score() {
        let path = scratch_path("perend");
        let _ = std::fs::remove_file(&path);

        let mut store = Store::open(&path).unwrap();
        let ends = vec![
            EndScore { a: 2, b: 1 },
            EndScore { a: 0, b: 3 },
            EndScore { a: 5, b: 0 },
        ];
        let totals = store.save_per_end("SEKSIE 1", 2, 4, ends);
        assert_eq!(totals, (7, 4));

        let key = score_key("SEKSIE 1", 2, 4);
        let per_end = store.state.scores_per_end.get(&key).unwrap();
        // Padded out to a full game of blank ends.
        assert_eq!(per_end.n, 18);
        assert_eq!(per_end.ends.len(), 18);
        assert_eq!(per_end.ends[2], EndScore { a: 5, b: 0 });
        assert_eq!(per_end.ends[3], EndScore::default());

        let score = store.state.scores.get(&key).unwrap();
        assert_eq!(score.a, SideScore { vir: 7, teen: 4 });
        assert_eq!(score.b, SideScore { vir: 4, teen: 7 });

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_per_end_rows_cut_to_the_configured_ends() {
        let path = scratch_path("perend-cut");
        let _ = std::fs::remove_file(&path);

        let mut store = Store::open(&path).unwrap();
        store.state.rules.ends_per_game = 2;
        let ends = vec![
            EndScore { a: 1, b: 0 },
            EndScore { a: 0, b: 2 },
            EndScore { a: 9, b: 9 },
        ];
        let totals = store.save_per_end("SEKSIE 1", 1, 1, ends);
        // The third end falls off the sheet.
        assert_eq!(totals, (1, 2));
        let per_end = store
            .state
            .scores_per_end
            .get(&score_key("SEKSIE 1", 1, 1))
            .unwrap();
        assert_eq!(per_end.ends.len(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
