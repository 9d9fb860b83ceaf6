//! Rolbal CLI
//!
//! Run a bowls tournament day from the command line: roster, draws,
//! scores, standings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rolbal::{
    apply_rule_setting, audit_table, parse_players_csv, player_name_ok, players_csv,
    print_schedule, print_standings, roster_table, rules_table, standings_csv, write_csv,
    EventConfig, Store,
};
use rolbal_core::{
    combined_standings, compute_standings, generate_round, pair_key, score_key, EndScore,
    EventState, GameScore, Player, RoundMode, SideScore,
};
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_FILE: &str = "event.json";

fn print_usage() {
    println!("Rolbal Day Runner");
    println!();
    println!("Usage:");
    println!("  rolbal <command> [arguments] [--file F]");
    println!();
    println!("Commands:");
    println!("  init [--config C]                         Start a fresh event file");
    println!("  player add <nr> <name> <section>          Add or update a player");
    println!("  player remove <nr> [--force]              Remove a player");
    println!("  player list [section] [--csv F]           Show (or export) the roster");
    println!("  player import <csv>                       Load players from a CSV file");
    println!("  generate <section> <round> <mode> [--seed N]");
    println!("                                            Draw a round; mode is random,");
    println!("                                            strength, robin or finals");
    println!("  score <section> <round> <rink> <vir> <teen> [<vir_b> <teen_b>]");
    println!("                                            Save a final score (B mirrors A");
    println!("                                            when its columns are left out)");
    println!("  ends <section> <round> <rink> <a:b> ...   Save end-by-end points");
    println!("  standings [section] [--csv F]             Rank a section, or the whole day");
    println!("  rules show                                Show the scoring rules");
    println!("  rules set <key> <value> ...               Change one rule; keys are");
    println!("                                            points_win/draw/loss, bonus_enabled,");
    println!("                                            bonus_threshold, bonus_points,");
    println!("                                            ends_per_game, tiebreakers");
    println!("  schedule <section> <round>                Show a saved draw");
    println!("  lock <section> <round>                    Freeze a round");
    println!("  unlock <section> <round>                  Reopen a round");
    println!("  audit [--limit N]                         Show the latest logged actions");
    println!();
    println!("The event lives in {} unless --file points elsewhere.", DEFAULT_FILE);
    println!();
    println!("Examples:");
    println!("  rolbal player add 12 \"Jan Malan\" \"SEKSIE 1\"");
    println!("  rolbal generate \"SEKSIE 1\" 1 random --seed 7");
    println!("  rolbal score \"SEKSIE 1\" 1 4 21 15");
    println!("  rolbal ends \"SEKSIE 1\" 1 4 2:1 0:3 5:0");
    println!("  rolbal standings --csv uitslae.csv");
    println!("  rolbal rules set tiebreakers Total Verskil \"Player#\"");
}

fn open_store(path: &Path) -> Option<Store> {
    match Store::open(path) {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// A positive number from the command line, or a printed error.
fn parse_positive(text: &str, what: &str) -> Option<u32> {
    match text.parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => {
            eprintln!("Error: bad {} '{}'", what, text);
            None
        }
    }
}

/// A number that may be zero (shots often are).
fn parse_count(text: &str, what: &str) -> Option<u32> {
    match text.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: bad {} '{}'", what, text);
            None
        }
    }
}

/// True when the section is one the event knows; prints the error if not.
fn check_section(state: &EventState, section: &str) -> bool {
    if state.sections.iter().any(|s| s == section) {
        true
    } else {
        eprintln!(
            "Error: unknown section '{}' (configured: {})",
            section,
            state.sections.join(", ")
        );
        false
    }
}

fn run_init(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut config: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if file.exists() {
        eprintln!(
            "Error: {} already exists; pick another --file or remove it first",
            file.display()
        );
        return;
    }

    let state = match config {
        Some(path) => match EventConfig::load(&path) {
            Ok(cfg) => cfg.into_state(),
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        None => EventState::default(),
    };

    let mut store = Store {
        path: file,
        state,
    };
    store.log("init", store.state.event_name.clone());
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!(
        "Created '{}' at {} ({}; {} rinks, {} rounds)",
        store.state.event_name,
        store.path.display(),
        store.state.sections.join(", "),
        store.state.rinks,
        store.state.rounds
    );
}

fn run_player(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: player needs add, remove, list or import");
        return;
    }
    match args[0].as_str() {
        "add" => player_add(&args[1..]),
        "remove" => player_remove(&args[1..]),
        "list" => player_list(&args[1..]),
        "import" => player_import(&args[1..]),
        other => eprintln!("Error: unknown player command '{}'", other),
    }
}

fn player_add(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 3 {
        eprintln!("Usage: rolbal player add <nr> <name> <section>");
        return;
    }

    let id = match parse_positive(positional[0], "player number") {
        Some(id) => id,
        None => return,
    };
    let name = positional[1].trim();
    if !player_name_ok(name) {
        eprintln!("Error: player name must be non-empty and free of commas");
        return;
    }
    let section = positional[2];

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }

    let existing = store.state.players.insert(
        id,
        Player {
            name: name.to_string(),
            section: section.to_string(),
        },
    );
    store.log("player_add", format!("{} {} ({})", id, name, section));
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    let verb = if existing.is_some() { "Updated" } else { "Added" };
    println!("{} {} - {} ({})", verb, id, name, section);
}

fn player_remove(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut force = false;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--force" => force = true,
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 1 {
        eprintln!("Usage: rolbal player remove <nr> [--force]");
        return;
    }
    let id = match parse_positive(positional[0], "player number") {
        Some(id) => id,
        None => return,
    };

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !store.state.players.contains_key(&id) {
        eprintln!("Error: no player {}", id);
        return;
    }

    // A player woven into saved draws cannot quietly disappear.
    let mut appearances: Vec<(String, u32)> = Vec::new();
    for (key, pairings) in &store.state.pairings {
        for p in pairings {
            if p.a_id == Some(id) || p.b_id == Some(id) {
                appearances.push((key.clone(), p.rink));
            }
        }
    }
    if !appearances.is_empty() && !force {
        eprintln!(
            "Error: player {} appears in {} pairing(s); repeat with --force to clear them:",
            id,
            appearances.len()
        );
        for (key, rink) in &appearances {
            eprintln!("  {} rink {}", key, rink);
        }
        return;
    }

    if force {
        for pairings in store.state.pairings.values_mut() {
            for p in pairings.iter_mut() {
                if p.a_id == Some(id) {
                    p.a_id = None;
                }
                if p.b_id == Some(id) {
                    p.b_id = None;
                }
            }
        }
    }
    store.state.players.remove(&id);
    let action = if appearances.is_empty() {
        "player_remove"
    } else {
        "player_remove_forced"
    };
    store.log(action, format!("{} ({} pairings cleared)", id, appearances.len()));
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!("Removed player {}", id);
}

fn player_list(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut csv: Option<PathBuf> = None;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--csv" => {
                if i + 1 < args.len() {
                    csv = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() > 1 {
        eprintln!("Usage: rolbal player list [section] [--csv F]");
        return;
    }

    let store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    let section = positional.first().copied();
    if let Some(section) = section {
        if !check_section(&store.state, section) {
            return;
        }
    }
    print!("{}", roster_table(&store.state, section));

    if let Some(path) = csv {
        match write_csv(&path, &players_csv(&store.state, section)) {
            Ok(()) => println!("Roster written to {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn player_import(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 1 {
        eprintln!("Usage: rolbal player import <csv>");
        return;
    }

    let text = match std::fs::read_to_string(positional[0]) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", positional[0], e);
            return;
        }
    };
    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };

    let (rows, mut warnings) = parse_players_csv(&text);
    let mut imported = 0;
    for (id, name, section) in rows {
        if !store.state.sections.iter().any(|s| s == &section) {
            warnings.push(format!("player {}: unknown section '{}'", id, section));
            continue;
        }
        if !player_name_ok(&name) {
            warnings.push(format!("player {}: empty name", id));
            continue;
        }
        store.state.players.insert(id, Player { name, section });
        imported += 1;
    }
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }
    store.log("player_import", format!("{} from {}", imported, positional[0]));
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!("Imported {} players ({} rows skipped)", imported, warnings.len());
}

fn run_generate(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut seed: Option<u64> = None;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 3 {
        eprintln!("Usage: rolbal generate <section> <round> <mode> [--seed N]");
        return;
    }

    let section = positional[0];
    let round = match parse_positive(positional[1], "round") {
        Some(round) => round,
        None => return,
    };
    let mode = match RoundMode::from_name(positional[2]) {
        Some(mode) => mode,
        None => {
            eprintln!(
                "Error: unknown mode '{}' (random, strength, robin or finals)",
                positional[2]
            );
            return;
        }
    };

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }

    // Finals land under every section's key, so every one must be open.
    let targets: Vec<String> = if mode == RoundMode::Finals {
        store.state.sections.clone()
    } else {
        vec![section.to_string()]
    };
    for target in &targets {
        if store.state.is_locked(target, round) {
            eprintln!("Error: {} round {} is locked (unlock it first)", target, round);
            return;
        }
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let plan = generate_round(&store.state, section, round, mode, &mut rng);

    let unplaced = plan.pairings.iter().filter(|p| p.rink == 0).count();
    if unplaced > 0 {
        eprintln!(
            "Warning: {} pair(s) did not get a rink; increase the rink count",
            unplaced
        );
    }

    for target in &plan.sections {
        store
            .state
            .pairings
            .insert(pair_key(target, round), plan.pairings.clone());
    }
    store.log(
        "generate",
        format!("{} round {} for {}", positional[2], round, plan.sections.join(", ")),
    );
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }

    if mode == RoundMode::Random {
        println!("Seed: {}", seed);
    }
    print_schedule(&store.state, section, round);
    if plan.sections.len() > 1 {
        println!("Same draw saved for: {}", plan.sections.join(", "));
    }
}

fn run_score(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 5 && positional.len() != 7 {
        eprintln!("Usage: rolbal score <section> <round> <rink> <vir> <teen> [<vir_b> <teen_b>]");
        return;
    }

    let section = positional[0];
    let round = match parse_positive(positional[1], "round") {
        Some(round) => round,
        None => return,
    };
    let rink = match parse_positive(positional[2], "rink") {
        Some(rink) => rink,
        None => return,
    };
    let vir_a = match parse_count(positional[3], "vir") {
        Some(n) => n,
        None => return,
    };
    let teen_a = match parse_count(positional[4], "teen") {
        Some(n) => n,
        None => return,
    };
    // Without B's columns the sheet is mirrored: what A scored, B conceded.
    let (vir_b, teen_b) = if positional.len() == 7 {
        let vir_b = match parse_count(positional[5], "vir") {
            Some(n) => n,
            None => return,
        };
        let teen_b = match parse_count(positional[6], "teen") {
            Some(n) => n,
            None => return,
        };
        (vir_b, teen_b)
    } else {
        (teen_a, vir_a)
    };

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }
    if store.state.is_locked(section, round) {
        eprintln!("Error: {} round {} is locked (unlock it first)", section, round);
        return;
    }

    let has_pairing = store
        .state
        .pairings
        .get(&pair_key(section, round))
        .map_or(false, |pairings| pairings.iter().any(|p| p.rink == rink));
    if !has_pairing {
        eprintln!(
            "Warning: no saved pairing on rink {} for {} round {}; score saved anyway",
            rink, section, round
        );
    }

    store.state.scores.insert(
        score_key(section, round, rink),
        GameScore {
            a: SideScore { vir: vir_a, teen: teen_a },
            b: SideScore { vir: vir_b, teen: teen_b },
        },
    );
    store.log(
        "score",
        format!(
            "{}:{}:{} A {}-{} B {}-{}",
            section, round, rink, vir_a, teen_a, vir_b, teen_b
        ),
    );
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!(
        "Saved {} round {} rink {}: A {}-{} / B {}-{}",
        section, round, rink, vir_a, teen_a, vir_b, teen_b
    );
}

fn run_ends(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() < 4 {
        eprintln!("Usage: rolbal ends <section> <round> <rink> <a:b> ...");
        return;
    }

    let section = positional[0];
    let round = match parse_positive(positional[1], "round") {
        Some(round) => round,
        None => return,
    };
    let rink = match parse_positive(positional[2], "rink") {
        Some(rink) => rink,
        None => return,
    };

    let mut ends = Vec::new();
    for token in &positional[3..] {
        let parsed = token
            .split_once(':')
            .and_then(|(a, b)| Some(EndScore {
                a: a.parse().ok()?,
                b: b.parse().ok()?,
            }));
        match parsed {
            Some(end) => ends.push(end),
            None => {
                eprintln!("Error: bad end '{}' (expected a:b, e.g. 2:1)", token);
                return;
            }
        }
    }

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }
    if store.state.is_locked(section, round) {
        eprintln!("Error: {} round {} is locked (unlock it first)", section, round);
        return;
    }

    let entered = ends.len();
    let (vir_a, vir_b) = store.save_per_end(section, round, rink, ends);
    store.log(
        "ends",
        format!("{}:{}:{} ({} ends entered)", section, round, rink, entered),
    );
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!(
        "Totals from ends: A Vir={} Teen={} / B Vir={} Teen={}",
        vir_a, vir_b, vir_b, vir_a
    );
}

fn run_standings(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut csv: Option<PathBuf> = None;
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--csv" => {
                if i + 1 < args.len() {
                    csv = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() > 1 {
        eprintln!("Usage: rolbal standings [section] [--csv F]");
        return;
    }

    let store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    let rules = &store.state.rules;

    let export = match positional.first() {
        Some(&section) => {
            if !check_section(&store.state, section) {
                return;
            }
            let rows = compute_standings(&store.state, section, rules, &rules.tiebreakers);
            print_standings(section, &rows, false);
            rows
        }
        None => {
            for section in &store.state.sections {
                let rows = compute_standings(&store.state, section, rules, &rules.tiebreakers);
                print_standings(section, &rows, false);
            }
            let combined = combined_standings(&store.state, rules, &rules.tiebreakers);
            print_standings("Combined", &combined, true);
            combined
        }
    };

    if let Some(path) = csv {
        match write_csv(&path, &standings_csv(&export)) {
            Ok(()) => println!("Standings written to {}", path.display()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn run_rules(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: rules needs show or set");
        return;
    }
    match args[0].as_str() {
        "show" => rules_show(&args[1..]),
        "set" => rules_set(&args[1..]),
        other => eprintln!("Error: unknown rules command '{}'", other),
    }
}

fn rules_show(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    let store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    print!("{}", rules_table(&store.state.rules));
}

fn rules_set(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() < 2 {
        eprintln!("Usage: rolbal rules set <key> <value> ...");
        return;
    }

    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    // Rule changes take effect on the next standings computation, so no
    // round lock stands in their way.
    match apply_rule_setting(&mut store.state.rules, positional[0], &positional[1..]) {
        Ok(detail) => {
            store.log("rules_set", detail.clone());
            if let Err(e) = store.save() {
                eprintln!("Error: {}", e);
                return;
            }
            println!("Set {}", detail);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn run_schedule(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    if positional.len() != 2 {
        eprintln!("Usage: rolbal schedule <section> <round>");
        return;
    }

    let section = positional[0];
    let round = match parse_positive(positional[1], "round") {
        Some(round) => round,
        None => return,
    };
    let store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }
    print_schedule(&store.state, section, round);
}

fn run_lock(args: &[String], locked: bool) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut positional: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            other => positional.push(other),
        }
        i += 1;
    }
    let verb = if locked { "lock" } else { "unlock" };
    if positional.len() != 2 {
        eprintln!("Usage: rolbal {} <section> <round>", verb);
        return;
    }

    let section = positional[0];
    let round = match parse_positive(positional[1], "round") {
        Some(round) => round,
        None => return,
    };
    let mut store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if !check_section(&store.state, section) {
        return;
    }
    if store.state.is_locked(section, round) == locked {
        println!(
            "{} round {} is already {}ed",
            section, round, verb
        );
        return;
    }

    store.set_lock(section, round, locked);
    let action = if locked { "lock_round" } else { "unlock_round" };
    store.log(action, format!("{}:{}", section, round));
    if let Err(e) = store.save() {
        eprintln!("Error: {}", e);
        return;
    }
    println!("{}ed {} round {}", if locked { "Lock" } else { "Unlock" }, section, round);
}

fn run_audit(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_FILE);
    let mut limit: usize = 20;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--limit" | "-n" => {
                if i + 1 < args.len() {
                    limit = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let store = match open_store(&file) {
        Some(store) => store,
        None => return,
    };
    if store.state.audit.is_empty() {
        println!("No actions logged yet.");
        return;
    }
    print!("{}", audit_table(&store.state.audit, limit));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "init" => run_init(&args[2..]),
        "player" => run_player(&args[2..]),
        "generate" => run_generate(&args[2..]),
        "score" => run_score(&args[2..]),
        "ends" => run_ends(&args[2..]),
        "standings" => run_standings(&args[2..]),
        "rules" => run_rules(&args[2..]),
        "schedule" => run_schedule(&args[2..]),
        "lock" => run_lock(&args[2..], true),
        "unlock" => run_lock(&args[2..], false),
        "audit" => run_audit(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
