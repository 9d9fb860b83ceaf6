//! Day runner for rolbal
//!
//! This crate wraps the pure engine in everything a tournament desk needs:
//! - A JSON event file holding players, pairings, scores, locks and audit
//! - A TOML config for seeding a fresh event
//! - Printable tables and CSV export for the paperwork
//!
//! # Usage
//!
//! ```bash
//! # Start a day and load the roster
//! cargo run -p rolbal -- init --config event.toml
//! cargo run -p rolbal -- player import spelers.csv
//!
//! # Draw round one and capture a score
//! cargo run -p rolbal -- generate "SEKSIE 1" 1 random
//! cargo run -p rolbal -- score "SEKSIE 1" 1 4 21 15
//! ```

mod config;
mod report;
mod rules;
mod store;

pub use config::*;
pub use report::*;
pub use rules::*;
pub use store::*;
