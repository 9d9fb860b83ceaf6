//! Tournament engine for a bowls day: opponent pairing, rink assignment,
//! standings and tiebreak ordering. Pure computation over an event
//! snapshot; persistence and presentation live with the caller.

pub mod generate;
pub mod history;
pub mod pairing;
pub mod rinks;
pub mod schedule;
pub mod standings;
pub mod state;
pub mod tiebreak;
pub mod types;

// Re-export the whole engine surface
pub use generate::*;
pub use history::*;
pub use pairing::*;
pub use rinks::*;
pub use schedule::*;
pub use standings::*;
pub use state::*;
pub use tiebreak::*;
pub use types::*;
