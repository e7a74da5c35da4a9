//! Local match runner used to exercise the bots offline.

pub mod board_gen;
mod config;
mod error;
mod game;
mod tournament;

pub use config::{MAX_BOARD_SIZE, MAX_CAPACITY, SimConfig};
pub use error::MatchError;
pub use game::{Match, MatchResult, MoveEvent, Standing};
pub use tournament::{BotTotals, TournamentSummary, play_match, run_tournament};
