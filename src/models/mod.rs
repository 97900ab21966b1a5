//! Data structures for a book cricket match: config, innings, deliveries, match state.

mod config;
mod innings;
mod outcome;
mod state;

pub use config::{
    GameMode, MatchConfig, Team, BALLS_PER_OVER, DEFAULT_OVERS, DEFAULT_WICKETS,
    MAX_OVERS,
};
pub use innings::InningsState;
pub use outcome::{resolve, resolve_digit, BallOutcome, OutcomeKind, PAGE_MAX, PAGE_MIN};
pub use state::{CoinFace, Margin, MatchError, MatchId, MatchPhase, MatchResult, MatchState, Toss};
