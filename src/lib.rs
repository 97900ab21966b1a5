//! Book cricket: a flipped page decides each ball. Library with models and the match engine.

pub mod logic;
pub mod models;

pub use logic::{
    format_rate, overs_display, page_ending_in, projected_score, required_run_rate, run_rate,
    uniform_page, BallContext, Bias, ComputerOpponent, Difficulty, MatchEngine, PageStrategy,
    RandomSource, RngSource, Scoreboard, UniformPages,
};
pub use models::{
    resolve, resolve_digit, BallOutcome, CoinFace, GameMode, InningsState, Margin, MatchConfig,
    MatchError, MatchId, MatchPhase, MatchResult, MatchState, OutcomeKind, Team, Toss,
    BALLS_PER_OVER, DEFAULT_OVERS, DEFAULT_WICKETS, MAX_OVERS, PAGE_MAX, PAGE_MIN,
};
