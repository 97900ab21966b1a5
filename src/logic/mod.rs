//! Match business logic: engine, phases, page strategies, and derived stats.

mod engine;
mod play;
mod random;
mod result;
mod setup;
mod stats;
mod strategy;

pub use engine::MatchEngine;
pub use random::{RandomSource, RngSource};
pub use stats::{
    format_rate, overs_display, projected_score, required_run_rate, run_rate, Scoreboard,
};
pub use strategy::{
    page_ending_in, uniform_page, BallContext, Bias, ComputerOpponent, Difficulty, PageStrategy,
    UniformPages,
};
