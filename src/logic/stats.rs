//! Derived read-only queries: rates, projections, overs, and the scoreboard snapshot.

use crate::models::{
    BallOutcome, InningsState, MatchPhase, MatchResult, MatchState, Team, BALLS_PER_OVER,
};
use serde::Serialize;

/// Runs per over. 0 when no balls have been bowled.
pub fn run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    f64::from(runs) * f64::from(BALLS_PER_OVER) / f64::from(balls)
}

/// Rate with two decimals, e.g. "7.50".
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

/// Current rate extrapolated across the full innings (floored). 0 before the first ball.
pub fn projected_score(runs: u32, balls: u32, total_balls: u32) -> u32 {
    if balls == 0 {
        return 0;
    }
    (u64::from(runs) * u64::from(total_balls) / u64::from(balls)) as u32
}

/// Completed overs and balls, e.g. 9 balls -> "1.3".
pub fn overs_display(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Runs per over needed from the balls left. Treats zero balls left as one.
pub fn required_run_rate(remaining_runs: u32, remaining_balls: u32) -> f64 {
    f64::from(remaining_runs) * f64::from(BALLS_PER_OVER) / f64::from(remaining_balls.max(1))
}

/// Everything a view needs to draw the current score, in display-ready form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scoreboard {
    pub phase: MatchPhase,
    pub batting: Option<Team>,
    pub batting_name: Option<String>,
    pub runs: u32,
    pub wickets: u32,
    pub balls: u32,
    pub overs: String,
    pub run_rate: String,
    pub projected_score: u32,
    pub balls_remaining: u32,
    pub target: Option<u32>,
    pub runs_required: Option<u32>,
    pub required_run_rate: Option<String>,
    pub this_over: Vec<String>,
    pub last_outcome: Option<BallOutcome>,
    pub result: Option<MatchResult>,
}

impl Scoreboard {
    pub fn from_state(state: &MatchState) -> Self {
        let empty = InningsState::new();
        let innings = state.active_innings().unwrap_or(&empty);
        let total_balls = state.config().total_balls();
        let balls_remaining = total_balls.saturating_sub(innings.balls());
        let target = state.target();
        let runs_required = match state.phase() {
            MatchPhase::SecondInnings | MatchPhase::Complete => {
                target.map(|t| t.saturating_sub(innings.runs()))
            }
            _ => target,
        };
        let required = runs_required.map(|r| {
            let remaining_balls = match state.phase() {
                MatchPhase::InningsBreak => total_balls,
                _ => balls_remaining,
            };
            format_rate(required_run_rate(r, remaining_balls))
        });
        let batting = state.batting_team();
        Self {
            phase: state.phase(),
            batting,
            batting_name: batting.map(|t| state.config().team_name(t).to_string()),
            runs: innings.runs(),
            wickets: innings.wickets(),
            balls: innings.balls(),
            overs: overs_display(innings.balls()),
            run_rate: format_rate(run_rate(innings.runs(), innings.balls())),
            projected_score: projected_score(innings.runs(), innings.balls(), total_balls),
            balls_remaining,
            target,
            runs_required,
            required_run_rate: required,
            this_over: innings.current_over().iter().map(BallOutcome::symbol).collect(),
            last_outcome: state.last_outcome(),
            result: state.result().cloned(),
        }
    }
}
