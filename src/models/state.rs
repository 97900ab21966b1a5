//! MatchState, MatchPhase, toss and result types.

use crate::models::config::{MatchConfig, Team};
use crate::models::innings::InningsState;
use crate::models::outcome::BallOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during match operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// Bad match setup parameters.
    InvalidConfig(String),
    /// Operation invoked out of sequence (or with no match configured).
    InvalidPhase,
    /// A ball was requested after the active innings ended.
    InningsComplete,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidConfig(reason) => write!(f, "Invalid match config: {}", reason),
            MatchError::InvalidPhase => write!(f, "Invalid phase for this action"),
            MatchError::InningsComplete => write!(f, "The innings is already complete"),
        }
    }
}

impl std::error::Error for MatchError {}

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Current phase of the match. Drives which innings is active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    AwaitingToss,
    FirstInnings,
    /// First innings frozen; waiting for the second side to start.
    InningsBreak,
    SecondInnings,
    /// Result computed.
    Complete,
}

/// Side of the coin.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFace {
    Heads,
    Tails,
}

/// Team A's call, the coin as it landed, and who won.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Toss {
    pub call: CoinFace,
    pub coin: CoinFace,
    pub winner: Team,
}

/// How the match was decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum Margin {
    /// First-innings total defended by this many runs.
    Runs(u32),
    /// Target chased with this many wickets in hand.
    Wickets(u32),
    Tie,
}

/// Final result. Only present once the match is complete.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// None for a tie.
    pub winner: Option<Team>,
    pub margin: Margin,
    pub tied: bool,
    pub description: String,
}

impl MatchResult {
    pub fn tie() -> Self {
        Self {
            winner: None,
            margin: Margin::Tie,
            tied: true,
            description: "Match tied".to_string(),
        }
    }

    pub fn win(winner: Team, winner_name: &str, margin: Margin) -> Self {
        let description = match margin {
            Margin::Runs(n) => format!("{} won by {} {}", winner_name, n, plural(n, "run")),
            Margin::Wickets(n) => format!("{} won by {} {}", winner_name, n, plural(n, "wicket")),
            Margin::Tie => "Match tied".to_string(),
        };
        Self {
            winner: Some(winner),
            margin,
            tied: false,
            description,
        }
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Full match record. Read through accessors; only the engine mutates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    id: MatchId,
    created_at: DateTime<Utc>,
    config: MatchConfig,
    toss: Option<Toss>,
    batting_first: Option<Team>,
    first_innings: InningsState,
    second_innings: InningsState,
    phase: MatchPhase,
    last_outcome: Option<BallOutcome>,
    result: Option<MatchResult>,
}

impl MatchState {
    /// Fresh match awaiting the toss. Config must already be validated.
    pub(crate) fn new(config: MatchConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            config,
            toss: None,
            batting_first: None,
            first_innings: InningsState::new(),
            second_innings: InningsState::new(),
            phase: MatchPhase::AwaitingToss,
            last_outcome: None,
            result: None,
        }
    }

    /// Fresh match between the same sides, keeping the id.
    pub(crate) fn replay(&self) -> Self {
        Self {
            id: self.id,
            ..Self::new(self.config.clone())
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn toss(&self) -> Option<Toss> {
        self.toss
    }

    pub fn toss_winner(&self) -> Option<Team> {
        self.toss.map(|t| t.winner)
    }

    pub fn batting_first(&self) -> Option<Team> {
        self.batting_first
    }

    pub fn bowling_first(&self) -> Option<Team> {
        self.batting_first.map(Team::other)
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn first_innings(&self) -> &InningsState {
        &self.first_innings
    }

    pub fn second_innings(&self) -> &InningsState {
        &self.second_innings
    }

    pub fn last_outcome(&self) -> Option<BallOutcome> {
        self.last_outcome
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Innings the phase points at: the first up to the break, the second afterwards.
    pub fn active_innings(&self) -> Option<&InningsState> {
        match self.phase {
            MatchPhase::AwaitingToss => None,
            MatchPhase::FirstInnings | MatchPhase::InningsBreak => Some(&self.first_innings),
            MatchPhase::SecondInnings | MatchPhase::Complete => Some(&self.second_innings),
        }
    }

    /// Side currently batting (or that batted last).
    pub fn batting_team(&self) -> Option<Team> {
        let first = self.batting_first?;
        match self.phase {
            MatchPhase::AwaitingToss => None,
            MatchPhase::FirstInnings | MatchPhase::InningsBreak => Some(first),
            MatchPhase::SecondInnings | MatchPhase::Complete => Some(first.other()),
        }
    }

    pub fn bowling_team(&self) -> Option<Team> {
        self.batting_team().map(Team::other)
    }

    /// Runs the chasing side needs: first-innings total + 1. Known once the first innings is frozen.
    pub fn target(&self) -> Option<u32> {
        match self.phase {
            MatchPhase::InningsBreak | MatchPhase::SecondInnings | MatchPhase::Complete => {
                Some(self.first_innings.runs() + 1)
            }
            MatchPhase::AwaitingToss | MatchPhase::FirstInnings => None,
        }
    }

    /// Whether the innings the phase points at has ended.
    pub fn is_innings_complete(&self) -> bool {
        let total_balls = self.config.total_balls();
        let wickets = self.config.wickets;
        match self.phase {
            MatchPhase::AwaitingToss => false,
            MatchPhase::FirstInnings => self.first_innings.is_complete(total_balls, wickets, None),
            MatchPhase::SecondInnings => {
                self.second_innings
                    .is_complete(total_balls, wickets, self.target())
            }
            MatchPhase::InningsBreak | MatchPhase::Complete => true,
        }
    }

    pub fn is_match_complete(&self) -> bool {
        match self.phase {
            MatchPhase::Complete => true,
            MatchPhase::SecondInnings => self.is_innings_complete(),
            _ => false,
        }
    }

    pub(crate) fn set_toss(&mut self, toss: Toss) {
        self.toss = Some(toss);
    }

    pub(crate) fn set_batting_first(&mut self, team: Team) {
        self.batting_first = Some(team);
    }

    pub(crate) fn set_phase(&mut self, phase: MatchPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_result(&mut self, result: MatchResult) {
        self.result = Some(result);
    }

    pub(crate) fn reset_second_innings(&mut self) {
        self.second_innings = InningsState::new();
    }

    /// Record a delivery against the active innings.
    pub(crate) fn record_ball(&mut self, outcome: BallOutcome) {
        match self.phase {
            MatchPhase::FirstInnings => self.first_innings.record(outcome),
            MatchPhase::SecondInnings => self.second_innings.record(outcome),
            _ => return,
        }
        self.last_outcome = Some(outcome);
    }
}
