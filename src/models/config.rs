//! Match configuration: team names, overs, wickets and game mode.

use crate::models::state::MatchError;
use serde::{Deserialize, Serialize};

/// Overs per innings when the client does not send one.
pub const DEFAULT_OVERS: u32 = 2;

/// Wickets per team when the client does not send one.
pub const DEFAULT_WICKETS: u32 = 10;

/// Balls in one over.
pub const BALLS_PER_OVER: u32 = 6;

/// Longest innings a match may be configured with.
pub const MAX_OVERS: u32 = 50;

/// One of the two sides in a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    #[default]
    A,
    B,
}

impl Team {
    /// The opposing side.
    pub fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Who controls the two sides.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    /// Team A is the human, team B the computer.
    HumanVsComputer,
}

impl GameMode {
    /// Team played by the computer, if any.
    pub fn computer_team(self) -> Option<Team> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(Team::B),
        }
    }
}

fn default_overs() -> u32 {
    DEFAULT_OVERS
}

fn default_wickets() -> u32 {
    DEFAULT_WICKETS
}

/// Settings chosen before the toss. Fixed for the lifetime of the match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub team_a: String,
    pub team_b: String,
    #[serde(default = "default_overs")]
    pub overs: u32,
    #[serde(default = "default_wickets")]
    pub wickets: u32,
    #[serde(default)]
    pub mode: GameMode,
}

impl MatchConfig {
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>, overs: u32, wickets: u32) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            overs,
            wickets,
            mode: GameMode::HumanVsHuman,
        }
    }

    /// Same config with a different game mode.
    pub fn with_mode(self, mode: GameMode) -> Self {
        Self { mode, ..self }
    }

    /// Balls each side may face.
    pub fn total_balls(&self) -> u32 {
        self.overs.saturating_mul(BALLS_PER_OVER)
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    pub fn is_computer(&self, team: Team) -> bool {
        self.mode.computer_team() == Some(team)
    }

    /// Check limits and return a copy with trimmed team names.
    pub fn validated(&self) -> Result<MatchConfig, MatchError> {
        if self.overs < 1 {
            return Err(MatchError::InvalidConfig("overs must be at least 1".into()));
        }
        if self.overs > MAX_OVERS {
            return Err(MatchError::InvalidConfig(format!(
                "overs must be at most {}",
                MAX_OVERS
            )));
        }
        if self.wickets < 1 {
            return Err(MatchError::InvalidConfig("wickets must be at least 1".into()));
        }
        let team_a = self.team_a.trim();
        let team_b = self.team_b.trim();
        if team_a.is_empty() || team_b.is_empty() {
            return Err(MatchError::InvalidConfig("team names must not be empty".into()));
        }
        Ok(MatchConfig {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            ..self.clone()
        })
    }
}
