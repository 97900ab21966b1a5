//! MatchEngine: owns the match record and the sources it draws pages from.
//!
//! Operations are spread over the phase modules (`setup`, `play`, `result`);
//! this file holds construction, reset and read access.

use crate::logic::random::{RandomSource, RngSource};
use crate::logic::stats::Scoreboard;
use crate::logic::strategy::{PageStrategy, UniformPages};
use crate::models::{MatchError, MatchState};

/// Single authority for advancing a match.
pub struct MatchEngine {
    pub(crate) state: Option<MatchState>,
    pub(crate) rng: Box<dyn RandomSource + Send>,
    pub(crate) strategy: Box<dyn PageStrategy + Send>,
}

impl MatchEngine {
    /// Engine with uniform page draws from `rng`. No match until `configure`.
    pub fn new(rng: impl RandomSource + Send + 'static) -> Self {
        Self {
            state: None,
            rng: Box::new(rng),
            strategy: Box::new(UniformPages),
        }
    }

    /// Engine seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Replace the page strategy (e.g. a computer opponent).
    pub fn with_strategy(mut self, strategy: impl PageStrategy + Send + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// The current match, if one is configured.
    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    pub(crate) fn state_ref(&self) -> Result<&MatchState, MatchError> {
        self.state.as_ref().ok_or(MatchError::InvalidPhase)
    }

    pub(crate) fn state_mut(&mut self) -> Result<&mut MatchState, MatchError> {
        self.state.as_mut().ok_or(MatchError::InvalidPhase)
    }

    /// Display snapshot of the current match.
    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.state.as_ref().map(Scoreboard::from_state)
    }

    /// Whether the active innings has ended. False with no match or before the toss.
    pub fn is_innings_complete(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(MatchState::is_innings_complete)
    }

    pub fn is_match_complete(&self) -> bool {
        self.state.as_ref().is_some_and(MatchState::is_match_complete)
    }

    /// Drop the current match. The engine returns to its unconfigured state.
    pub fn reset(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!("Match {} reset", state.id());
        }
    }

    /// Start over with the same teams, settings and match id.
    pub fn restart(&mut self) -> Result<&MatchState, MatchError> {
        let fresh = self.state_ref()?.replay();
        log::info!("Match {} restarted", fresh.id());
        Ok(&*self.state.insert(fresh))
    }
}
