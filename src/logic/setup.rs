//! Setup phase: configure the match, toss, and choose who bats first.

use crate::logic::engine::MatchEngine;
use crate::models::{CoinFace, MatchConfig, MatchError, MatchPhase, MatchState, Team, Toss};

impl MatchEngine {
    /// Start a fresh match in AwaitingToss, replacing any existing one.
    pub fn configure(&mut self, config: MatchConfig) -> Result<&MatchState, MatchError> {
        let config = config.validated().map_err(|e| {
            log::warn!("Rejected match config: {}", e);
            e
        })?;
        let state = MatchState::new(config);
        log::info!(
            "Match {} configured: {} vs {}, {} over(s), {} wicket(s), {:?}",
            state.id(),
            state.config().team_a,
            state.config().team_b,
            state.config().overs,
            state.config().wickets,
            state.config().mode,
        );
        Ok(&*self.state.insert(state))
    }

    /// Flip the coin against team A's call. A correct call wins the toss for team A.
    pub fn resolve_toss(&mut self, call: CoinFace) -> Result<Team, MatchError> {
        let state = self.state.as_ref().ok_or(MatchError::InvalidPhase)?;
        if state.phase() != MatchPhase::AwaitingToss || state.toss().is_some() {
            return Err(MatchError::InvalidPhase);
        }
        let coin = match self.rng.next_int(0, 1) {
            0 => CoinFace::Heads,
            _ => CoinFace::Tails,
        };
        let winner = if coin == call { Team::A } else { Team::B };
        let state = self.state_mut()?;
        state.set_toss(Toss { call, coin, winner });
        log::info!(
            "Match {}: called {:?}, coin {:?}, {} won the toss",
            state.id(),
            call,
            coin,
            state.config().team_name(winner)
        );
        Ok(winner)
    }

    /// Bat-first pick of a computer that won the toss. None if a human decides.
    pub fn computer_batting_choice(&self) -> Option<Team> {
        let state = self.state.as_ref()?;
        let winner = state.toss_winner()?;
        state.config().is_computer(winner).then_some(winner)
    }

    /// Fix the batting order and begin the first innings.
    pub fn choose_batting_order(&mut self, batting_first: Team) -> Result<(), MatchError> {
        let state = self.state_mut()?;
        if state.phase() != MatchPhase::AwaitingToss || state.toss().is_none() {
            log::warn!("Match {}: batting order chosen out of sequence", state.id());
            return Err(MatchError::InvalidPhase);
        }
        state.set_batting_first(batting_first);
        state.set_phase(MatchPhase::FirstInnings);
        log::info!(
            "Match {}: {} bat first",
            state.id(),
            state.config().team_name(batting_first)
        );
        Ok(())
    }
}
