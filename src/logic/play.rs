//! Innings play: deliveries, innings completion, and the break between innings.

use crate::logic::engine::MatchEngine;
use crate::logic::strategy::BallContext;
use crate::models::{BallOutcome, MatchError, MatchPhase, MatchState};

/// Inputs for the page strategy, taken from the active innings.
fn ball_context(state: &MatchState) -> Option<BallContext> {
    let innings = state.active_innings()?;
    let bowling = state.bowling_team()?;
    let config = state.config();
    Some(BallContext {
        computer_bowling: config.is_computer(bowling),
        runs: innings.runs(),
        balls: innings.balls(),
        total_balls: config.total_balls(),
        target: state.target(),
    })
}

impl MatchEngine {
    /// Flip a page and apply it to the batting side.
    ///
    /// Fails with `InvalidPhase` before the batting order is set and with `InningsComplete`
    /// once the active innings has hit its ball, wicket or target limit (which includes the
    /// innings break and a decided match). Nothing changes on failure.
    pub fn play_ball(&mut self) -> Result<BallOutcome, MatchError> {
        let state = self.state_ref()?;
        if state.phase() == MatchPhase::AwaitingToss {
            return Err(MatchError::InvalidPhase);
        }
        if state.is_innings_complete() {
            log::warn!("Match {}: ball requested after innings ended", state.id());
            return Err(MatchError::InningsComplete);
        }
        let ctx = ball_context(state).ok_or(MatchError::InvalidPhase)?;

        let page = self.strategy.draw_page(&mut *self.rng, &ctx);
        let outcome = BallOutcome::from_page(page);

        let state = self.state_mut()?;
        state.record_ball(outcome);
        if let Some(innings) = state.active_innings() {
            log::debug!(
                "Match {}: page {} -> {:?} ({} run(s)), score {}/{} after {} ball(s)",
                state.id(),
                outcome.page,
                outcome.kind,
                outcome.runs,
                innings.runs(),
                innings.wickets(),
                innings.balls()
            );
        }
        if state.is_innings_complete() {
            log::info!("Match {}: {:?} complete", state.id(), state.phase());
        }
        Ok(outcome)
    }

    /// Play the active innings out ball by ball. Returns every delivery bowled.
    pub fn simulate_innings(&mut self) -> Result<Vec<BallOutcome>, MatchError> {
        let mut outcomes = vec![self.play_ball()?];
        while !self.is_innings_complete() {
            outcomes.push(self.play_ball()?);
        }
        Ok(outcomes)
    }

    /// Freeze the finished first innings and move to the innings break.
    pub fn advance_to_second_innings(&mut self) -> Result<(), MatchError> {
        let state = self.state_mut()?;
        if state.phase() != MatchPhase::FirstInnings || !state.is_innings_complete() {
            return Err(MatchError::InvalidPhase);
        }
        state.set_phase(MatchPhase::InningsBreak);
        log::info!(
            "Match {}: innings break, target {}",
            state.id(),
            state.first_innings().runs() + 1
        );
        Ok(())
    }

    /// Confirm the break and start the chase from zero.
    pub fn start_second_innings(&mut self) -> Result<(), MatchError> {
        let state = self.state_mut()?;
        if state.phase() != MatchPhase::InningsBreak {
            return Err(MatchError::InvalidPhase);
        }
        state.reset_second_innings();
        state.set_phase(MatchPhase::SecondInnings);
        log::info!("Match {}: second innings started", state.id());
        Ok(())
    }
}
