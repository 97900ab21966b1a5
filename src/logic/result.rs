//! Result determination once the chase is over.

use crate::logic::engine::MatchEngine;
use crate::models::{Margin, MatchError, MatchPhase, MatchResult, MatchState};

/// Compare the two totals. Runs margin for a defended total, wickets in hand for a chase.
fn decide(state: &MatchState) -> Result<MatchResult, MatchError> {
    let batting_first = state.batting_first().ok_or(MatchError::InvalidPhase)?;
    let chasing = batting_first.other();
    let first = state.first_innings().runs();
    let second = state.second_innings().runs();
    let config = state.config();

    let result = if first == second {
        MatchResult::tie()
    } else if first > second {
        MatchResult::win(
            batting_first,
            config.team_name(batting_first),
            Margin::Runs(first - second),
        )
    } else {
        let wickets_in_hand = config
            .wickets
            .saturating_sub(state.second_innings().wickets());
        MatchResult::win(chasing, config.team_name(chasing), Margin::Wickets(wickets_in_hand))
    };
    Ok(result)
}

impl MatchEngine {
    /// Decide the match and move to Complete. Later calls return the stored result.
    pub fn compute_result(&mut self) -> Result<MatchResult, MatchError> {
        let state = self.state_mut()?;
        if let Some(result) = state.result() {
            return Ok(result.clone());
        }
        if state.phase() != MatchPhase::SecondInnings || !state.is_innings_complete() {
            return Err(MatchError::InvalidPhase);
        }
        let result = decide(state)?;
        state.set_result(result.clone());
        state.set_phase(MatchPhase::Complete);
        log::info!("Match {}: {}", state.id(), result.description);
        Ok(result)
    }
}
