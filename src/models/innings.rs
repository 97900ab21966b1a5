//! InningsState: one side's batting turn.

use crate::models::config::BALLS_PER_OVER;
use crate::models::outcome::{BallOutcome, OutcomeKind};
use serde::{Deserialize, Serialize};

/// Runs, wickets and balls for one innings, plus the deliveries that made them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InningsState {
    runs: u32,
    wickets: u32,
    balls: u32,
    fours: u32,
    sixes: u32,
    dots: u32,
    deliveries: Vec<BallOutcome>,
}

impl InningsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn wickets(&self) -> u32 {
        self.wickets
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    pub fn fours(&self) -> u32 {
        self.fours
    }

    pub fn sixes(&self) -> u32 {
        self.sixes
    }

    pub fn dots(&self) -> u32 {
        self.dots
    }

    /// Every delivery of the innings, oldest first.
    pub fn deliveries(&self) -> &[BallOutcome] {
        &self.deliveries
    }

    /// Deliveries of the over in progress, or of the over just finished.
    pub fn current_over(&self) -> &[BallOutcome] {
        if self.deliveries.is_empty() {
            return &[];
        }
        let per_over = BALLS_PER_OVER as usize;
        let start = (self.deliveries.len() - 1) / per_over * per_over;
        &self.deliveries[start..]
    }

    /// True once balls, wickets or (when chasing) the target is reached.
    pub fn is_complete(&self, total_balls: u32, wickets_allowed: u32, target: Option<u32>) -> bool {
        self.balls >= total_balls
            || self.wickets >= wickets_allowed
            || target.is_some_and(|t| self.runs >= t)
    }

    /// Apply one delivery. Callers check completion first.
    pub(crate) fn record(&mut self, outcome: BallOutcome) {
        self.balls += 1;
        match outcome.kind {
            OutcomeKind::Out => self.wickets += 1,
            OutcomeKind::Dot => self.dots += 1,
            OutcomeKind::Boundary => {
                if outcome.runs == 4 {
                    self.fours += 1;
                } else {
                    self.sixes += 1;
                }
                self.runs += outcome.runs;
            }
            OutcomeKind::Runs => self.runs += outcome.runs,
        }
        self.deliveries.push(outcome);
    }
}
