//! Page-number resolution: the last digit of a flipped page decides the ball.

use serde::{Deserialize, Serialize};

/// Lowest page that can be flipped.
pub const PAGE_MIN: u32 = 1;

/// Highest page that can be flipped.
pub const PAGE_MAX: u32 = 500;

/// What happened on a delivery.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Last digit 0: wicket, no runs.
    Out,
    /// Last digit 1, 2 or 3.
    Runs,
    /// Last digit 4 or 6.
    Boundary,
    /// Last digit 5, 7, 8 or 9.
    Dot,
}

/// Map a last digit (0-9) to its outcome and runs.
pub fn resolve_digit(digit: u32) -> (OutcomeKind, u32) {
    match digit % 10 {
        0 => (OutcomeKind::Out, 0),
        d @ 1..=3 => (OutcomeKind::Runs, d),
        d @ (4 | 6) => (OutcomeKind::Boundary, d),
        _ => (OutcomeKind::Dot, 0),
    }
}

/// Map a page number to its outcome and runs. Only `page % 10` matters.
pub fn resolve(page: u32) -> (OutcomeKind, u32) {
    resolve_digit(page % 10)
}

/// A resolved delivery, as shown to the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BallOutcome {
    pub page: u32,
    pub digit: u32,
    pub runs: u32,
    pub kind: OutcomeKind,
}

impl BallOutcome {
    pub fn from_page(page: u32) -> Self {
        let (kind, runs) = resolve(page);
        Self {
            page,
            digit: page % 10,
            runs,
            kind,
        }
    }

    pub fn is_wicket(&self) -> bool {
        self.kind == OutcomeKind::Out
    }

    pub fn is_boundary(&self) -> bool {
        self.kind == OutcomeKind::Boundary
    }

    /// Short scorecard symbol: "W", "." or the runs.
    pub fn symbol(&self) -> String {
        match self.kind {
            OutcomeKind::Out => "W".to_string(),
            OutcomeKind::Dot => ".".to_string(),
            OutcomeKind::Runs | OutcomeKind::Boundary => self.runs.to_string(),
        }
    }
}
