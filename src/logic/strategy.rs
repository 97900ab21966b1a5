//! Page selection policies: plain uniform draws, or a computer opponent that leans on the odds.
//!
//! A strategy only chooses which page is flipped. The digit-to-outcome mapping in
//! [`crate::models::resolve`] is applied to whatever page comes back.

use crate::logic::random::RandomSource;
use crate::logic::stats::required_run_rate;
use crate::models::{BallOutcome, PAGE_MAX, PAGE_MIN};
use serde::{Deserialize, Serialize};

/// Last digits that never score a boundary.
const NON_BOUNDARY_DIGITS: [u32; 7] = [1, 2, 3, 5, 7, 8, 9];

/// What a strategy may look at before choosing a page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BallContext {
    pub computer_bowling: bool,
    pub runs: u32,
    pub balls: u32,
    pub total_balls: u32,
    /// Set in the second innings only.
    pub target: Option<u32>,
}

impl BallContext {
    /// Runs per over still needed, when chasing.
    pub fn required_run_rate(&self) -> Option<f64> {
        self.target.map(|t| {
            required_run_rate(
                t.saturating_sub(self.runs),
                self.total_balls.saturating_sub(self.balls),
            )
        })
    }

    fn third(&self) -> u32 {
        (self.total_balls / 3).max(1)
    }

    pub fn is_early_overs(&self) -> bool {
        self.balls < self.third()
    }

    pub fn is_death_overs(&self) -> bool {
        self.balls >= self.total_balls.saturating_sub(self.third())
    }
}

/// Chooses the page number for the next delivery.
pub trait PageStrategy {
    fn draw_page(&self, rng: &mut dyn RandomSource, ctx: &BallContext) -> u32;
}

/// Any page in `PAGE_MIN..=PAGE_MAX`, equally likely.
pub fn uniform_page(rng: &mut dyn RandomSource) -> u32 {
    rng.next_int(PAGE_MIN, PAGE_MAX)
}

/// A random page whose last digit is `digit`, still inside the page range.
pub fn page_ending_in(rng: &mut dyn RandomSource, digit: u32) -> u32 {
    let digit = digit % 10;
    if digit == 0 {
        rng.next_int(1, PAGE_MAX / 10) * 10
    } else {
        rng.next_int(0, (PAGE_MAX - digit) / 10) * 10 + digit
    }
}

/// Pure uniform draws; the computer gets no help.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPages;

impl PageStrategy for UniformPages {
    fn draw_page(&self, rng: &mut dyn RandomSource, _ctx: &BallContext) -> u32 {
        uniform_page(rng)
    }
}

/// How hard the computer leans on the draw.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    fn scale(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Percent chances applied on top of a uniform draw.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Bias {
    /// Chance of forcing a page ending in 0.
    pub wicket_pct: u32,
    /// Chance of re-drawing a boundary page as a non-boundary page.
    pub boundary_cut_pct: u32,
}

/// Weighted draws while the computer bowls at a human batter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComputerOpponent {
    pub difficulty: Difficulty,
}

impl ComputerOpponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// The weighting for this ball. Zero unless the computer is bowling to defend a total.
    pub fn bias(&self, ctx: &BallContext) -> Bias {
        if !ctx.computer_bowling || ctx.target.is_none() {
            return Bias::default();
        }
        let scale = self.difficulty.scale();
        let mut bias = Bias::default();

        if ctx.is_early_overs() {
            bias.wicket_pct += 4 * scale;
        }
        if ctx.is_death_overs() {
            bias.boundary_cut_pct += 15 * scale;
        }
        if let Some(rrr) = ctx.required_run_rate() {
            // Squeeze a struggling chase, and stop an easy one from coasting home.
            if rrr > 10.0 || rrr < 6.0 {
                bias.wicket_pct += 5 * scale;
            }
        }
        bias
    }
}

impl PageStrategy for ComputerOpponent {
    fn draw_page(&self, rng: &mut dyn RandomSource, ctx: &BallContext) -> u32 {
        let bias = self.bias(ctx);
        if bias.wicket_pct > 0 && rng.next_int(1, 100) <= bias.wicket_pct {
            return page_ending_in(rng, 0);
        }
        let page = uniform_page(rng);
        if BallOutcome::from_page(page).is_boundary()
            && bias.boundary_cut_pct > 0
            && rng.next_int(1, 100) <= bias.boundary_cut_pct
        {
            let idx = rng.next_int(0, NON_BOUNDARY_DIGITS.len() as u32 - 1) as usize;
            return page_ending_in(rng, NON_BOUNDARY_DIGITS[idx]);
        }
        page
    }
}
