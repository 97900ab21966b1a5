//! Shared helpers: a scripted random source and ready-to-play engines.

#![allow(dead_code)]

use book_cricket::{CoinFace, MatchConfig, MatchEngine, RandomSource, Team};
use std::collections::VecDeque;

/// Hands out a fixed sequence of values. Panics when a value is outside the requested range
/// or the script runs dry, so a test fails loudly if the engine draws more than expected.
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// A source that must never be asked for a value.
    pub fn empty() -> Self {
        Self {
            values: VecDeque::new(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, low: u32, high: u32) -> u32 {
        let v = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted (asked for {low}..={high})"));
        assert!(
            (low..=high).contains(&v),
            "scripted value {v} outside {low}..={high}"
        );
        v
    }
}

pub fn config(overs: u32, wickets: u32) -> MatchConfig {
    MatchConfig::new("Ants", "Bees", overs, wickets)
}

/// Configured engine, toss won by team A (heads called, heads landed), team A batting first.
/// `pages` are the page numbers for the deliveries that follow.
pub fn ready_engine(config: MatchConfig, pages: &[u32]) -> MatchEngine {
    let script = std::iter::once(0).chain(pages.iter().copied());
    let mut engine = MatchEngine::new(ScriptedSource::new(script));
    engine.configure(config).unwrap();
    assert_eq!(engine.resolve_toss(CoinFace::Heads).unwrap(), Team::A);
    engine.choose_batting_order(Team::A).unwrap();
    engine
}

/// Play `n` balls, panicking on any error.
pub fn play(engine: &mut MatchEngine, n: usize) {
    for _ in 0..n {
        engine.play_ball().unwrap();
    }
}

/// Move from a finished first innings into the second.
pub fn into_second_innings(engine: &mut MatchEngine) {
    engine.advance_to_second_innings().unwrap();
    engine.start_second_innings().unwrap();
}
