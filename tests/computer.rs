//! Computer opponent: toss choice, biased page draws, and their bounds.

mod common;

use book_cricket::{
    page_ending_in, BallContext, Bias, CoinFace, ComputerOpponent, Difficulty, GameMode,
    MatchEngine, MatchPhase, OutcomeKind, PageStrategy, RngSource, Team, UniformPages, PAGE_MAX,
    PAGE_MIN,
};
use common::{config, ScriptedSource};

fn ctx(balls: u32, total_balls: u32, runs: u32, target: Option<u32>) -> BallContext {
    BallContext {
        computer_bowling: true,
        runs,
        balls,
        total_balls,
        target,
    }
}

#[test]
fn no_bias_while_computer_bats() {
    let c = BallContext {
        computer_bowling: false,
        ..ctx(0, 12, 0, Some(50))
    };
    assert_eq!(ComputerOpponent::new(Difficulty::Hard).bias(&c), Bias::default());
}

#[test]
fn no_bias_before_there_is_a_total_to_defend() {
    let cpu = ComputerOpponent::new(Difficulty::Hard);
    assert_eq!(cpu.bias(&ctx(0, 12, 0, None)), Bias::default());
    assert_eq!(cpu.bias(&ctx(10, 12, 0, None)), Bias::default());

    // Without a bias the draw is a single uniform page, even a boundary late on.
    let mut rng = ScriptedSource::new([246]);
    assert_eq!(cpu.draw_page(&mut rng, &ctx(10, 12, 0, None)), 246);
}

#[test]
fn early_overs_raise_wicket_odds() {
    // 16 needed off 12: rate 8, no chase adjustment.
    let bias = ComputerOpponent::new(Difficulty::Hard).bias(&ctx(0, 12, 0, Some(16)));
    assert_eq!(
        bias,
        Bias {
            wicket_pct: 12,
            boundary_cut_pct: 0
        }
    );
}

#[test]
fn death_overs_cut_boundaries() {
    // 3 needed off 2: rate 9.
    let bias = ComputerOpponent::new(Difficulty::Easy).bias(&ctx(10, 12, 0, Some(3)));
    assert_eq!(bias.wicket_pct, 0);
    assert_eq!(bias.boundary_cut_pct, 15);
}

#[test]
fn chase_pressure_and_cruise_both_raise_wicket_odds() {
    let cpu = ComputerOpponent::new(Difficulty::Medium);
    // 50 needed off 6: rate 50.
    assert_eq!(cpu.bias(&ctx(6, 12, 0, Some(50))).wicket_pct, 10);
    // 1 needed off 6: rate 1.
    assert_eq!(cpu.bias(&ctx(6, 12, 9, Some(10))).wicket_pct, 10);
    // 10 needed off 6: rate 10, left alone.
    assert_eq!(cpu.bias(&ctx(6, 12, 10, Some(20))), Bias::default());
}

#[test]
fn forced_wicket_draws_a_page_ending_in_zero() {
    let cpu = ComputerOpponent::new(Difficulty::Hard);
    // roll 5 <= 12, then decade 7.
    let mut rng = ScriptedSource::new([5, 7]);
    let page = cpu.draw_page(&mut rng, &ctx(0, 12, 0, Some(16)));
    assert_eq!(page, 70);
}

#[test]
fn missed_roll_falls_back_to_uniform_page() {
    let cpu = ComputerOpponent::new(Difficulty::Hard);
    let mut rng = ScriptedSource::new([50, 104]);
    assert_eq!(cpu.draw_page(&mut rng, &ctx(0, 12, 0, Some(16))), 104);
}

#[test]
fn cut_boundary_is_redrawn_as_non_boundary() {
    let cpu = ComputerOpponent::new(Difficulty::Hard);
    // uniform 246 (six), roll 30 <= 45, digit index 3 (5), decade 12.
    let mut rng = ScriptedSource::new([246, 30, 3, 12]);
    let page = cpu.draw_page(&mut rng, &ctx(10, 12, 0, Some(3)));
    assert_eq!(page, 125);
    assert_eq!(book_cricket::resolve(page).0, OutcomeKind::Dot);
}

#[test]
fn pages_ending_in_digit_stay_in_range() {
    let mut rng = ScriptedSource::new([1, 50, 0, 49]);
    assert_eq!(page_ending_in(&mut rng, 0), 10);
    assert_eq!(page_ending_in(&mut rng, 0), 500);
    assert_eq!(page_ending_in(&mut rng, 9), 9);
    assert_eq!(page_ending_in(&mut rng, 9), 499);

    let mut rng = RngSource::seeded(11);
    for digit in 0..10 {
        for _ in 0..200 {
            let page = page_ending_in(&mut rng, digit);
            assert_eq!(page % 10, digit);
            assert!((PAGE_MIN..=PAGE_MAX).contains(&page));
        }
    }
}

#[test]
fn biased_draws_stay_in_bounds() {
    let strategies: [&dyn PageStrategy; 4] = [
        &UniformPages,
        &ComputerOpponent {
            difficulty: Difficulty::Easy,
        },
        &ComputerOpponent {
            difficulty: Difficulty::Medium,
        },
        &ComputerOpponent {
            difficulty: Difficulty::Hard,
        },
    ];
    let mut rng = RngSource::seeded(3);
    for strategy in strategies {
        for balls in 0..12 {
            for target in [None, Some(1), Some(40)] {
                for _ in 0..50 {
                    let page = strategy.draw_page(&mut rng, &ctx(balls, 12, 0, target));
                    assert!((PAGE_MIN..=PAGE_MAX).contains(&page), "page {page}");
                }
            }
        }
    }
}

#[test]
fn computer_that_wins_toss_bats_first() {
    let cfg = config(1, 10).with_mode(GameMode::HumanVsComputer);
    let mut engine = MatchEngine::new(ScriptedSource::new([1]));
    engine.configure(cfg).unwrap();
    assert_eq!(engine.computer_batting_choice(), None);
    assert_eq!(engine.resolve_toss(CoinFace::Heads).unwrap(), Team::B);
    assert_eq!(engine.computer_batting_choice(), Some(Team::B));

    // Human winning the toss decides for themselves.
    let cfg = config(1, 10).with_mode(GameMode::HumanVsComputer);
    let mut engine = MatchEngine::new(ScriptedSource::new([0]));
    engine.configure(cfg).unwrap();
    engine.resolve_toss(CoinFace::Heads).unwrap();
    assert_eq!(engine.computer_batting_choice(), None);
}

#[test]
fn engine_applies_bias_only_when_computer_bowls() {
    let cfg = config(1, 10).with_mode(GameMode::HumanVsComputer);
    // Toss to the computer, six unbiased pages for its innings, then a rolled wicket.
    let mut script = vec![1];
    script.extend([105; 6]);
    script.extend([10, 3]);
    let mut engine = MatchEngine::new(ScriptedSource::new(script))
        .with_strategy(ComputerOpponent::new(Difficulty::Hard));
    engine.configure(cfg).unwrap();
    assert_eq!(engine.resolve_toss(CoinFace::Heads).unwrap(), Team::B);
    let choice = engine.computer_batting_choice().unwrap();
    engine.choose_batting_order(choice).unwrap();

    engine.simulate_innings().unwrap();
    assert_eq!(engine.state().unwrap().first_innings().runs(), 0);
    engine.advance_to_second_innings().unwrap();
    engine.start_second_innings().unwrap();

    let outcome = engine.play_ball().unwrap();
    assert_eq!(outcome.page, 30);
    assert!(outcome.is_wicket());
    assert_eq!(engine.state().unwrap().phase(), MatchPhase::SecondInnings);
}

#[test]
fn full_matches_against_the_computer_hold_invariants() {
    for seed in 0..30u64 {
        let cfg = config(2, 3).with_mode(GameMode::HumanVsComputer);
        let mut engine = MatchEngine::new(RngSource::seeded(seed))
            .with_strategy(ComputerOpponent::new(Difficulty::Hard));
        engine.configure(cfg).unwrap();
        let winner = engine.resolve_toss(CoinFace::Heads).unwrap();
        let first = engine.computer_batting_choice().unwrap_or(winner);
        engine.choose_batting_order(first).unwrap();

        for _ in 0..2 {
            let balls = engine.simulate_innings().unwrap();
            assert!(balls.len() <= 12);
            assert!(balls
                .iter()
                .all(|o| (PAGE_MIN..=PAGE_MAX).contains(&o.page) && (!o.is_wicket() || o.runs == 0)));
            if engine.state().unwrap().phase() == MatchPhase::FirstInnings {
                engine.advance_to_second_innings().unwrap();
                engine.start_second_innings().unwrap();
            }
        }
        let state = engine.state().unwrap();
        assert!(state.first_innings().wickets() <= 3);
        assert!(state.second_innings().wickets() <= 3);
        assert!(engine.compute_result().is_ok());
    }
}
