mod support;

use support::{ScriptedHolds, ScriptedShuffle, NOTHING, ROYAL};
use vidpoker_engine::classify::Label;
use vidpoker_engine::config::{BetReduction, ExitCondition, SessionConfig};
use vidpoker_engine::deck::SeededShuffle;
use vidpoker_engine::errors::GameError;
use vidpoker_engine::hold::{HoldDecision, HoldMask};
use vidpoker_engine::multiplier::MultiplierMode;
use vidpoker_engine::paytable::Variant;
use vidpoker_engine::session::{Session, SessionEnd, SessionStep};

fn config(balance: f64, bet: f64, hands: usize, exit: Option<ExitCondition>) -> SessionConfig {
    SessionConfig {
        initial_balance: balance,
        bet,
        hand_count: hands,
        exit,
        ..SessionConfig::default()
    }
}

#[test]
fn invalid_config_never_starts() {
    let err = Session::new(config(100.0, 0.0, 10, None)).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn histogram_starts_with_every_label_at_zero() {
    let s = Session::new(SessionConfig {
        variant: Variant::TripleDoubleBonus,
        ..SessionConfig::default()
    })
    .unwrap();
    let h = s.state().histogram();
    assert_eq!(h.len(), 13);
    assert!(h.values().all(|&n| n == 0));
    assert_eq!(h.keys().next(), Some(&Label::RoyalFlush));
}

#[test]
fn stops_after_elapsed_rounds() {
    let exit = ExitCondition::ElapsedRounds { rounds: 3 };
    let mut s = Session::new(config(100.0, 0.05, 10, Some(exit))).unwrap();
    let mut src = SeededShuffle::new_with_seed(11);
    let mut holds = ScriptedHolds::default();
    let end = s.run(&mut src, &mut holds).unwrap();
    assert_eq!(end, SessionEnd::ElapsedRounds);
    assert_eq!(s.state().steps(), 3);
    assert_eq!(s.state().balance_series().len(), 3);
    assert_eq!(s.state().delta_series().len(), 3);
}

#[test]
fn runs_until_bankroll_is_exhausted() {
    let mut s = Session::new(config(1.0, 0.25, 2, None)).unwrap();
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    let mut holds = ScriptedHolds::default();
    let end = s.run(&mut src, &mut holds).unwrap();
    assert_eq!(end, SessionEnd::BankrollExhausted);
    assert_eq!(s.state().steps(), 2);
    assert_eq!(s.state().balance(), 0.0);
}

#[test]
fn balance_below_one_bet_plays_zero_rounds() {
    let mut s = Session::new(config(0.4, 0.05, 10, None)).unwrap();
    let mut src = SeededShuffle::new_with_seed(1);
    let mut holds = ScriptedHolds::default();
    assert_eq!(
        s.run(&mut src, &mut holds).unwrap(),
        SessionEnd::BankrollExhausted
    );
    assert_eq!(s.state().steps(), 0);
    assert!(s.state().balance_series().is_empty());
    assert!(s.state().max_return().is_none());
}

#[test]
fn super_times_pay_surcharge_is_not_taken_when_uncovered() {
    // 1.0 base plus 0.2 surcharge against a 1.1 bankroll
    let mut s = Session::new(SessionConfig {
        multiplier: MultiplierMode::SuperTimesPay,
        ..config(1.1, 1.0, 1, None)
    })
    .unwrap();
    let mut src = SeededShuffle::new_with_seed(1);
    let mut holds = ScriptedHolds::default();
    assert_eq!(
        s.run(&mut src, &mut holds).unwrap(),
        SessionEnd::BankrollExhausted
    );
    assert_eq!(s.state().steps(), 0);
    assert_eq!(s.state().balance(), 1.1);
}

#[test]
fn stops_on_return_threshold() {
    let exit = ExitCondition::ReturnThreshold { multiple: 25.0 };
    let mut s = Session::new(config(100.0, 1.0, 1, Some(exit))).unwrap();
    let mut src = ScriptedShuffle::new().then(NOTHING).then(ROYAL);
    let mut holds = ScriptedHolds::default();
    let end = s.run(&mut src, &mut holds).unwrap();
    assert_eq!(end, SessionEnd::ReturnThreshold);
    assert_eq!(s.state().steps(), 2);
    let best = s.state().max_return().unwrap();
    assert_eq!(best.label, Some(Label::RoyalFlush));
    assert_eq!(best.return_amount, 800.0);
    assert_eq!(best.step, 2);
    assert_eq!(best.balance, 898.0);
    assert_eq!(best.profit, 798.0);
}

#[test]
fn stops_when_balance_leaves_the_band() {
    let exit = ExitCondition::BalanceBand {
        lower: 0.0,
        upper: 1.2,
    };
    let mut s = Session::new(config(100.0, 1.0, 1, Some(exit))).unwrap();
    let mut src = ScriptedShuffle::new().then(NOTHING).then(ROYAL);
    let mut holds = ScriptedHolds::default();
    assert_eq!(s.run(&mut src, &mut holds).unwrap(), SessionEnd::BalanceBand);
    assert_eq!(s.state().steps(), 2);

    let exit = ExitCondition::BalanceBand {
        lower: 0.995,
        upper: 1.2,
    };
    let mut s = Session::new(config(100.0, 1.0, 1, Some(exit))).unwrap();
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    assert_eq!(s.run(&mut src, &mut holds).unwrap(), SessionEnd::BalanceBand);
    assert_eq!(s.state().steps(), 1);
}

#[test]
fn quit_ends_the_session() {
    let mut s = Session::new(config(100.0, 1.0, 3, None)).unwrap();
    let mut src = SeededShuffle::new_with_seed(5);
    let mut holds = ScriptedHolds::of(&[
        HoldDecision::Hold(HoldMask::ALL),
        HoldDecision::Hold(HoldMask::NONE),
        HoldDecision::Quit,
    ]);
    assert_eq!(s.run(&mut src, &mut holds).unwrap(), SessionEnd::Quit);
    assert_eq!(s.state().steps(), 2);
    let summary = s.summary(SessionEnd::Quit);
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.balance_series.len(), 2);
}

#[test]
fn bookkeeping_is_monotonic_and_conserved() {
    let exit = ExitCondition::ElapsedRounds { rounds: 200 };
    let mut s = Session::new(config(100.0, 0.05, 5, Some(exit))).unwrap();
    let mut src = SeededShuffle::new_with_seed(2024);
    let mut holds = ScriptedHolds::of(&[]);

    let mut net = 0.0;
    let mut best = 0.0f64;
    let mut last_max = 0.0f64;
    let mut peaks = Vec::new();
    s.run_with(&mut src, &mut holds, |report| {
        net += report.total_return - report.cost;
        for h in &report.hands {
            best = best.max(h.return_amount);
        }
        assert!(best >= last_max);
        last_max = best;
        peaks.push(report.balance);
    })
    .unwrap();

    let st = s.state();
    assert!((st.balance() - (100.0 + net)).abs() < 1e-6);
    assert_eq!(st.max_return_amount(), best);
    let highest = peaks.iter().copied().fold(100.0, f64::max);
    assert!(st.max_balance() >= highest - 1e-9);
    assert!((st.peak_ratio() - st.max_balance() / 100.0).abs() < 1e-9);
    let sum_of_deltas: f64 = st.delta_series().iter().sum();
    assert!((sum_of_deltas - net).abs() < 1e-6);
}

#[test]
fn bet_reduction_lowers_the_bet_before_a_round() {
    let mut cfg = config(10.0, 2.0, 1, Some(ExitCondition::ElapsedRounds { rounds: 1 }));
    cfg.bet_reduction = Some(BetReduction {
        step: 0.5,
        min_bet: 0.25,
    });
    let mut s = Session::new(cfg).unwrap();
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    let mut holds = ScriptedHolds::default();
    s.run(&mut src, &mut holds).unwrap();
    assert_eq!(s.state().bet(), 1.5);
    assert_eq!(s.state().balance(), 8.5);
}

#[test]
fn same_seed_reproduces_the_session() {
    let exit = ExitCondition::ElapsedRounds { rounds: 40 };
    let run = |seed| {
        let mut s = Session::new(config(100.0, 0.05, 10, Some(exit))).unwrap();
        let mut holds = ScriptedHolds::default();
        let end = s
            .run(&mut SeededShuffle::new_with_seed(seed), &mut holds)
            .unwrap();
        s.summary(end)
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn summary_serializes_for_plotting() {
    let exit = ExitCondition::ElapsedRounds { rounds: 2 };
    let mut s = Session::new(config(100.0, 1.0, 1, Some(exit))).unwrap();
    let mut src = ScriptedShuffle::new().then(ROYAL).then(NOTHING);
    let mut holds = ScriptedHolds::default();
    let end = s.run(&mut src, &mut holds).unwrap();
    let json = serde_json::to_value(s.summary(end)).unwrap();
    assert_eq!(json["end"], "elapsed-rounds");
    assert_eq!(json["variant"], "jacks-or-better");
    assert_eq!(json["histogram"]["RF"], 1);
    assert_eq!(json["max_return"]["label"], "RF");
    assert_eq!(json["balance_series"].as_array().unwrap().len(), 2);
}

#[test]
fn step_returns_the_tripping_round_then_the_end() {
    let exit = ExitCondition::ElapsedRounds { rounds: 1 };
    let mut s = Session::new(config(100.0, 1.0, 1, Some(exit))).unwrap();
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    let mut holds = ScriptedHolds::default();
    assert!(matches!(
        s.step(&mut src, &mut holds).unwrap(),
        SessionStep::Round(_)
    ));
    assert_eq!(s.end(), Some(SessionEnd::ElapsedRounds));
    assert_eq!(
        s.step(&mut src, &mut holds).unwrap(),
        SessionStep::Ended(SessionEnd::ElapsedRounds)
    );
    assert_eq!(s.state().steps(), 1);
}
