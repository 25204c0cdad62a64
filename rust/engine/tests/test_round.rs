mod support;

use support::{hand, ScriptedHolds, ScriptedShuffle, NOTHING, TWO_PAIR};
use vidpoker_engine::classify::Label;
use vidpoker_engine::config::SessionConfig;
use vidpoker_engine::errors::GameError;
use vidpoker_engine::hold::{HoldDecision, HoldMask};
use vidpoker_engine::multiplier::MultiplierMode;
use vidpoker_engine::round::{play_round, Round, RoundOutcome, RoundPhase};
use vidpoker_engine::session::SessionState;

fn state(balance: f64, bet: f64, hands: usize, multiplier: MultiplierMode) -> SessionState {
    SessionState::new(&SessionConfig {
        initial_balance: balance,
        bet,
        hand_count: hands,
        multiplier,
        ..SessionConfig::default()
    })
}

#[test]
fn replicated_hands_share_holds_and_draw_independently() {
    let mut st = state(100.0, 1.0, 2, MultiplierMode::None);
    // hand 0 draws Ac Ad 2c from the deck remainder; hand 1 draws Kc Kh 5d
    // from its own shuffled copy
    let mut src = ScriptedShuffle::new()
        .then("As Ah Kd 7c 3s Ac Ad 2c")
        .then("Kc Kh 5d");
    // sorted order is 3s 7c Kd Ah As
    let aces = HoldMask::from_positions([3, 4]);
    let mut holds = ScriptedHolds::of(&[HoldDecision::Hold(aces)]);

    let outcome = play_round(&mut st, &mut src, &mut holds).unwrap();
    let RoundOutcome::Completed(report) = outcome else {
        panic!("expected a completed round, got {outcome:?}");
    };

    assert_eq!(report.step, 1);
    assert_eq!(report.initial, hand("3s 7c Kd Ah As"));
    assert_eq!(report.cost, 2.0);
    assert_eq!(report.hands[0].cards, hand("Ac Ad 2c Ah As"));
    assert_eq!(report.hands[0].label, Some(Label::FourOfAKind));
    assert_eq!(report.hands[0].return_amount, 25.0);
    assert_eq!(report.hands[1].cards, hand("Kc Kh 5d Ah As"));
    assert_eq!(report.hands[1].label, Some(Label::TwoPair));
    assert_eq!(report.total_return, 27.0);
    assert_eq!(st.balance(), 125.0);
    assert_eq!(st.histogram()[&Label::FourOfAKind], 1);
    assert_eq!(st.histogram()[&Label::TwoPair], 1);
    assert_eq!(st.delta_series(), &[25.0]);
}

#[test]
fn balance_is_conserved_over_a_round() {
    let mut st = state(50.0, 0.25, 5, MultiplierMode::SuperTimesPay);
    let mut src = ScriptedShuffle::new().otherwise(TWO_PAIR);
    let mut holds = ScriptedHolds::default();
    let before = st.balance();
    let RoundOutcome::Completed(report) = play_round(&mut st, &mut src, &mut holds).unwrap()
    else {
        panic!("round should complete");
    };
    let expected = before - report.cost + report.total_return;
    assert!((st.balance() - expected).abs() < 1e-9);
    // 5 hands * 0.25 plus the 20% surcharge
    assert!((report.cost - 1.5).abs() < 1e-12);
}

#[test]
fn ultimate_x_multiplier_carries_to_the_next_round() {
    let mut st = state(100.0, 1.0, 1, MultiplierMode::UltimateX);
    let mut src = ScriptedShuffle::new().otherwise(TWO_PAIR);
    let mut holds = ScriptedHolds::default();

    let RoundOutcome::Completed(first) = play_round(&mut st, &mut src, &mut holds).unwrap() else {
        panic!("first round should complete");
    };
    assert_eq!(first.cost, 2.0);
    assert_eq!(first.hands[0].multiplier, 1);
    assert_eq!(first.total_return, 2.0);

    let RoundOutcome::Completed(second) = play_round(&mut st, &mut src, &mut holds).unwrap()
    else {
        panic!("second round should complete");
    };
    assert_eq!(second.hands[0].multiplier, 3);
    assert_eq!(second.total_return, 6.0);
    assert_eq!(st.previous_labels(), &[Some(Label::TwoPair)]);
}

#[test]
fn super_times_pay_spin_applies_to_every_hand() {
    let mut st = state(100.0, 1.0, 3, MultiplierMode::SuperTimesPay);
    // trigger roll, then below() maxed out keeps the weighted list in order
    let mut src = ScriptedShuffle::new().otherwise(TWO_PAIR).roll(14);
    for _ in 0..9 {
        src = src.roll(u32::MAX);
    }
    let mut holds = ScriptedHolds::default();
    let RoundOutcome::Completed(report) = play_round(&mut st, &mut src, &mut holds).unwrap() else {
        panic!("round should complete");
    };
    assert!(report.hands.iter().all(|h| h.multiplier == 10));
    assert_eq!(report.total_return, 60.0);
}

#[test]
fn uncovered_surcharge_takes_nothing() {
    // the base bet is covered, the 1.0 surcharge on top is not
    let mut st = state(1.5, 1.0, 1, MultiplierMode::UltimateX);
    let mut src = ScriptedShuffle::new().otherwise(TWO_PAIR);
    let mut holds = ScriptedHolds::default();
    let outcome = play_round(&mut st, &mut src, &mut holds).unwrap();
    assert_eq!(outcome, RoundOutcome::Exhausted);
    assert_eq!(st.balance(), 1.5);
    assert_eq!(st.steps(), 0);
    assert!(st.balance_series().is_empty());
}

#[test]
fn uncovered_bet_takes_nothing() {
    let mut st = state(0.5, 0.1, 10, MultiplierMode::None);
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    let mut holds = ScriptedHolds::default();
    let outcome = play_round(&mut st, &mut src, &mut holds).unwrap();
    assert_eq!(outcome, RoundOutcome::Exhausted);
    assert_eq!(st.balance(), 0.5);
}

#[test]
fn quit_forfeits_the_bet_and_records_nothing() {
    let mut st = state(10.0, 1.0, 2, MultiplierMode::None);
    let mut src = ScriptedShuffle::new().otherwise(TWO_PAIR);
    let mut holds = ScriptedHolds::of(&[HoldDecision::Quit]);
    let outcome = play_round(&mut st, &mut src, &mut holds).unwrap();
    assert_eq!(outcome, RoundOutcome::Quit);
    assert_eq!(st.balance(), 8.0);
    assert_eq!(st.steps(), 0);
    assert!(st.histogram().values().all(|&n| n == 0));
}

#[test]
fn phases_must_follow_the_state_machine() {
    let mut st = state(10.0, 1.0, 1, MultiplierMode::None);
    let mut src = ScriptedShuffle::new().otherwise(NOTHING);
    let mut round = Round::new(1);
    assert_eq!(round.phase(), RoundPhase::Idle);
    assert_eq!(
        round.draw(HoldMask::ALL),
        Err(GameError::OutOfPhase {
            expected: RoundPhase::Dealt,
            actual: RoundPhase::Idle
        })
    );
    assert!(round.bet(&mut st, &mut src).unwrap());
    round.deal(&mut src).unwrap();
    round.draw(HoldMask::NONE).unwrap();
    let report = round.evaluate(&mut st).unwrap();
    assert_eq!(round.phase(), RoundPhase::Evaluated);
    assert_eq!(report.hold, HoldMask::NONE);
    assert!(round.evaluate(&mut st).is_err());
}

#[test]
fn discarding_everything_replaces_all_five_cards() {
    let mut st = state(10.0, 1.0, 1, MultiplierMode::None);
    let mut src = ScriptedShuffle::new().then("2c 4d 7h 9s Jc Ts Js Qs Ks As");
    let mut holds = ScriptedHolds::of(&[HoldDecision::Hold(HoldMask::NONE)]);
    let RoundOutcome::Completed(report) = play_round(&mut st, &mut src, &mut holds).unwrap() else {
        panic!("round should complete");
    };
    assert_eq!(report.hands[0].label, Some(Label::RoyalFlush));
    assert_eq!(st.balance(), 809.0);
}
