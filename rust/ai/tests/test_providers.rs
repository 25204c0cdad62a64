use vidpoker_ai::{create_hold_provider, HoldAlgorithm};
use vidpoker_engine::cards::parse_hand;
use vidpoker_engine::config::{ExitCondition, SessionConfig};
use vidpoker_engine::deck::SeededShuffle;
use vidpoker_engine::hand::encode;
use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};
use vidpoker_engine::montecarlo::run_monte_carlo;
use vidpoker_engine::session::{Session, SessionEnd};

#[test]
fn selectors_accept_short_and_long_names() {
    assert_eq!("s1".parse::<HoldAlgorithm>().unwrap(), HoldAlgorithm::Strategy1);
    assert_eq!("R".parse::<HoldAlgorithm>().unwrap(), HoldAlgorithm::Random);
    assert_eq!("keep-all".parse::<HoldAlgorithm>().unwrap(), HoldAlgorithm::KeepAll);
    assert_eq!("d".parse::<HoldAlgorithm>().unwrap(), HoldAlgorithm::DiscardAll);
    assert!("optimal".parse::<HoldAlgorithm>().is_err());
}

#[test]
fn factory_builds_named_providers() {
    let hand = encode(parse_hand("2c 4d 7h 9s Jc").unwrap());
    let mut keep = create_hold_provider(HoldAlgorithm::KeepAll, 0);
    let mut discard = create_hold_provider(HoldAlgorithm::DiscardAll, 0);
    assert_eq!(keep.decide(&hand), HoldDecision::Hold(HoldMask::ALL));
    assert_eq!(discard.decide(&hand), HoldDecision::Hold(HoldMask::NONE));
    assert_eq!(create_hold_provider(HoldAlgorithm::Random, 1).name(), "random");
    assert_eq!(create_hold_provider(HoldAlgorithm::Strategy1, 1).name(), "strategy1");
}

#[test]
fn strategy1_plays_a_full_session() {
    let config = SessionConfig {
        exit: Some(ExitCondition::ElapsedRounds { rounds: 100 }),
        ..SessionConfig::default()
    };
    let mut session = Session::new(config).unwrap();
    let mut provider = create_hold_provider(HoldAlgorithm::Strategy1, 0);
    let end = session
        .run(&mut SeededShuffle::new_with_seed(3), provider.as_mut())
        .unwrap();
    assert!(matches!(
        end,
        SessionEnd::ElapsedRounds | SessionEnd::BankrollExhausted
    ));
    let counted: u64 = session.state().histogram().values().sum();
    assert!(counted <= 100 * 10);
}

#[test]
fn every_algorithm_runs_under_monte_carlo() {
    let config = SessionConfig {
        hand_count: 3,
        exit: Some(ExitCondition::ElapsedRounds { rounds: 20 }),
        ..SessionConfig::default()
    };
    for alg in [
        HoldAlgorithm::Strategy1,
        HoldAlgorithm::Random,
        HoldAlgorithm::KeepAll,
        HoldAlgorithm::DiscardAll,
    ] {
        let summary = run_monte_carlo(&config, 4, 10, |seed| -> Box<dyn HoldProvider> {
            create_hold_provider(alg, seed)
        })
        .unwrap();
        assert_eq!(summary.runs, 4, "{alg}");
    }
}
