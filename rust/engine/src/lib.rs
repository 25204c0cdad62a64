//! # vidpoker-engine: Multi-hand Video Poker Core
//!
//! Simulates multi-hand video poker sessions: one five-card deal is
//! replicated across N hands that share the held cards but draw
//! replacements independently. Supports Jacks-or-Better, Double Bonus and
//! Triple-Double-Bonus pay tables, Ultimate-X and Super-Times-Pay
//! multiplier overlays, and Monte-Carlo replication of whole sessions.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Shuffle seam and seeded ChaCha20 deck
//! - [`hand`] - Sorted/delta encoding of five-card hands
//! - [`classify`] - Per-variant ordered classifier cascades
//! - [`paytable`] - Variants, pay tables and payout computation
//! - [`multiplier`] - Ultimate-X and Super-Times-Pay overlays
//! - [`hold`] - Hold masks and the hold-decision seam
//! - [`round`] - Single-round state machine with hand replication
//! - [`session`] - Session bookkeeping and exit conditions
//! - [`montecarlo`] - Parallel replication of sessions
//! - [`config`] - Frozen session configuration
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use vidpoker_engine::cards::parse_hand;
//! use vidpoker_engine::classify::{classify, Label};
//! use vidpoker_engine::hand::encode;
//! use vidpoker_engine::paytable::{payout, Variant};
//!
//! let cards = parse_hand("Ts Js Qs Ks As").unwrap();
//! let label = classify(Variant::JacksOrBetter, &encode(cards));
//! assert_eq!(label, Some(Label::RoyalFlush));
//! assert_eq!(payout(Variant::JacksOrBetter, label, 1.0, 1), 800.0);
//! ```
//!
//! ## Deterministic Sessions
//!
//! Every shuffle and bonus roll goes through [`deck::ShuffleSource`], so a
//! seeded source reproduces a session exactly:
//!
//! ```rust
//! use vidpoker_engine::config::{ExitCondition, SessionConfig};
//! use vidpoker_engine::deck::SeededShuffle;
//! use vidpoker_engine::hand::EncodedHand;
//! use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};
//! use vidpoker_engine::session::Session;
//!
//! struct KeepAll;
//! impl HoldProvider for KeepAll {
//!     fn decide(&mut self, _: &EncodedHand) -> HoldDecision {
//!         HoldDecision::Hold(HoldMask::ALL)
//!     }
//!     fn name(&self) -> &str {
//!         "keep"
//!     }
//! }
//!
//! let config = SessionConfig {
//!     exit: Some(ExitCondition::ElapsedRounds { rounds: 5 }),
//!     ..SessionConfig::default()
//! };
//! let mut a = Session::new(config.clone()).unwrap();
//! let mut b = Session::new(config).unwrap();
//! a.run(&mut SeededShuffle::new_with_seed(7), &mut KeepAll).unwrap();
//! b.run(&mut SeededShuffle::new_with_seed(7), &mut KeepAll).unwrap();
//! assert_eq!(a.state().balance_series(), b.state().balance_series());
//! ```

pub mod cards;
pub mod classify;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod hold;
pub mod montecarlo;
pub mod multiplier;
pub mod paytable;
pub mod round;
pub mod session;
