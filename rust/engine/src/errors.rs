use thiserror::Error;

use crate::round::RoundPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown game variant: {0}")]
    UnknownVariant(String),
    #[error("Unknown multiplier mode: {0}")]
    UnknownMultiplierMode(String),
    #[error("Unknown exit condition: {0}")]
    UnknownExitCondition(String),
    #[error("Unknown hold algorithm: {0}")]
    UnknownHoldAlgorithm(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Expected 5 cards, got {0}")]
    WrongCardCount(usize),
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(String),
    #[error("Deck ran out of cards")]
    DeckExhausted,
    #[error("Round is in phase {actual:?}, expected {expected:?}")]
    OutOfPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
}
