use thiserror::Error;

use crate::cards::Card;

/// Failures raised by the evaluation core.
///
/// Every variant is a caller precondition violation; the core performs no I/O
/// and has nothing to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Expected exactly {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Deck has {available} cards, {needed} required to complete a trial")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("At most 5 community cards allowed, got {0}")]
    TooManyCommunityCards(usize),
    #[error("Trial count must be >= 1")]
    InvalidTrials,
    #[error("Worker count must be >= 1")]
    InvalidWorkers,
    #[error("Invalid range: low {low} > high {high}")]
    InvalidRange { low: i64, high: i64 },
    #[error("Invalid card: '{0}'")]
    InvalidCard(String),
}
