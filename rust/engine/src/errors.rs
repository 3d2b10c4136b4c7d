use thiserror::Error;

use crate::seat::SeatId;

/// Errors surfaced by the engine. Everything except `DeckExhausted` is a
/// rejection of the triggering call: state is left untouched and the
/// caller can show the reason to the acting party. `DeckExhausted` means
/// the hand is corrupt and must be discarded without settling the pot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("it is not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: SeatId, actual: SeatId },

    #[error("invalid action: {reason}")]
    InvalidAction { reason: &'static str },

    #[error("insufficient funds: action needs {required} chips, stack has {stack}")]
    InsufficientFunds { required: u32, stack: u32 },

    #[error("hand already settled")]
    HandAlreadySettled,

    #[error("a hand is already in progress")]
    HandInProgress,

    #[error("not enough funded seats to start a hand ({available} available)")]
    NotEnoughSeats { available: usize },

    #[error("a table needs 2 to 9 seats (got {count})")]
    InvalidSeatCount { count: usize },

    #[error("bad deck: {reason}")]
    BadDeck { reason: &'static str },

    #[error("deck exhausted while dealing")]
    DeckExhausted,
}
