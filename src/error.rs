//! Crate-wide error type.
//!
//! Only genuinely exceptional conditions are errors: raw bytes that do
//! not decode to a suit/rank/card, a container asked about a card it does
//! not hold (caller-side state desynchronisation), and malformed decks or
//! deal codes. Routine user outcomes are never errors: an illegal move is
//! reported as `false` and an empty pack or pile as `None`.

use core::fmt;

use crate::card::Card;

/// Errors surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A raw suit value outside 0..=3; no colour can be derived for it.
    InvalidSuit(u8),
    /// A raw rank value outside 0..=12.
    InvalidRank(u8),
    /// A raw card index outside 0..=51.
    InvalidCardIndex(u8),
    /// `cards_from`/`detach` was asked about a card the container does
    /// not hold. Indicates a caller bug, not a game situation.
    CardNotFound(Card),
    /// A deck that is not a permutation of the 52-card set.
    InvalidDeck(String),
    /// A deal code at or above 52! (no deal corresponds to it).
    DealCodeOutOfRange,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidSuit(v) => {
                write!(f, "invalid suit value {v}: colour cannot be derived")
            }
            EngineError::InvalidRank(v) => write!(f, "invalid rank value {v}"),
            EngineError::InvalidCardIndex(v) => write!(f, "invalid card index {v}"),
            EngineError::CardNotFound(card) => {
                write!(f, "card {card} is not in this container")
            }
            EngineError::InvalidDeck(reason) => write!(f, "invalid deck: {reason}"),
            EngineError::DealCodeOutOfRange => {
                f.write_str("deal code is outside the range of valid deals")
            }
        }
    }
}

impl std::error::Error for EngineError {}
