//! Ordered pile of cards: the sequence primitive shared by every
//! container type (tableau stacks, foundation stacks, the draw pile).
//!
//! Cards are stored bottom-to-top: index 0 is the bottom of the pile and
//! the last element is the top. A pile knows nothing about legality; the
//! placement rules live with the concrete container types and the move
//! engine.

use crate::card::Card;
use crate::error::EngineError;

/// An ordered sequence of cards, bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    pub fn new() -> Self {
        Pile { cards: Vec::new() }
    }

    /// Number of cards in the pile.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the pile holds no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The full sequence, bottom-to-top.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card, or `None` for an empty pile. Does not mutate.
    #[inline]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Index of `card` within this pile, bottom-based.
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// The contiguous run starting at `card` through the top of the pile,
    /// inclusive, in pile order.
    ///
    /// Fails with `CardNotFound` if the card is not in this pile; that is
    /// a caller bug (stale location), not a game situation.
    pub fn cards_from(&self, card: Card) -> Result<Vec<Card>, EngineError> {
        match self.position_of(card) {
            Some(idx) => Ok(self.cards[idx..].to_vec()),
            None => Err(EngineError::CardNotFound(card)),
        }
    }

    /// Push a single card onto the top.
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a run to the top, preserving its order.
    pub(crate) fn append(&mut self, run: &[Card]) {
        self.cards.extend_from_slice(run);
    }

    /// Remove the given run from the top of the pile.
    ///
    /// The move engine only ever detaches a run it obtained from
    /// `cards_from`, so the run is a suffix by construction; this is
    /// asserted in debug builds rather than re-validated.
    pub(crate) fn detach(&mut self, run: &[Card]) {
        debug_assert!(run.len() <= self.cards.len());
        let keep = self.cards.len() - run.len();
        debug_assert_eq!(&self.cards[keep..], run, "detached run must be a suffix");
        self.cards.truncate(keep);
    }

    /// Remove and return the bottom card, or `None` for an empty pile.
    pub(crate) fn remove_bottom(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }
}
