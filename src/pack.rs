//! The pack: the full 52-card set before dealing.
//!
//! A pack is created once per game, shuffled at construction, consumed
//! by the tableau deal, and the remainder is claimed by the draw pile.
//! It is never refilled; a new game builds a new pack.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card::{standard_deck, Card, CARDS_PER_DECK};
use crate::error::EngineError;

/// The undealt cards, in draw order (front of the sequence drawn first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    cards: Vec<Card>,
}

impl Pack {
    /// Build a pack shuffled with the given RNG.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut pack = Pack {
            cards: standard_deck().to_vec(),
        };
        pack.shuffle(rng, 1);
        pack
    }

    /// Build a pack shuffled with `rand::thread_rng()`.
    pub fn new() -> Self {
        Self::shuffled(&mut rand::thread_rng())
    }

    /// Build a pack deterministically from a seed. Equal seeds yield
    /// equal draw orders.
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    /// Build a pack with an explicit draw order.
    ///
    /// The deck must be a permutation of the full 52-card set; anything
    /// else is rejected.
    pub fn with_deck(deck: &[Card]) -> Result<Self, EngineError> {
        if deck.len() != CARDS_PER_DECK as usize {
            return Err(EngineError::InvalidDeck(format!(
                "expected {} cards, got {}",
                CARDS_PER_DECK,
                deck.len()
            )));
        }
        let mut seen = [false; CARDS_PER_DECK as usize];
        for card in deck {
            let idx = card.index() as usize;
            if seen[idx] {
                return Err(EngineError::InvalidDeck(format!(
                    "duplicate card {card}"
                )));
            }
            seen[idx] = true;
        }
        Ok(Pack {
            cards: deck.to_vec(),
        })
    }

    /// Shuffle the pack in place the given number of times.
    ///
    /// Each pass is a Fisher–Yates shuffle: walk `i` from the last index
    /// down to 1, swapping `cards[i]` with a uniformly random index in
    /// `[0, i]`.
    pub fn shuffle(&mut self, rng: &mut impl Rng, times: usize) {
        for _ in 0..times {
            for i in (1..self.cards.len()).rev() {
                let j = rng.gen_range(0..=i);
                self.cards.swap(i, j);
            }
        }
    }

    /// Remove and return the next card in draw order.
    ///
    /// Returns `None` when the pack is exhausted; callers treat that as
    /// "pack empty", not as an error.
    pub fn draw_top(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Number of cards still undrawn.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// The undrawn cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Pack {
    fn default() -> Self {
        Pack::new()
    }
}
