//! Tableau stacks: the seven main playing stacks.
//!
//! Placement rule: an empty stack takes only a King; otherwise the
//! incoming card must be exactly one rank below the top card and of the
//! opposite colour. Face-up bookkeeping (only the top card of a tableau
//! is ever face-up) is handled by the move engine, which is the only
//! code that mutates piles.

use crate::card::{is_one_lower_opposite_colour, Card, Rank};
use crate::pile::Pile;

/// One tableau stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauStack {
    pub(crate) pile: Pile,
}

impl TableauStack {
    /// Create an empty tableau stack.
    pub fn new() -> Self {
        TableauStack { pile: Pile::new() }
    }

    /// The underlying card sequence.
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Whether `card` may be placed on this stack right now.
    ///
    /// Pure: reads the current top card and nothing else.
    pub fn accepts(&self, card: Card) -> bool {
        match self.pile.top_card() {
            Some(top) => is_one_lower_opposite_colour(card, top),
            None => card.rank() == Rank::King,
        }
    }
}
