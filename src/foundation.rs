//! Foundation stacks: the four per-suit completion stacks.
//!
//! A foundation starts empty and is built Ace upwards in a single suit.
//! The suit is fixed by whichever Ace lands first; after that only the
//! next rank of the same suit is accepted. Completion means all thirteen
//! ranks present, Ace at the bottom.

use crate::card::{Card, Rank, NUM_RANKS};
use crate::pile::Pile;

/// One foundation stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoundationStack {
    pub(crate) pile: Pile,
}

impl FoundationStack {
    /// Create an empty foundation stack.
    pub fn new() -> Self {
        FoundationStack { pile: Pile::new() }
    }

    /// The underlying card sequence.
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Whether the single card `card` may be placed on this stack.
    ///
    /// An empty foundation takes only an Ace. A non-empty one takes the
    /// next rank up, and only in the suit every card already present
    /// shares. Run-length restrictions (foundations never take a cascade)
    /// are enforced by the move engine, not here.
    pub fn accepts(&self, card: Card) -> bool {
        match self.pile.top_card() {
            Some(top) => {
                self.pile.cards().iter().all(|c| c.suit() == card.suit())
                    && card.rank_number() == top.rank_number() + 1
            }
            None => card.rank() == Rank::Ace,
        }
    }

    /// True when this stack holds all thirteen ranks in order.
    ///
    /// Checked positionally against the canonical rank order rather than
    /// inferred from the accept rule, so a desynchronised stack can never
    /// read as complete.
    pub fn is_complete(&self) -> bool {
        let cards = self.pile.cards();
        cards.len() == NUM_RANKS as usize
            && cards
                .iter()
                .zip(Rank::ALL.iter())
                .all(|(card, &rank)| card.rank() == rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn foundation_with(cards: &[Card]) -> FoundationStack {
        let mut stack = FoundationStack::new();
        stack.pile.append(cards);
        stack
    }

    #[test]
    fn empty_foundation_accepts_only_an_ace() {
        let stack = FoundationStack::new();
        assert!(stack.accepts(Card::new(Suit::Hearts, Rank::Ace)));
        assert!(stack.accepts(Card::new(Suit::Spades, Rank::Ace)));
        assert!(!stack.accepts(Card::new(Suit::Hearts, Rank::Two)));
    }

    #[test]
    fn builds_up_in_a_single_suit() {
        let stack = foundation_with(&[Card::new(Suit::Hearts, Rank::Ace)]);

        assert!(!stack.accepts(Card::new(Suit::Hearts, Rank::Three)));
        assert!(stack.accepts(Card::new(Suit::Hearts, Rank::Two)));
        // right rank, wrong suit
        assert!(!stack.accepts(Card::new(Suit::Diamonds, Rank::Two)));
        // second ace
        assert!(!stack.accepts(Card::new(Suit::Spades, Rank::Ace)));
    }

    #[test]
    fn completion_requires_all_thirteen_ranks_in_order() {
        let full: Vec<Card> = Rank::ALL
            .iter()
            .map(|&r| Card::new(Suit::Clubs, r))
            .collect();
        assert!(foundation_with(&full).is_complete());

        assert!(!foundation_with(&full[..12]).is_complete());
        assert!(!FoundationStack::new().is_complete());

        // thirteen cards, but not in rank order
        let mut scrambled = full.clone();
        scrambled.swap(3, 4);
        assert!(!foundation_with(&scrambled).is_complete());
    }

    #[test]
    fn completed_foundation_accepts_nothing_more() {
        let full: Vec<Card> = Rank::ALL
            .iter()
            .map(|&r| Card::new(Suit::Clubs, r))
            .collect();
        let stack = foundation_with(&full);
        assert!(!stack.accepts(Card::new(Suit::Clubs, Rank::Ace)));
        assert!(!stack.accepts(Card::new(Suit::Spades, Rank::Ace)));
    }
}
