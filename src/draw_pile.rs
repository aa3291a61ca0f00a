//! The draw pile: every card left in the pack after the tableau deal.
//!
//! The pile is seeded once per game, in pack order, and is only ever
//! reordered by `cycle`, which rotates the bottom card to the top so the
//! player can work through the undealt cards indefinitely. Nothing is
//! ever dropped onto the draw pile.

use crate::card::Card;
use crate::pack::Pack;
use crate::pile::Pile;

/// The combined draw/waste pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawPile {
    pub(crate) pile: Pile,
}

impl DrawPile {
    /// Create an empty draw pile.
    pub fn new() -> Self {
        DrawPile { pile: Pile::new() }
    }

    /// The underlying card sequence.
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Cards cannot be dropped onto the draw pile; they only enter via
    /// the claim at deal time.
    pub fn accepts(&self, _card: Card) -> bool {
        false
    }

    /// Take every card remaining in the pack, in pack order. The first
    /// remaining pack card ends up at the bottom of the pile.
    pub(crate) fn claim_undealt_cards(&mut self, pack: &mut Pack) {
        while let Some(card) = pack.draw_top() {
            self.pile.push(card);
        }
    }

    /// Rotate the bottom card to the top, exposing the next card.
    ///
    /// No-op on an empty pile. After `len` cycles the pile is back in
    /// its original order.
    pub(crate) fn cycle(&mut self) -> Option<Card> {
        let bottom = self.pile.remove_bottom()?;
        self.pile.push(bottom);
        self.pile.top_card()
    }
}
