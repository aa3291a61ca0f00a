//! Game-level state: one dealt pack spread across the containers.
//!
//! `Game` is the sole mutable root. It owns the seven tableau stacks,
//! the four foundation stacks, and the draw pile, plus two per-card
//! lookup tables the move engine maintains: which container each card is
//! in, and whether it is face-up. The union of all containers is always
//! the full 52-card set.
//!
//! A "new game" is a new `Game` value: construct one and swap it in;
//! there is no in-place reset.

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use num_bigint::BigUint;

use crate::card::{Card, CARDS_PER_DECK};
use crate::deal_code;
use crate::draw_pile::DrawPile;
use crate::error::EngineError;
use crate::events::GameObserver;
use crate::foundation::FoundationStack;
use crate::pack::Pack;
use crate::pile::Pile;
use crate::tableau::TableauStack;

/// Number of tableau stacks dealt at game start.
pub const NUM_TABLEAUS: usize = 7;
/// Number of foundation stacks (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// Identifies one of the game's containers.
///
/// Containers are addressed by variant tag plus index; all dispatch goes
/// through this id rather than through runtime type inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerId {
    /// Tableau stack `0..NUM_TABLEAUS`.
    Tableau(usize),
    /// Foundation stack `0..NUM_FOUNDATIONS`.
    Foundation(usize),
    /// The single draw/waste pile.
    DrawPile,
}

/// One complete game in play.
pub struct Game {
    pub(crate) tableaus: Vec<TableauStack>,
    pub(crate) foundations: [FoundationStack; NUM_FOUNDATIONS],
    pub(crate) draw_pile: DrawPile,
    /// The exact pack order this game was dealt from.
    pub(crate) initial_deck: [Card; DECK_LEN],
    /// Which container each card is in, by card index. A lookup cache
    /// owned by the engine; containers own the cards themselves.
    pub(crate) location: [Option<ContainerId>; DECK_LEN],
    /// Face-up state per card, by card index.
    pub(crate) face_up: [bool; DECK_LEN],
    pub(crate) in_progress: bool,
    pub(crate) started_at: Instant,
    pub(crate) observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Deal a new game from a freshly shuffled pack.
    pub fn new() -> Self {
        Self::from_pack(Pack::new())
    }

    /// Deal a new game deterministically from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_pack(Pack::from_seed(seed))
    }

    /// Deal a new game from an explicit pack order.
    pub fn with_deck(deck: &[Card]) -> Result<Self, EngineError> {
        Ok(Self::from_pack(Pack::with_deck(deck)?))
    }

    /// Deal the game identified by a deal code (see [`crate::deal_code`]).
    pub fn from_deal_code(code: &BigUint) -> Result<Self, EngineError> {
        let deck = deal_code::deck_from_deal_code(code)?;
        Self::with_deck(&deck)
    }

    fn from_pack(mut pack: Pack) -> Self {
        let mut initial_deck = crate::card::standard_deck();
        initial_deck.copy_from_slice(pack.cards());

        let mut game = Game {
            tableaus: (0..NUM_TABLEAUS).map(|_| TableauStack::new()).collect(),
            foundations: Default::default(),
            draw_pile: DrawPile::new(),
            initial_deck,
            location: [None; DECK_LEN],
            face_up: [false; DECK_LEN],
            in_progress: false,
            started_at: Instant::now(),
            observers: Vec::new(),
        };

        // Stack i receives i+1 cards, face-down, then its top is revealed.
        for i in 0..NUM_TABLEAUS {
            for _ in 0..=i {
                if let Some(card) = pack.draw_top() {
                    game.tableaus[i].pile.push(card);
                    game.location[card.index() as usize] = Some(ContainerId::Tableau(i));
                }
            }
            game.refresh_exposure(ContainerId::Tableau(i));
        }

        // The draw pile claims everything left, in pack order.
        game.draw_pile.claim_undealt_cards(&mut pack);
        for &card in game.draw_pile.pile().cards() {
            game.location[card.index() as usize] = Some(ContainerId::DrawPile);
        }
        game.refresh_exposure(ContainerId::DrawPile);

        info!(
            "dealt new game: {} tableau stacks, {} cards in the draw pile",
            NUM_TABLEAUS,
            game.draw_pile.pile().len()
        );
        game
    }

    /// Register an observer for engine notifications.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// The pack order this game was dealt from.
    pub fn initial_deck(&self) -> &[Card] {
        &self.initial_deck
    }

    /// The deal code identifying this game's deal (invertible via
    /// [`Game::from_deal_code`]).
    pub fn deal_code(&self) -> BigUint {
        deal_code::deal_code(&self.initial_deck)
    }

    /// Tableau stack `i`. Panics if `i >= NUM_TABLEAUS`.
    pub fn tableau(&self, i: usize) -> &TableauStack {
        &self.tableaus[i]
    }

    /// Foundation stack `i`. Panics if `i >= NUM_FOUNDATIONS`.
    pub fn foundation(&self, i: usize) -> &FoundationStack {
        &self.foundations[i]
    }

    /// The draw pile.
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub(crate) fn pile(&self, id: ContainerId) -> &Pile {
        match id {
            ContainerId::Tableau(i) => &self.tableaus[i].pile,
            ContainerId::Foundation(i) => &self.foundations[i].pile,
            ContainerId::DrawPile => &self.draw_pile.pile,
        }
    }

    pub(crate) fn pile_mut(&mut self, id: ContainerId) -> &mut Pile {
        match id {
            ContainerId::Tableau(i) => &mut self.tableaus[i].pile,
            ContainerId::Foundation(i) => &mut self.foundations[i].pile,
            ContainerId::DrawPile => &mut self.draw_pile.pile,
        }
    }

    /// The cards in the given container, bottom-to-top.
    pub fn cards_of(&self, id: ContainerId) -> &[Card] {
        self.pile(id).cards()
    }

    /// The top card of the given container, or `None` if it is empty.
    pub fn top_card_of(&self, id: ContainerId) -> Option<Card> {
        self.pile(id).top_card()
    }

    /// The legality predicate of the given container, applied to `card`.
    /// Pure; no side effects.
    pub fn accepts(&self, id: ContainerId, card: Card) -> bool {
        match id {
            ContainerId::Tableau(i) => self.tableaus[i].accepts(card),
            ContainerId::Foundation(i) => self.foundations[i].accepts(card),
            ContainerId::DrawPile => self.draw_pile.accepts(card),
        }
    }

    /// Which container the card is currently in. `None` only for cards
    /// still in the pack (transient during dealing).
    pub fn location_of(&self, card: Card) -> Option<ContainerId> {
        self.location[card.index() as usize]
    }

    /// Whether the card is currently face-up.
    pub fn is_face_up(&self, card: Card) -> bool {
        self.face_up[card.index() as usize]
    }

    /// Rotate the draw pile, exposing the next undealt card. Returns the
    /// newly exposed top card; `None` if the pile is empty.
    pub fn cycle_draw_pile(&mut self) -> Option<Card> {
        let exposed = self.draw_pile.cycle()?;
        self.refresh_exposure(ContainerId::DrawPile);
        debug!("cycled draw pile, exposed {exposed}");
        self.notify_state_changed();
        Some(exposed)
    }

    /// Total number of cards across all foundations.
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(|f| f.pile().len()).sum()
    }

    /// True when all four foundations are complete.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.is_complete())
    }

    /// Whether a game is currently underway (a move has been made and
    /// the game has not been won).
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Seconds since this game was dealt.
    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// The current score: 10 points per card on a foundation, minus one
    /// point per 10 seconds elapsed. Unclamped; long games go negative.
    pub fn score(&self) -> i64 {
        score_for(self.foundation_card_count(), self.elapsed_seconds())
    }

    /// Re-derive the exposure of a container after its contents changed.
    ///
    /// Tableaus and the draw pile expose exactly their top card; every
    /// other card there is face-down. Foundation cards stay face-up.
    pub(crate) fn refresh_exposure(&mut self, id: ContainerId) {
        match id {
            ContainerId::Tableau(_) | ContainerId::DrawPile => {
                let len = self.pile(id).len();
                for i in 0..len {
                    let card = self.pile(id).cards()[i];
                    self.face_up[card.index() as usize] = i + 1 == len;
                }
            }
            ContainerId::Foundation(_) => {
                if let Some(top) = self.pile(id).top_card() {
                    self.face_up[top.index() as usize] = true;
                }
            }
        }
    }

    pub(crate) fn notify_state_changed(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.game_state_changed();
        }
    }

    pub(crate) fn notify_won(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.game_won();
        }
    }
}

/// The scoring rule, as a pure function of the inputs.
pub fn score_for(foundation_cards: usize, elapsed_seconds: u64) -> i64 {
    foundation_cards as i64 * 10 - (elapsed_seconds / 10) as i64
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("tableaus", &self.tableaus)
            .field("foundations", &self.foundations)
            .field("draw_pile", &self.draw_pile)
            .field("in_progress", &self.in_progress)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn deal_shape_is_one_through_seven_plus_draw_pile() {
        let game = Game::from_seed(9);

        for i in 0..NUM_TABLEAUS {
            assert_eq!(game.tableau(i).pile().len(), i + 1, "tableau {i}");
        }
        assert_eq!(game.draw_pile().pile().len(), 24);
        for i in 0..NUM_FOUNDATIONS {
            assert!(game.foundation(i).pile().is_empty());
        }
        assert!(!game.in_progress());
        assert!(!game.is_won());
    }

    #[test]
    fn every_card_is_in_exactly_one_container_after_the_deal() {
        let game = Game::from_seed(3);

        let mut seen = [0u8; DECK_LEN];
        let mut containers: Vec<ContainerId> =
            (0..NUM_TABLEAUS).map(ContainerId::Tableau).collect();
        containers.extend((0..NUM_FOUNDATIONS).map(ContainerId::Foundation));
        containers.push(ContainerId::DrawPile);

        for id in containers {
            for &card in game.cards_of(id) {
                seen[card.index() as usize] += 1;
                assert_eq!(game.location_of(card), Some(id));
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn only_tops_are_face_up_after_the_deal() {
        let game = Game::from_seed(14);

        for i in 0..NUM_TABLEAUS {
            let cards = game.cards_of(ContainerId::Tableau(i));
            for (pos, &card) in cards.iter().enumerate() {
                assert_eq!(game.is_face_up(card), pos + 1 == cards.len());
            }
        }
        let top = game.top_card_of(ContainerId::DrawPile).unwrap();
        assert!(game.is_face_up(top));
    }

    #[test]
    fn equal_seeds_deal_identical_games() {
        let a = Game::from_seed(77);
        let b = Game::from_seed(77);
        assert_eq!(a.initial_deck(), b.initial_deck());
        for i in 0..NUM_TABLEAUS {
            assert_eq!(a.tableau(i).pile(), b.tableau(i).pile());
        }
        assert_eq!(a.draw_pile().pile(), b.draw_pile().pile());
    }

    #[test]
    fn cycling_the_draw_pile_exposes_the_previous_bottom() {
        let mut game = Game::from_seed(21);
        let bottom = game.cards_of(ContainerId::DrawPile)[0];

        let exposed = game.cycle_draw_pile().unwrap();
        assert_eq!(exposed, bottom);
        assert_eq!(game.top_card_of(ContainerId::DrawPile), Some(bottom));
        assert!(game.is_face_up(bottom));
    }

    #[test]
    fn score_is_ten_per_foundation_card_minus_time_penalty() {
        assert_eq!(score_for(0, 0), 0);
        assert_eq!(score_for(7, 35), 67);
        assert_eq!(score_for(52, 9), 520);
        // unclamped: long fruitless games go negative
        assert_eq!(score_for(0, 600), -60);
        assert_eq!(score_for(3, 1200), -90);
    }

    #[test]
    fn fresh_game_scores_zero_ish() {
        let game = Game::from_seed(1);
        assert_eq!(game.foundation_card_count(), 0);
        assert!(game.score() <= 0);
    }

    #[test]
    fn with_deck_rejects_a_malformed_deck() {
        let mut deck = crate::card::standard_deck().to_vec();
        deck[5] = Card::new(Suit::Hearts, Rank::Ace);
        assert!(matches!(
            Game::with_deck(&deck),
            Err(EngineError::InvalidDeck(_))
        ));
    }
}
