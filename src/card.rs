//! Card, Suit, Rank, and Colour types for a standard 52-card deck.
//!
//! - `Card` is a compact 1-byte identity (0..=51); face-up state and the
//!   container a card sits in are tracked by the `Game`, not here.
//! - `Suit` and `Rank` give human-readable structure on top of that.

use core::fmt;

use crate::error::EngineError;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// A playing card represented compactly as an index in 0..=51.
///
/// The mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King.
///
/// Identity is (suit, rank): there is exactly one valid index per
/// combination, and the inner byte is private so every `Card` in
/// circulation is a real card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card(u8);

/// The four suits, in the game's fixed enumeration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// The colour of a suit: Hearts/Diamonds are red, Clubs/Spades black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Colour {
    Red,
    Black,
}

/// The thirteen ranks in a standard deck.
///
/// Ace is the lowest rank (0); `number()` gives 1..=13 as a convenience.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Card {
    /// Create a new card from a suit and rank.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit as u8 * NUM_RANKS + rank as u8)
    }

    /// Create a card from a raw index, rejecting anything outside 0..=51.
    #[inline]
    pub fn try_from_index(index: u8) -> Result<Self, EngineError> {
        if index < CARDS_PER_DECK {
            Ok(Card(index))
        } else {
            Err(EngineError::InvalidCardIndex(index))
        }
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Return the suit of this card.
    #[inline]
    pub fn suit(self) -> Suit {
        // The inner byte is validated at construction, so this cannot fail.
        match Suit::try_from_u8(self.0 / NUM_RANKS) {
            Ok(s) => s,
            Err(_) => unreachable!("card index out of range"),
        }
    }

    /// Return the rank of this card.
    #[inline]
    pub fn rank(self) -> Rank {
        match Rank::try_from_u8(self.0 % NUM_RANKS) {
            Ok(r) => r,
            Err(_) => unreachable!("card index out of range"),
        }
    }

    /// Return the colour of this card, derived from its suit.
    #[inline]
    pub fn colour(self) -> Colour {
        self.suit().colour()
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank() as u8 + 1
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        let r = match self.rank() {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };
        let s = self.suit().short_char();
        format!("{r}{s}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
    ];

    /// Construct a suit from a small integer 0..=3.
    ///
    /// The colour of a card is not recoverable for values outside the
    /// fixed enumeration, so these are rejected at this boundary rather
    /// than being allowed to circulate.
    #[inline]
    pub fn try_from_u8(v: u8) -> Result<Self, EngineError> {
        match v {
            0 => Ok(Suit::Hearts),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Clubs),
            3 => Ok(Suit::Spades),
            _ => Err(EngineError::InvalidSuit(v)),
        }
    }

    /// The colour of this suit.
    #[inline]
    pub fn colour(self) -> Colour {
        match self {
            Suit::Hearts | Suit::Diamonds => Colour::Red,
            Suit::Clubs | Suit::Spades => Colour::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from a small integer 0..=12.
    #[inline]
    pub fn try_from_u8(v: u8) -> Result<Self, EngineError> {
        Rank::ALL
            .get(v as usize)
            .copied()
            .ok_or(EngineError::InvalidRank(v))
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Tableau placement rule: can `upper` be placed on `lower`?
///
/// True if `upper` is exactly one rank lower than `lower` and the two
/// cards have opposite colours.
#[inline]
pub fn is_one_lower_opposite_colour(upper: Card, lower: Card) -> bool {
    upper.rank_number() + 1 == lower.rank_number() && upper.colour() != lower.colour()
}

/// Generate a standard 52-card deck in a fixed order.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order.
pub fn standard_deck() -> [Card; CARDS_PER_DECK as usize] {
    let mut cards = [Card(0); CARDS_PER_DECK as usize];
    let mut i = 0usize;
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    cards
}
