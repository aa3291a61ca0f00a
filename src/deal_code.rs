//! Deal codes: a compact numeric name for a deal.
//!
//! Every ordering of the 52-card pack maps to exactly one integer in
//! `0..52!` and back, via the factorial number system (Lehmer code).
//! Digit `i` counts how many cards after position `i` rank below the
//! card at position `i`, and carries place value `(51 - i)!`. Code 0 is
//! the pack in canonical new-deck order.
//!
//! The codes are stable across versions and platforms, so a game can be
//! shared, logged, and replayed exactly by quoting one (big) number.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::card::{standard_deck, Card, CARDS_PER_DECK};
use crate::error::EngineError;

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// The number of distinct deals: 52!.
pub fn deal_count() -> BigUint {
    (1..=DECK_LEN as u64).map(BigUint::from).product()
}

/// Encode a pack order as its deal code.
pub fn deal_code(deck: &[Card; DECK_LEN]) -> BigUint {
    let mut code = BigUint::zero();
    for i in 0..DECK_LEN {
        let digit = deck[i + 1..]
            .iter()
            .filter(|c| c.index() < deck[i].index())
            .count();
        code = code * (DECK_LEN - i) as u64 + digit as u64;
    }
    code
}

/// Decode a deal code back into the pack order it names.
///
/// Fails with [`EngineError::DealCodeOutOfRange`] for codes at or above
/// 52!.
pub fn deck_from_deal_code(code: &BigUint) -> Result<[Card; DECK_LEN], EngineError> {
    if *code >= deal_count() {
        return Err(EngineError::DealCodeOutOfRange);
    }

    // Peel digits off least-significant-first; digit i has radix 52 - i.
    let mut digits = [0usize; DECK_LEN];
    let mut rest = code.clone();
    for i in (0..DECK_LEN).rev() {
        let radix = BigUint::from((DECK_LEN - i) as u64);
        digits[i] = (&rest % &radix)
            .to_usize()
            .ok_or(EngineError::DealCodeOutOfRange)?;
        rest /= &radix;
    }

    // Digit i selects the i-th dealt card among those not yet used.
    let mut remaining: Vec<Card> = standard_deck().to_vec();
    let mut deck = standard_deck();
    for (i, &digit) in digits.iter().enumerate() {
        deck[i] = remaining.remove(digit);
    }
    Ok(deck)
}
