//! Human-readable rendering of a game in play.
//!
//! This module renders a `Game` as multi-line text using the compact
//! `Card` representation. Face-down cards are shown as "XX" and face-up
//! cards with their `short_str()` rank/suit code such as "AH", "7C",
//! "TD".
//!
//! The intent is a stable, readable CLI representation that is useful
//! for debugging and for logging positions; nothing parses it back.

use std::fmt;

use crate::card::Card;
use crate::game::{ContainerId, Game, NUM_FOUNDATIONS, NUM_TABLEAUS};

/// Format a single card for display, either face-up or face-down.
pub fn format_card_visible(card: Card, face_up: bool) -> String {
    if face_up {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render only the foundation row.
///
/// Only the top card of each foundation is shown, matching typical
/// Klondike presentations:
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(game: &Game) -> String {
    let mut s = String::new();
    s.push_str("Foundations: ");
    for i in 0..NUM_FOUNDATIONS {
        match game.top_card_of(ContainerId::Foundation(i)) {
            Some(top) => {
                s.push('[');
                s.push_str(&top.short_str());
                s.push_str("] ");
            }
            None => s.push_str("[  ] "),
        }
    }
    s.trim_end().to_string()
}

/// Render the draw pile on a single line: the face-up top card if any,
/// plus the total count. Cards below the top are not revealed.
pub fn render_draw_pile(game: &Game) -> String {
    let count = game.cards_of(ContainerId::DrawPile).len();
    match game.top_card_of(ContainerId::DrawPile) {
        Some(top) => format!("Draw pile: [{}] ({} cards)", top.short_str(), count),
        None => "Draw pile: [empty]".to_string(),
    }
}

/// Render all tableau stacks as columns, one row per depth.
///
/// Each cell is three characters wide. Rows run bottom-to-top within
/// each stack, so the last printed row of a column is its playable edge
/// (the card you would pick up in a physical game). Shorter columns
/// simply stop early.
pub fn render_tableaus(game: &Game) -> String {
    let mut s = String::new();

    s.push_str("Tableaus:\n");
    s.push_str("      ");
    for i in 0..NUM_TABLEAUS {
        s.push_str(&format!(" T{} ", i + 1));
    }
    s.push('\n');

    let max_height = (0..NUM_TABLEAUS)
        .map(|i| game.cards_of(ContainerId::Tableau(i)).len())
        .max()
        .unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for i in 0..NUM_TABLEAUS {
            let cards = game.cards_of(ContainerId::Tableau(i));
            match cards.get(row) {
                Some(&card) => {
                    let rep = format_card_visible(card, game.is_face_up(card));
                    s.push_str(&format!("{:>3} ", rep));
                }
                None => s.push_str("    "),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the full position: foundations, draw pile, and tableaus.
pub fn render_game(game: &Game) -> String {
    let mut s = String::new();

    s.push_str(&render_foundations(game));
    s.push('\n');
    s.push_str(&render_draw_pile(game));
    s.push('\n');
    s.push('\n');
    s.push_str(&render_tableaus(game));

    s
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game(self))
    }
}
