//! Notifications from the engine to its host (typically a UI layer).
//!
//! The engine never renders or blocks; it reports what happened through
//! registered observers. `before_move` is the one cancellable hook: any
//! observer returning `false` vetoes the move before any state changes.
//! Everything else is fire-and-forget, delivered synchronously from
//! inside the mutating call.

use crate::card::Card;
use crate::game::ContainerId;

/// The payload of a move notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    /// The card being (or just) moved. For a cascade, `after_move` fires
    /// once per card; `before_move` fires once, for the grabbed card.
    pub card: Card,
    /// Where the card is headed.
    pub target: ContainerId,
    /// Where the card came from; `None` for cards placed straight from
    /// the pack.
    pub source: Option<ContainerId>,
}

/// Host-side listener for engine notifications.
///
/// All methods have no-op defaults so an observer only implements what
/// it cares about.
pub trait GameObserver {
    /// Fired before any state changes. Return `false` to veto the move;
    /// the engine then aborts with no state change.
    fn before_move(&mut self, event: &MoveEvent) -> bool {
        let _ = event;
        true
    }

    /// Fired once per moved card, after the move completed.
    fn after_move(&mut self, event: &MoveEvent) {
        let _ = event;
    }

    /// Fired exactly once when the game transitions into the won state.
    fn game_won(&mut self) {}

    /// Fired after every successful move and every draw-pile cycle, so a
    /// polling-free host can refresh its view.
    fn game_state_changed(&mut self) {}
}
