//! The move engine: validation and execution of card moves.
//!
//! All container mutation funnels through `attempt_move`. A move takes
//! the grabbed card plus everything stacked above it (the run), asks the
//! target container whether it accepts the bottom card of the run, and
//! on acceptance detaches the run from its source and appends it to the
//! target in one all-or-nothing step. Observers are notified before
//! (vetoable) and after.
//!
//! Illegal moves are the routine outcome of play and are reported as
//! `Ok(false)` with no state change. `Err` means the engine was handed a
//! card whose cached location is stale, which is a caller bug.

use log::{debug, info};

use crate::card::Card;
use crate::error::EngineError;
use crate::events::MoveEvent;
use crate::game::{ContainerId, Game, NUM_FOUNDATIONS};

impl Game {
    /// Whether moving `card` (with any cards riding above it) to
    /// `target` would be accepted right now. Pure; no notifications.
    pub fn move_allowed(&self, card: Card, target: ContainerId) -> bool {
        let run_len = match self.location_of(card) {
            Some(source) => match self.pile(source).position_of(card) {
                Some(idx) => self.pile(source).len() - idx,
                None => return false,
            },
            None => 1,
        };
        if matches!(target, ContainerId::Foundation(_)) && run_len > 1 {
            return false;
        }
        self.accepts(target, card)
    }

    /// Attempt to move `card` to `target`.
    ///
    /// The run is the contiguous sequence from `card` through the top of
    /// its container; only the bottom card of the run is checked against
    /// the target, since the rest were already stacked on it. Returns
    /// `Ok(true)` on success, `Ok(false)` for a rejected or vetoed move
    /// (no state change), and `Err` if `card`'s cached location does not
    /// actually hold it.
    pub fn attempt_move(
        &mut self,
        card: Card,
        target: ContainerId,
    ) -> Result<bool, EngineError> {
        let source = self.location_of(card);
        let run = match source {
            Some(src) => self.pile(src).cards_from(card)?,
            // Straight from the pack (initial deal); nothing to detach.
            None => vec![card],
        };

        // Foundations take single cards only, regardless of `accepts`.
        if matches!(target, ContainerId::Foundation(_)) && run.len() > 1 {
            debug!("rejected {card} -> {target:?}: cascades cannot move to a foundation");
            return Ok(false);
        }

        let event = MoveEvent {
            card,
            target,
            source,
        };
        if !self.notify_before_move(&event) {
            debug!("vetoed {card} -> {target:?}");
            return Ok(false);
        }

        if !self.accepts(target, run[0]) {
            debug!("rejected {card} -> {target:?}");
            return Ok(false);
        }

        if let Some(src) = source {
            self.pile_mut(src).detach(&run);
            self.refresh_exposure(src);
        }
        self.pile_mut(target).append(&run);
        for &moved in &run {
            self.location[moved.index() as usize] = Some(target);
        }
        self.refresh_exposure(target);
        debug!(
            "moved {card} ({} card run) {source:?} -> {target:?}",
            run.len()
        );

        for &moved in &run {
            self.notify_after_move(&MoveEvent {
                card: moved,
                target,
                source,
            });
        }
        self.update_game_state();
        Ok(true)
    }

    /// Try to move `card` to a foundation, scanning the four stacks in
    /// creation order and taking the first that accepts it.
    ///
    /// Backs the "double-activate a card" convenience action. Returns
    /// `Ok(false)` when no foundation accepts the card.
    pub fn auto_move_to_foundation(&mut self, card: Card) -> Result<bool, EngineError> {
        for i in 0..NUM_FOUNDATIONS {
            if self.foundation(i).accepts(card) {
                return self.attempt_move(card, ContainerId::Foundation(i));
            }
        }
        Ok(false)
    }

    fn notify_before_move(&mut self, event: &MoveEvent) -> bool {
        for observer in self.observers.iter_mut() {
            if !observer.before_move(event) {
                return false;
            }
        }
        true
    }

    fn notify_after_move(&mut self, event: &MoveEvent) {
        for observer in self.observers.iter_mut() {
            observer.after_move(event);
        }
    }

    /// Recompute the win state after a successful move. `in_progress`
    /// flips true on the first move and false exactly once on the move
    /// that wins the game; repeated checks of a won game stay quiet.
    fn update_game_state(&mut self) {
        if self.is_won() {
            if self.in_progress {
                self.in_progress = false;
                info!("game won");
                self.notify_won();
            }
        } else {
            self.in_progress = true;
        }
        self.notify_state_changed();
    }
}
