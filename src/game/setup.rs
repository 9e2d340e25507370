use tracing::{info, warn};

use crate::card::DECK_SIZE;
use crate::cue::AudioCue;
use crate::deck::{DeckManager, Pile, Side};
use crate::error::{PileError, SetupError};
use crate::result::{Score, SetupReport};

use super::{Game, GameState, Table};

/// Brings the store back to one full, shuffled deck with nothing outstanding.
///
/// Checks the deck once and regenerates it if it is not one full deck, then
/// checks again and gives up instead of looping. Returns whether a
/// regeneration happened.
fn ensure_full_deck(store: &mut DeckManager) -> Result<bool, PileError> {
    let mut repaired = false;
    if let Err(err) = store.validate() {
        warn!(%err, "deck failed the full-deck check, regenerating");
        store.remove_all_and_create_new();
        store.validate()?;
        repaired = true;
    }

    if store.count_deck() != DECK_SIZE {
        store.shuffle_all_decks_together();
    }
    Ok(repaired)
}

/// Deals the whole deck out, alternating by the parity of the cards left:
/// an even count goes to the player, an odd count to the opponent.
fn split_deck(store: &mut DeckManager) -> Result<(), PileError> {
    while let Some(top) = store.top(Pile::Deck) {
        let side = if store.count_deck() % 2 == 0 {
            Side::Player
        } else {
            Side::Opponent
        };
        store.move_card(top, Pile::Deck, Pile::Hand(side))?;
    }
    Ok(())
}

impl Game {
    /// Starts a fresh session: resets the score, makes sure the store holds
    /// a full deck, shuffles it, and splits it between the two hands.
    ///
    /// # Errors
    ///
    /// Returns an error if a session is already running, another request is
    /// being processed, or the store cannot be brought back to a full deck.
    pub fn start(&self) -> Result<SetupReport, SetupError> {
        let Some(_gate) = self.gate.try_lock() else {
            return Err(SetupError::Busy);
        };

        let mut state = self.state.lock();
        if !matches!(*state, GameState::Idle | GameState::MainMenu) {
            return Err(SetupError::InvalidState);
        }

        let mut store = self.store.lock();
        let report = self.set_up_session(&mut store)?;
        drop(store);

        *self.score.lock() = Score::default();
        *self.table.lock() = Table::default();
        *state = GameState::AwaitingDeal;

        info!(
            player = report.counts.player_hand,
            opponent = report.counts.opponent_hand,
            repaired = report.repaired,
            "session started"
        );
        Ok(report)
    }

    /// Validates the store, assigns card values, shuffles, and splits the
    /// deck. Leaves the score alone.
    pub(super) fn set_up_session(&self, store: &mut DeckManager) -> Result<SetupReport, PileError> {
        let repaired = ensure_full_deck(store)?;
        store.assign_values();
        store.shuffle_deck();
        split_deck(store)?;

        Ok(SetupReport {
            counts: store.counts(),
            repaired,
            cue: self.options.cues.event(AudioCue::Shuffle),
            pause: self.options.wait_after_shuffle,
            affordances: GameState::AwaitingDeal.affordances(),
        })
    }
}
