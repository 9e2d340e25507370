use tracing::info;

use crate::error::{MenuError, RestartError};
use crate::result::SetupReport;

use super::round::retire;
use super::{Game, GameState, Table};

impl Game {
    /// Plays again: clears the table, gathers every card back into the
    /// deck, shuffles, and splits it again.
    ///
    /// The running score carries over; only [`Game::start`] resets it.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running, a round is mid-reveal,
    /// another request is being processed, or the store cannot be brought
    /// back to a full deck.
    pub fn restart(&self) -> Result<SetupReport, RestartError> {
        let Some(_gate) = self.gate.try_lock() else {
            return Err(RestartError::Busy);
        };

        let mut state = self.state.lock();
        if !matches!(
            *state,
            GameState::AwaitingDeal | GameState::RoundResolved | GameState::GameOver
        ) {
            return Err(RestartError::InvalidState);
        }

        let mut store = self.store.lock();
        let mut table = self.table.lock();
        if let Some((player, opponent)) = table.revealed {
            retire(&mut store, player, opponent)?;
        }
        *table = Table::default();
        drop(table);

        store.shuffle_all_decks_together();
        let report = self.set_up_session(&mut store)?;
        drop(store);

        *state = GameState::AwaitingDeal;
        info!(
            player = report.counts.player_hand,
            opponent = report.counts.opponent_hand,
            "game restarted"
        );
        Ok(report)
    }

    /// Leaves the table after a game is over.
    ///
    /// A new session can be started from the main menu with
    /// [`Game::start`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not over or another request is being
    /// processed.
    pub fn main_menu(&self) -> Result<(), MenuError> {
        let Some(_gate) = self.gate.try_lock() else {
            return Err(MenuError::Busy);
        };

        let mut state = self.state.lock();
        if *state != GameState::GameOver {
            return Err(MenuError::InvalidState);
        }
        *state = GameState::MainMenu;
        info!("returned to main menu");
        Ok(())
    }
}
