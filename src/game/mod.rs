//! Round engine and session state.

use alloc::string::String;

use crate::sync::Mutex;

use crate::deck::{CardId, DeckManager, PileCounts};
use crate::options::GameOptions;
use crate::result::{Affordances, DealtCard, Score};

mod restart;
mod round;
mod setup;
pub mod state;

pub use state::GameState;

/// Cards revealed on the table and the message shown for them.
#[derive(Debug, Clone, Default)]
struct Table {
    revealed: Option<(CardId, CardId)>,
    message: String,
}

/// A two-player War game driven by discrete requests.
///
/// The game owns its [`DeckManager`]; nothing is shared between games.
/// Requests (`start`, `deal`, `resolve`, `restart`, `main_menu`) run to
/// completion one at a time: a request arriving while another one is being
/// processed is rejected with a `Busy` error.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The pile store for this session.
    pub store: Mutex<DeckManager>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Running score. Survives restarts, reset by [`Game::start`].
    pub score: Mutex<Score>,
    /// Revealed cards and the current message.
    table: Mutex<Table>,
    /// Held for the duration of each request.
    gate: Mutex<()>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_store(options, DeckManager::new(seed))
    }

    /// Creates a new game around an existing store.
    #[must_use]
    pub fn with_store(options: GameOptions, store: DeckManager) -> Self {
        Self {
            options,
            store: Mutex::new(store),
            state: Mutex::new(GameState::Idle),
            score: Mutex::new(Score::default()),
            table: Mutex::new(Table::default()),
            gate: Mutex::new(()),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the controls to offer in the current state.
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        self.state().affordances()
    }

    /// Returns the running score.
    #[must_use]
    pub fn score(&self) -> Score {
        *self.score.lock()
    }

    /// Returns the size of every pile.
    #[must_use]
    pub fn counts(&self) -> PileCounts {
        self.store.lock().counts()
    }

    /// Returns the message for the last resolved round or game, empty while
    /// no result is showing.
    #[must_use]
    pub fn message(&self) -> String {
        self.table.lock().message.clone()
    }

    /// Returns the cards currently revealed on the table, player first.
    #[must_use]
    pub fn revealed(&self) -> Option<(DealtCard, DealtCard)> {
        let (player, opponent) = self.table.lock().revealed?;
        let store = self.store.lock();
        Some((
            DealtCard {
                id: player,
                card: *store.card(player)?,
            },
            DealtCard {
                id: opponent,
                card: *store.card(opponent)?,
            },
        ))
    }
}
