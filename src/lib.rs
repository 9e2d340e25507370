//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate is built from two layers:
//!
//! - [`DeckManager`], a pile store that owns one 52-card deck and tracks
//!   every card across the deck, discard, in-use, and two hand piles.
//! - [`Game`], the round engine that splits the deck between the player and
//!   the opponent, reveals one card per side per round, scores strict wins,
//!   and decides the game on the running score once a hand runs out.
//!
//! Presentation is left to the caller: every transition returns plain data
//! (pile counts, revealed cards, outcome, message, and the [`AudioCue`] to
//! play).
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//!
//! while game.state() != GameState::GameOver {
//!     game.play_round().unwrap();
//! }
//!
//! let score = game.score();
//! assert!(score.player + score.opponent <= 25);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod cue;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit, assign_values, rank_value};
pub use cue::{AudioCue, CueEvent, CueSettings, CueTable};
pub use deck::{CardId, DeckManager, Pile, PileCounts, Side};
pub use error::{DealError, MenuError, PileError, ResolveError, RestartError, SetupError};
pub use game::{Game, GameState};
pub use options::{GameOptions, Messages};
pub use result::{
    Affordances, DealtCard, GameResult, Outcome, Resolution, Reveal, RoundResult, Score,
    SetupReport,
};
