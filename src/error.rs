//! Error types for pile and game operations.

use thiserror::Error;

use crate::deck::{CardId, Pile};

/// Errors raised by the deck pile store.
///
/// Both variants mean the pile bookkeeping is out of sync and must be
/// surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The card is not in the pile a move was asked to take it from.
    #[error("card {card} not found in {pile:?} pile")]
    CardNotFound {
        /// The card that was asked for.
        card: CardId,
        /// The pile it was expected in.
        pile: Pile,
    },
    /// The piles together do not hold exactly one full deck, either by
    /// count or because a card is duplicated or unknown.
    #[error("piles hold {total} cards, expected one full deck")]
    InvariantViolation {
        /// Total number of cards found across all piles.
        total: usize,
    },
}

/// Errors that can occur while starting or re-bootstrapping a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for starting a session.
    #[error("invalid game state for starting a session")]
    InvalidState,
    /// Another request is being processed.
    #[error("another request is being processed")]
    Busy,
    /// The deck could not be brought back to a full deck.
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Another request is being processed.
    #[error("another request is being processed")]
    Busy,
    /// A hand has no card left to reveal.
    #[error("a hand has no cards left")]
    HandEmpty,
    /// The two hands hold different numbers of cards.
    #[error("hands diverged: player has {player} cards, opponent has {opponent}")]
    HandsDiverged {
        /// Cards left in the player's hand.
        player: usize,
        /// Cards left in the opponent's hand.
        opponent: usize,
    },
    /// A pile move failed.
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Errors that can occur when resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid game state for resolving.
    #[error("invalid game state for resolving")]
    InvalidState,
    /// Another request is being processed.
    #[error("another request is being processed")]
    Busy,
    /// A revealed card could not be found.
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Errors that can occur when restarting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestartError {
    /// Invalid game state for restarting.
    #[error("invalid game state for restarting")]
    InvalidState,
    /// Another request is being processed.
    #[error("another request is being processed")]
    Busy,
    /// A pile move failed.
    #[error(transparent)]
    Pile(#[from] PileError),
}

/// Errors that can occur when returning to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Invalid game state for leaving the table.
    #[error("invalid game state for leaving the table")]
    InvalidState,
    /// Another request is being processed.
    #[error("another request is being processed")]
    Busy,
}
