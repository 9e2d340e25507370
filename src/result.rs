//! Outbound records handed to the presentation layer after each transition.

use alloc::string::String;
use core::time::Duration;

use crate::card::Card;
use crate::cue::CueEvent;
use crate::deck::{CardId, PileCounts};

/// Who took a round or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player wins.
    PlayerWin,
    /// The opponent wins.
    OpponentWin,
    /// Neither side wins.
    Draw,
}

impl Outcome {
    /// Compares two values from the player's point of view.
    #[must_use]
    pub fn compare<T: Ord>(player: T, opponent: T) -> Self {
        match player.cmp(&opponent) {
            core::cmp::Ordering::Greater => Self::PlayerWin,
            core::cmp::Ordering::Less => Self::OpponentWin,
            core::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

/// Running score. Only a strict round win scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the opponent.
    pub opponent: u32,
}

/// Which controls the presentation layer should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    /// A deal request is accepted.
    pub deal: bool,
    /// A restart request is accepted.
    pub play_again: bool,
    /// A main-menu request is accepted.
    pub main_menu: bool,
}

/// A card on the table together with its identity in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCard {
    /// Store identity.
    pub id: CardId,
    /// The card itself.
    pub card: Card,
}

/// Result of setting up (or re-setting up) a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    /// Pile sizes after the split.
    pub counts: PileCounts,
    /// Whether the store had to be regenerated to reach a full deck.
    pub repaired: bool,
    /// Shuffle cue.
    pub cue: CueEvent,
    /// Pause before offering the first deal.
    pub pause: Duration,
    /// Controls to offer.
    pub affordances: Affordances,
}

/// Result of a deal: both front cards revealed, nothing scored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    /// The player's revealed card.
    pub player: DealtCard,
    /// The opponent's revealed card.
    pub opponent: DealtCard,
    /// Pile sizes; hand counts exclude the revealed cards.
    pub counts: PileCounts,
    /// The player's hand has no face-down card left.
    pub player_exhausted: bool,
    /// The opponent's hand has no face-down card left.
    pub opponent_exhausted: bool,
    /// Card slide cue.
    pub cue: CueEvent,
    /// Pause before resolving.
    pub pause: Duration,
}

/// Result of a scored round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Who took the round.
    pub outcome: Outcome,
    /// Message for the outcome.
    pub message: String,
    /// Outcome cue.
    pub cue: CueEvent,
    /// Score after the round.
    pub score: Score,
    /// The player's card.
    pub player: DealtCard,
    /// The opponent's card.
    pub opponent: DealtCard,
    /// Pile sizes.
    pub counts: PileCounts,
    /// Controls to offer.
    pub affordances: Affordances,
}

/// Final result of a game, decided on the running score.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    /// Who won the game.
    pub outcome: Outcome,
    /// Message for the outcome.
    pub message: String,
    /// Final outcome cue.
    pub cue: CueEvent,
    /// Final score.
    pub score: Score,
    /// Pile sizes.
    pub counts: PileCounts,
    /// Controls to offer.
    pub affordances: Affordances,
}

/// What a resolve step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A round was scored and the game goes on.
    Round(RoundResult),
    /// A hand ran out and the game is over.
    GameOver(GameResult),
}

impl Resolution {
    /// Returns the outcome, whether of the round or of the game.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::Round(round) => round.outcome,
            Self::GameOver(game) => game.outcome,
        }
    }

    /// Returns whether the game ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}
