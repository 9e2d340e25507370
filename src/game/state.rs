//! Game state types.

use crate::result::Affordances;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No session has been set up yet.
    Idle,
    /// Hands are dealt and the next deal is awaited.
    AwaitingDeal,
    /// Both front cards are revealed and the round is not scored yet.
    RoundInProgress,
    /// The round is scored; the revealed cards stay on the table until the
    /// next deal.
    RoundResolved,
    /// A hand ran out and the final outcome has been decided.
    GameOver,
    /// The player left the table.
    MainMenu,
}

impl GameState {
    /// Returns the controls to offer in this state.
    #[must_use]
    pub const fn affordances(self) -> Affordances {
        match self {
            Self::AwaitingDeal | Self::RoundResolved => Affordances {
                deal: true,
                play_again: false,
                main_menu: false,
            },
            Self::GameOver => Affordances {
                deal: false,
                play_again: true,
                main_menu: true,
            },
            Self::Idle | Self::RoundInProgress | Self::MainMenu => Affordances {
                deal: false,
                play_again: false,
                main_menu: false,
            },
        }
    }

    /// Returns whether a deal request is accepted in this state.
    #[must_use]
    pub const fn accepts_deal(self) -> bool {
        matches!(self, Self::AwaitingDeal | Self::RoundResolved)
    }
}
