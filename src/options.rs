//! Game configuration options.

use alloc::string::String;
use core::time::Duration;

use crate::cue::{AudioCue, CueTable};
use crate::result::Outcome;

/// Outcome messages shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Player took the round.
    pub round_win: String,
    /// Opponent took the round.
    pub round_lose: String,
    /// Round tied.
    pub round_draw: String,
    /// Player won the game.
    pub game_win: String,
    /// Opponent won the game.
    pub game_lose: String,
    /// Game ended level.
    pub game_draw: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            round_win: "You have won!".into(),
            round_lose: "Your Opponent has won!".into(),
            round_draw: "Draw!".into(),
            game_win: "You have won the game!".into(),
            game_lose: "Your Opponent has won the game!".into(),
            game_draw: "You and Your Opponent had a Draw!".into(),
        }
    }
}

impl Messages {
    /// Returns the message for a single round's outcome.
    #[must_use]
    pub fn round(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerWin => &self.round_win,
            Outcome::OpponentWin => &self.round_lose,
            Outcome::Draw => &self.round_draw,
        }
    }

    /// Returns the message for the final outcome of a game.
    #[must_use]
    pub fn game(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerWin => &self.game_win,
            Outcome::OpponentWin => &self.game_lose,
            Outcome::Draw => &self.game_draw,
        }
    }
}

/// Configuration options for a War game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use warrs::{AudioCue, GameOptions};
///
/// let options = GameOptions::default()
///     .with_wait_after_shuffle(Duration::from_millis(300))
///     .with_cue_volume(AudioCue::Shuffle, 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Pause the presentation layer should take after the setup shuffle.
    /// The engine itself never sleeps.
    pub wait_after_shuffle: Duration,
    /// Pause the presentation layer should take between reveal and result,
    /// and after clearing the table.
    pub wait_before_results: Duration,
    /// Per-cue playback settings.
    pub cues: CueTable,
    /// Outcome messages.
    pub messages: Messages,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            wait_after_shuffle: Duration::from_millis(700),
            wait_before_results: Duration::from_millis(500),
            cues: CueTable::default(),
            messages: Messages::default(),
        }
    }
}

impl GameOptions {
    /// Sets the pause after the setup shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_wait_after_shuffle(Duration::ZERO);
    /// assert_eq!(options.wait_after_shuffle, Duration::ZERO);
    /// ```
    #[must_use]
    pub fn with_wait_after_shuffle(mut self, wait: Duration) -> Self {
        self.wait_after_shuffle = wait;
        self
    }

    /// Sets the pause between reveal and result.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_wait_before_results(Duration::from_secs(1));
    /// assert_eq!(options.wait_before_results, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub fn with_wait_before_results(mut self, wait: Duration) -> Self {
        self.wait_before_results = wait;
        self
    }

    /// Sets the volume of one cue, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_cue_volume(mut self, cue: AudioCue, volume: f32) -> Self {
        self.cues = self.cues.with_volume(cue, volume);
        self
    }

    /// Replaces the outcome messages.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
