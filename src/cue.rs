//! Audio cue selection.
//!
//! The engine never plays sound. It names the cue the presentation layer
//! should play after each transition and looks up the configured volume.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Named sound events emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Deck shuffled at session setup.
    Shuffle,
    /// Cards slid onto the table.
    CardSlide,
    /// Player took the round.
    RoundWin,
    /// Opponent took the round.
    RoundLose,
    /// Round tied.
    RoundDraw,
    /// Player won the game.
    GameWin,
    /// Opponent won the game.
    GameLose,
    /// Game ended level.
    GameDraw,
}

impl AudioCue {
    /// Every cue, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Shuffle,
        Self::CardSlide,
        Self::RoundWin,
        Self::RoundLose,
        Self::RoundDraw,
        Self::GameWin,
        Self::GameLose,
        Self::GameDraw,
    ];
}

/// Playback settings for one cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueSettings {
    /// Playback volume in `0.0..=1.0`.
    pub volume: f32,
}

/// Default volume for every cue.
pub const DEFAULT_VOLUME: f32 = 0.5;

impl Default for CueSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

/// A cue selected by the engine, ready for the presentation layer to play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueEvent {
    /// Which cue to play.
    pub cue: AudioCue,
    /// Volume to play it at.
    pub volume: f32,
}

/// Per-cue playback settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CueTable {
    settings: HashMap<AudioCue, CueSettings>,
}

impl Default for CueTable {
    fn default() -> Self {
        Self {
            settings: AudioCue::ALL
                .iter()
                .map(|&cue| (cue, CueSettings::default()))
                .collect(),
        }
    }
}

impl CueTable {
    /// Sets the volume of one cue, clamped to `0.0..=1.0`. NaN becomes `0.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{AudioCue, CueTable};
    ///
    /// let table = CueTable::default().with_volume(AudioCue::GameWin, 0.9);
    /// assert_eq!(table.settings(AudioCue::GameWin).volume, 0.9);
    /// assert_eq!(table.settings(AudioCue::GameLose).volume, 0.5);
    /// ```
    #[must_use]
    pub fn with_volume(mut self, cue: AudioCue, volume: f32) -> Self {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.settings.insert(cue, CueSettings { volume });
        self
    }

    /// Returns the settings for a cue.
    #[must_use]
    pub fn settings(&self, cue: AudioCue) -> CueSettings {
        self.settings.get(&cue).copied().unwrap_or_default()
    }

    /// Builds the event for a cue with its configured volume.
    #[must_use]
    pub fn event(&self, cue: AudioCue) -> CueEvent {
        CueEvent {
            cue,
            volume: self.settings(cue).volume,
        }
    }
}
