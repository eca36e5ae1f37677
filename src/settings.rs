//! User preferences and their persistence.
//!
//! [`Settings`] holds what a player chooses between sessions. The drill never
//! reads it directly: a host loads it through a [`SettingsStore`] and turns it
//! into [`DrillOptions`] and a [`SessionClock`].

use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::clock::{SessionClock, TimerDirection};
use crate::error::SettingsError;
use crate::options::DrillOptions;
use crate::sync::Mutex;

/// Allowed numbers of cards per deal.
pub const CARD_COUNTS: [u8; 4] = [3, 6, 9, 12];

/// Kind of drill the player practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillType {
    /// Count a fresh batch of cards each round.
    #[default]
    Standard,
    /// Count through a whole deck.
    DeckTraining,
}

impl DrillType {
    /// Returns the other drill type.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Standard => Self::DeckTraining,
            Self::DeckTraining => Self::Standard,
        }
    }
}

/// Player preferences.
///
/// Serializes to the camelCase JSON object used by the web front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    display_time: u32,
    number_of_cards: u8,
    show_timer: bool,
    timer_direction: TimerDirection,
    timer_duration: u32,
    drill_type: DrillType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_time: 5000,
            number_of_cards: 12,
            show_timer: true,
            timer_direction: TimerDirection::Down,
            timer_duration: 60,
            drill_type: DrillType::Standard,
        }
    }
}

impl Settings {
    /// Returns the initial display time in milliseconds.
    #[must_use]
    pub const fn display_time_ms(&self) -> u32 {
        self.display_time
    }

    /// Returns the number of cards dealt each round.
    #[must_use]
    pub const fn number_of_cards(&self) -> u8 {
        self.number_of_cards
    }

    /// Returns whether the session clock is shown.
    #[must_use]
    pub const fn show_timer(&self) -> bool {
        self.show_timer
    }

    /// Returns the session clock direction.
    #[must_use]
    pub const fn timer_direction(&self) -> TimerDirection {
        self.timer_direction
    }

    /// Returns the session duration in seconds.
    #[must_use]
    pub const fn timer_duration_secs(&self) -> u32 {
        self.timer_duration
    }

    /// Returns the drill type.
    #[must_use]
    pub const fn drill_type(&self) -> DrillType {
        self.drill_type
    }

    /// Sets the initial display time.
    ///
    /// # Errors
    ///
    /// Returns an error unless `ms` is a whole number of seconds from 3s to 15s.
    pub const fn set_display_time_ms(&mut self, ms: u32) -> Result<(), SettingsError> {
        if ms % 1000 != 0 || ms < 3000 || ms > 15_000 {
            return Err(SettingsError::DisplayTime(ms));
        }
        self.display_time = ms;
        Ok(())
    }

    /// Sets the number of cards dealt each round.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` is one of [`CARD_COUNTS`].
    pub fn set_number_of_cards(&mut self, cards: u8) -> Result<(), SettingsError> {
        if !CARD_COUNTS.contains(&cards) {
            return Err(SettingsError::NumberOfCards(cards));
        }
        self.number_of_cards = cards;
        Ok(())
    }

    /// Sets the session duration.
    ///
    /// # Errors
    ///
    /// Returns an error unless `secs` is 30, 60, 90 or 120.
    pub const fn set_timer_duration_secs(&mut self, secs: u32) -> Result<(), SettingsError> {
        if secs % 30 != 0 || secs < 30 || secs > 120 {
            return Err(SettingsError::TimerDuration(secs));
        }
        self.timer_duration = secs;
        Ok(())
    }

    /// Shows or hides the session clock.
    pub const fn toggle_show_timer(&mut self) {
        self.show_timer = !self.show_timer;
    }

    /// Flips the session clock direction.
    pub const fn toggle_timer_direction(&mut self) {
        self.timer_direction = self.timer_direction.flipped();
    }

    /// Switches between standard and deck-training drills.
    pub const fn toggle_drill_type(&mut self) {
        self.drill_type = self.drill_type.flipped();
    }

    /// Checks every field against its allowed values.
    ///
    /// Stored settings bypass the setters, so loaders call this after
    /// deserializing.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut probe = Self::default();
        probe.set_display_time_ms(self.display_time)?;
        probe.set_number_of_cards(self.number_of_cards)?;
        probe.set_timer_duration_secs(self.timer_duration)?;
        Ok(())
    }

    /// Returns drill options using these preferences.
    ///
    /// The chosen display time becomes the initial (and maximum) budget. The
    /// remaining tuning keeps its defaults.
    ///
    /// ```
    /// use hilo_drill::Settings;
    ///
    /// let options = Settings::default().drill_options();
    /// assert_eq!(options.initial_display_time, 5000);
    /// assert_eq!(options.cards_per_deal, 12);
    /// ```
    #[must_use]
    pub fn drill_options(&self) -> DrillOptions {
        DrillOptions::default()
            .with_initial_display_time(self.display_time)
            .with_cards_per_deal(usize::from(self.number_of_cards))
    }

    /// Returns a fresh session clock using these preferences.
    #[must_use]
    pub const fn session_clock(&self) -> SessionClock {
        SessionClock::new(self.timer_duration, self.timer_direction)
    }
}

/// Loads and saves [`Settings`].
pub trait SettingsStore {
    /// Error raised when saving fails.
    type Error;

    /// Loads stored settings, falling back to defaults when none are usable.
    fn load(&self) -> Settings;

    /// Stores `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), Self::Error>;
}

/// A store that keeps settings in memory for the lifetime of the process.
pub struct MemoryStore {
    saved: Mutex<Option<Settings>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saved: Mutex::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Settings {
        let saved = *self.saved.lock();
        saved.unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<(), Self::Error> {
        *self.saved.lock() = Some(*settings);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::JsonFileStore;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::{Settings, SettingsStore};

    /// A store that keeps settings as pretty-printed JSON in a file.
    #[derive(Debug, Clone)]
    pub struct JsonFileStore {
        path: PathBuf,
    }

    impl JsonFileStore {
        /// Creates a store backed by the file at `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SettingsStore for JsonFileStore {
        type Error = io::Error;

        fn load(&self) -> Settings {
            let text = match fs::read_to_string(&self.path) {
                Ok(text) => text,
                Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
                Err(err) => {
                    log::warn!(
                        "failed to read settings from {}: {err}",
                        self.path.display()
                    );
                    return Settings::default();
                }
            };

            match serde_json::from_str::<Settings>(&text) {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(err) => {
                        log::warn!("stored settings out of range, using defaults: {err}");
                        Settings::default()
                    }
                },
                Err(err) => {
                    log::warn!("failed to parse saved settings, using defaults: {err}");
                    Settings::default()
                }
            }
        }

        fn save(&self, settings: &Settings) -> Result<(), Self::Error> {
            let text = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
            fs::write(&self.path, text)
        }
    }
}
