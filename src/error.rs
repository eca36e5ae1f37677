//! Error types for drill operations.

use thiserror::Error;

/// Errors that can occur when validating drill options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The minimum display time is above the initial display time.
    #[error("minimum display time {min}ms exceeds initial display time {initial}ms")]
    MinExceedsInitial {
        /// Configured minimum, in milliseconds.
        min: u32,
        /// Configured initial value, in milliseconds.
        initial: u32,
    },
}

/// Errors that can occur while forwarding input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The drill is not waiting for an answer.
    #[error("invalid drill state for input")]
    InvalidState,
}

/// Errors that can occur when submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The drill is not waiting for an answer.
    #[error("invalid drill state for submitting")]
    InvalidState,
}

/// Errors that can occur when changing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Display time is not a whole number of seconds between 3 and 15.
    #[error("display time {0}ms is not a whole second between 3s and 15s")]
    DisplayTime(u32),
    /// Number of cards is not one of 3, 6, 9 or 12.
    #[error("number of cards {0} is not one of 3, 6, 9 or 12")]
    NumberOfCards(u8),
    /// Session duration is not between 30 and 120 seconds in steps of 30.
    #[error("timer duration {0}s is not between 30s and 120s in steps of 30s")]
    TimerDuration(u32),
}
