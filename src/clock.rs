//! The session clock shown alongside a drill.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Direction in which the session clock runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerDirection {
    /// Counts up from zero to the session duration.
    Up,
    /// Counts down from the session duration to zero.
    #[default]
    Down,
}

impl TimerDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A whole-second session clock.
///
/// The clock is advanced by the host once per second with [`tick`](Self::tick)
/// and stops once the full duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    duration: u32,
    elapsed: u32,
    direction: TimerDirection,
}

impl SessionClock {
    /// Creates a clock for a session of `duration` seconds.
    #[must_use]
    pub const fn new(duration: u32, direction: TimerDirection) -> Self {
        Self {
            duration,
            elapsed: 0,
            direction,
        }
    }

    /// Advances the clock by one second.
    ///
    /// Returns `true` if this tick completed the session.
    pub const fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.elapsed += 1;
        self.is_complete()
    }

    /// Returns whether the full duration has elapsed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the seconds to display: remaining when counting down,
    /// elapsed when counting up.
    #[must_use]
    pub const fn display_secs(&self) -> u32 {
        match self.direction {
            TimerDirection::Down => self.duration.saturating_sub(self.elapsed),
            TimerDirection::Up => self.elapsed,
        }
    }

    /// Returns the displayed time split into hours, minutes and seconds.
    #[must_use]
    pub const fn parts(&self) -> ClockParts {
        ClockParts::from_secs(self.display_secs())
    }

    /// Returns the clock direction.
    #[must_use]
    pub const fn direction(&self) -> TimerDirection {
        self.direction
    }

    /// Rewinds the clock to the start of the session.
    pub const fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// A time split for an `HH:MM:SS` display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    /// Whole hours.
    pub hours: u32,
    /// Minutes past the hour.
    pub minutes: u32,
    /// Seconds past the minute.
    pub seconds: u32,
}

impl ClockParts {
    /// Splits a number of seconds.
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
            seconds: secs % 60,
        }
    }
}

impl fmt::Display for ClockParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
