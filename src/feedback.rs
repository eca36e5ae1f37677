//! Feedback messages shown after a drill action.

use core::fmt;

/// Feedback produced by the drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The submitted count matched the hand.
    Correct,
    /// The submitted count was wrong.
    Incorrect {
        /// The true count of the hand.
        expected: i32,
    },
    /// The pending answer could not be parsed as a number.
    InvalidInput,
    /// The display time was reset to its initial value.
    TimerReset,
}

impl Feedback {
    /// Returns how a front end should present this feedback.
    #[must_use]
    pub const fn kind(&self) -> FeedbackKind {
        match self {
            Self::Correct => FeedbackKind::Success,
            Self::Incorrect { .. } => FeedbackKind::Failure,
            Self::InvalidInput | Self::TimerReset => FeedbackKind::Info,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct!"),
            Self::Incorrect { expected } => {
                write!(f, "Incorrect. The correct count was {expected}.")
            }
            Self::InvalidInput => f.write_str("Please enter a valid number."),
            Self::TimerReset => f.write_str("Timer reset to initial value."),
        }
    }
}

/// Presentation class of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// A correct answer.
    Success,
    /// A wrong answer.
    Failure,
    /// Anything else.
    Info,
}

impl FeedbackKind {
    /// Classifies rendered feedback text by its prefix.
    ///
    /// ```
    /// use hilo_drill::FeedbackKind;
    ///
    /// assert_eq!(FeedbackKind::classify("Correct!"), FeedbackKind::Success);
    /// assert_eq!(FeedbackKind::classify("Incorrect. The correct count was 2."), FeedbackKind::Failure);
    /// assert_eq!(FeedbackKind::classify("Timer reset to initial value."), FeedbackKind::Info);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.starts_with("Correct") {
            Self::Success
        } else if text.starts_with("Incorrect") {
            Self::Failure
        } else {
            Self::Info
        }
    }
}
