//! Drill state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::feedback::Feedback;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrillState {
    /// No round has been dealt yet, or the session has ended.
    #[default]
    Idle,
    /// Cards are face up while the hide timer runs.
    Revealing,
    /// Cards are hidden and an answer is expected.
    AwaitingInput,
    /// The answer was graded; the next round has not started.
    Graded,
}

/// Everything a front end needs to render the drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillView {
    /// Current round phase.
    pub state: DrillState,
    /// Cards of the live hand, in deal order.
    pub cards: Vec<Card>,
    /// Whether the cards are face up.
    pub cards_visible: bool,
    /// Sanitized pending answer.
    pub input: String,
    /// Feedback for the last action, if any.
    pub feedback: Option<Feedback>,
    /// Current display-time budget (ms).
    pub display_time: u32,
}
