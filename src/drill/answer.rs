use core::sync::atomic::Ordering;

use alloc::string::String;

use crate::error::{InputError, SubmitError};
use crate::feedback::Feedback;
use crate::scheduler::Scheduler;

use super::{Drill, DrillState};

/// Keeps only ASCII digits and minus signs.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

impl<S: Scheduler> Drill<S> {
    /// Replaces the pending answer with `text`, keeping only digits and `-`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the pending answer untouched, if the drill
    /// is not awaiting an answer.
    pub fn receive_input(&self, text: &str) -> Result<(), InputError> {
        let state = self.state.lock();
        if *state != DrillState::AwaitingInput {
            return Err(InputError::InvalidState);
        }

        // Held until the input lands so a concurrent deal cannot slip in.
        self.round.lock().input = sanitize(text);
        drop(state);
        Ok(())
    }

    /// Grades the pending answer against the live hand.
    ///
    /// A correct answer shortens the next reveal by the configured decrement
    /// and a wrong one lengthens it by the increment, both clamped to the
    /// budget range; either way the round becomes
    /// [`Graded`](DrillState::Graded). An answer that is not an integer
    /// yields [`Feedback::InvalidInput`] and keeps the round open.
    ///
    /// # Errors
    ///
    /// Returns an error if the drill is not awaiting an answer.
    pub fn submit(&self) -> Result<Feedback, SubmitError> {
        let mut state = self.state.lock();
        if *state != DrillState::AwaitingInput {
            return Err(SubmitError::InvalidState);
        }

        let mut round = self.round.lock();
        let Ok(guess) = round.input.parse::<i32>() else {
            round.feedback = Some(Feedback::InvalidInput);
            return Ok(Feedback::InvalidInput);
        };

        let expected = round.hand.count();
        let budget = self.display_time();
        let (feedback, next) = if guess == expected {
            (Feedback::Correct, self.options.shorten(budget))
        } else {
            (Feedback::Incorrect { expected }, self.options.lengthen(budget))
        };

        round.feedback = Some(feedback);
        drop(round);
        self.display_time.store(next, Ordering::SeqCst);
        *state = DrillState::Graded;
        drop(state);

        log::info!("answered {guess}, count was {expected}; display time {budget}ms -> {next}ms");
        Ok(feedback)
    }

    /// Restores the display-time budget to its initial value.
    ///
    /// Leaves the round and its phase as they are and posts
    /// [`Feedback::TimerReset`].
    pub fn reset_timer(&self) {
        self.display_time
            .store(self.options.initial_display_time, Ordering::SeqCst);
        self.round.lock().feedback = Some(Feedback::TimerReset);
        log::info!(
            "display time reset to {}ms",
            self.options.initial_display_time
        );
    }
}
