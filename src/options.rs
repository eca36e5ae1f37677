//! Drill configuration options.

use crate::error::OptionsError;

/// Configuration options for a counting drill.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo_drill::DrillOptions;
///
/// let options = DrillOptions::default()
///     .with_initial_display_time(8000)
///     .with_min_display_time(1500)
///     .with_cards_per_deal(6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrillOptions {
    /// Display time of the first round, and the upper bound of the budget (ms).
    pub initial_display_time: u32,
    /// Lower bound of the display-time budget (ms).
    pub min_display_time: u32,
    /// Budget reduction after a correct answer (ms).
    pub time_decrement: u32,
    /// Budget increase after a wrong answer (ms).
    pub time_increment: u32,
    /// Number of cards dealt each round.
    pub cards_per_deal: usize,
}

impl Default for DrillOptions {
    fn default() -> Self {
        Self {
            initial_display_time: 10_000,
            min_display_time: 2_000,
            time_decrement: 200,
            time_increment: 200,
            cards_per_deal: 12,
        }
    }
}

impl DrillOptions {
    /// Sets the initial (and maximum) display time in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_drill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_initial_display_time(5000);
    /// assert_eq!(options.initial_display_time, 5000);
    /// ```
    #[must_use]
    pub const fn with_initial_display_time(mut self, ms: u32) -> Self {
        self.initial_display_time = ms;
        self
    }

    /// Sets the minimum display time in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_drill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_min_display_time(1000);
    /// assert_eq!(options.min_display_time, 1000);
    /// ```
    #[must_use]
    pub const fn with_min_display_time(mut self, ms: u32) -> Self {
        self.min_display_time = ms;
        self
    }

    /// Sets the budget reduction applied after a correct answer.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_drill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_time_decrement(500);
    /// assert_eq!(options.time_decrement, 500);
    /// ```
    #[must_use]
    pub const fn with_time_decrement(mut self, ms: u32) -> Self {
        self.time_decrement = ms;
        self
    }

    /// Sets the budget increase applied after a wrong answer.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_drill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_time_increment(300);
    /// assert_eq!(options.time_increment, 300);
    /// ```
    #[must_use]
    pub const fn with_time_increment(mut self, ms: u32) -> Self {
        self.time_increment = ms;
        self
    }

    /// Sets the number of cards dealt each round.
    ///
    /// Values above the deck size deal the whole deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo_drill::DrillOptions;
    ///
    /// let options = DrillOptions::default().with_cards_per_deal(3);
    /// assert_eq!(options.cards_per_deal, 3);
    /// ```
    #[must_use]
    pub const fn with_cards_per_deal(mut self, cards: usize) -> Self {
        self.cards_per_deal = cards;
        self
    }

    /// Checks that the display-time bounds form a valid range.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum display time exceeds the initial one.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.min_display_time > self.initial_display_time {
            return Err(OptionsError::MinExceedsInitial {
                min: self.min_display_time,
                initial: self.initial_display_time,
            });
        }
        Ok(())
    }

    /// Applies a correct answer to `budget`, never going below the minimum.
    #[must_use]
    pub const fn shorten(&self, budget: u32) -> u32 {
        let next = budget.saturating_sub(self.time_decrement);
        if next < self.min_display_time {
            self.min_display_time
        } else {
            next
        }
    }

    /// Applies a wrong answer to `budget`, never going above the initial value.
    #[must_use]
    pub const fn lengthen(&self, budget: u32) -> u32 {
        let next = budget.saturating_add(self.time_increment);
        if next > self.initial_display_time {
            self.initial_display_time
        } else {
            next
        }
    }
}
