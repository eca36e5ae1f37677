//! Drill controller and round lifecycle.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::OptionsError;
use crate::feedback::Feedback;
use crate::hand::Hand;
use crate::options::DrillOptions;
use crate::scheduler::{Scheduler, TimerId};

mod answer;
mod round;
pub mod state;

pub use state::{DrillState, DrillView};

/// Answer and feedback of the live round.
#[derive(Debug, Default)]
struct Round {
    hand: Hand,
    input: String,
    feedback: Option<Feedback>,
}

/// A Hi-Lo counting drill that deals rounds and adapts the reveal time.
///
/// The drill owns the deck, the live round and the display-time budget. The
/// auto-hide timer is armed through the [`Scheduler`] it is built with; the
/// host reports expiries back with [`on_timer`](Self::on_timer).
///
/// # Example
///
/// ```
/// use hilo_drill::{Drill, DrillOptions, DrillState, ManualScheduler};
///
/// let drill = Drill::new(DrillOptions::default(), ManualScheduler::new(), 42).unwrap();
/// drill.start_round();
/// assert_eq!(drill.state(), DrillState::Revealing);
///
/// for id in drill.scheduler().advance(10_000) {
///     drill.on_timer(id);
/// }
/// assert_eq!(drill.state(), DrillState::AwaitingInput);
/// ```
pub struct Drill<S: Scheduler> {
    /// Deck every round is dealt from.
    deck: Deck,
    /// Drill options.
    options: DrillOptions,
    /// Current round phase.
    state: Mutex<DrillState>,
    /// Live round.
    round: Mutex<Round>,
    /// Current display-time budget (ms).
    display_time: AtomicU32,
    /// Hide timer armed for the live round, if still pending.
    live_timer: Mutex<Option<TimerId>>,
    /// Next timer ID to hand out.
    next_timer: AtomicU64,
    /// Timer backend.
    scheduler: S,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl<S: Scheduler> Drill<S> {
    /// Creates a new drill with the given seed.
    ///
    /// The drill starts [`Idle`](DrillState::Idle) with the budget at the
    /// initial display time; call [`start_round`](Self::start_round) to deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not form a valid budget range.
    pub fn new(options: DrillOptions, scheduler: S, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            deck: Deck::standard(),
            options,
            state: Mutex::new(DrillState::Idle),
            round: Mutex::new(Round::default()),
            display_time: AtomicU32::new(options.initial_display_time),
            live_timer: Mutex::new(None),
            next_timer: AtomicU64::new(0),
            scheduler,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }

    /// Returns the drill options.
    pub const fn options(&self) -> &DrillOptions {
        &self.options
    }

    /// Returns the timer backend.
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the deck rounds are dealt from.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current round phase.
    pub fn state(&self) -> DrillState {
        *self.state.lock()
    }

    /// Returns whether the cards are face up.
    pub fn cards_visible(&self) -> bool {
        self.state() == DrillState::Revealing
    }

    /// Returns a clone of the live hand.
    pub fn hand(&self) -> Hand {
        self.round.lock().hand.clone()
    }

    /// Returns the cards of the live hand.
    pub fn cards(&self) -> Vec<Card> {
        self.round.lock().hand.cards().to_vec()
    }

    /// Returns the true running count of the live hand.
    pub fn correct_count(&self) -> i32 {
        self.round.lock().hand.count()
    }

    /// Returns the sanitized pending answer.
    pub fn input(&self) -> String {
        self.round.lock().input.clone()
    }

    /// Returns the feedback for the last action, if any.
    pub fn feedback(&self) -> Option<Feedback> {
        self.round.lock().feedback
    }

    /// Returns the current display-time budget (ms).
    pub fn display_time(&self) -> u32 {
        self.display_time.load(Ordering::SeqCst)
    }

    /// Returns the hide timer armed for the live round, if still pending.
    pub fn live_timer(&self) -> Option<TimerId> {
        *self.live_timer.lock()
    }

    /// Returns everything a front end needs to render the drill.
    pub fn snapshot(&self) -> DrillView {
        let state = self.state.lock();
        let round = self.round.lock();
        let view = DrillView {
            state: *state,
            cards: round.hand.cards().to_vec(),
            cards_visible: *state == DrillState::Revealing,
            input: round.input.clone(),
            feedback: round.feedback,
            display_time: self.display_time(),
        };
        drop(round);
        drop(state);
        view
    }

    /// Ends the session.
    ///
    /// Cancels the pending hide timer and returns the drill to
    /// [`Idle`](DrillState::Idle). The budget is kept. Dropping the drill
    /// does the same.
    pub fn end_session(&self) {
        self.cancel_live_timer();
        *self.state.lock() = DrillState::Idle;
    }

    /// Cancels the pending hide timer, if any.
    fn cancel_live_timer(&self) {
        let pending = self.live_timer.lock().take();
        if let Some(id) = pending {
            log::debug!("cancelling hide timer {}", id.0);
            self.scheduler.cancel(id);
        }
    }
}

impl<S: Scheduler> Drop for Drill<S> {
    fn drop(&mut self) {
        self.cancel_live_timer();
    }
}
