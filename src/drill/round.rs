use core::sync::atomic::Ordering;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::dealer::deal;
use crate::hand::Hand;
use crate::scheduler::{Scheduler, TimerId};

use super::{Drill, DrillState, Round};

impl<S: Scheduler> Drill<S> {
    /// Deals a new round and reveals it.
    ///
    /// Any round in progress is abandoned and its hide timer cancelled. The new
    /// hand gets the configured number of cards, input and feedback are
    /// cleared, and a hide timer is armed for the current display-time budget.
    pub fn start_round(&self) {
        let hand = {
            let mut rng = self.rng.lock();
            deal(&self.deck, self.options.cards_per_deal, &mut *rng)
        };
        self.begin_round(hand);
    }

    /// Starts a round with preset cards instead of a random deal.
    ///
    /// Behaves like [`start_round`](Self::start_round) otherwise. Useful for
    /// replaying a known hand.
    pub fn start_round_with(&self, cards: Vec<Card>) {
        self.begin_round(Hand::new(cards));
    }

    /// Handles an expired timer.
    ///
    /// Hides the cards if `id` is the live hide timer and the cards are still
    /// showing. Expiries of cancelled or superseded timers are ignored.
    ///
    /// Returns `true` if the cards were hidden.
    pub fn on_timer(&self, id: TimerId) -> bool {
        let mut live = self.live_timer.lock();
        if *live != Some(id) {
            drop(live);
            log::debug!("ignoring stale hide timer {}", id.0);
            return false;
        }
        *live = None;
        drop(live);

        let mut state = self.state.lock();
        if *state != DrillState::Revealing {
            return false;
        }
        *state = DrillState::AwaitingInput;
        drop(state);

        log::debug!("hide timer {} fired, awaiting answer", id.0);
        true
    }

    fn begin_round(&self, hand: Hand) {
        self.cancel_live_timer();

        log::debug!("dealt {} cards, count {}", hand.len(), hand.count());
        // state before round, as in `submit`.
        let mut state = self.state.lock();
        let mut round = self.round.lock();
        *round = Round {
            hand,
            input: String::new(),
            feedback: None,
        };
        *state = DrillState::Revealing;
        drop(round);
        drop(state);

        let id = TimerId(self.next_timer.fetch_add(1, Ordering::SeqCst));
        let delay = self.display_time();
        *self.live_timer.lock() = Some(id);
        self.scheduler.schedule(id, delay);
        log::debug!("armed hide timer {} for {delay}ms", id.0);
    }
}
