//! One-shot timers for the auto-hide transition.
//!
//! The drill never sleeps. It asks a [`Scheduler`] to arm a timer and the host
//! reports the expiry back through [`Drill::on_timer`](crate::Drill::on_timer),
//! so every state change still happens on the host's own event loop.

use alloc::vec::Vec;

use crate::sync::Mutex;

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Arms and cancels one-shot timers.
pub trait Scheduler {
    /// Arms timer `id` to expire after `delay_ms` milliseconds.
    fn schedule(&self, id: TimerId, delay_ms: u32);

    /// Cancels timer `id`. Cancelling an unknown or expired timer does nothing.
    fn cancel(&self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, id: TimerId, delay_ms: u32) {
        (**self).schedule(id, delay_ms);
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id);
    }
}

/// A timer waiting in a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// The timer.
    pub id: TimerId,
    /// Virtual time at which the timer expires (ms).
    pub deadline: u64,
}

#[derive(Debug)]
struct ManualClock {
    now: u64,
    pending: Vec<PendingTimer>,
}

/// A scheduler driven by an explicit virtual clock.
///
/// Nothing expires until [`advance`](Self::advance) moves the clock past a
/// deadline. Tests use it to step through rounds deterministically, and hosts
/// with their own frame loop can feed it elapsed time.
pub struct ManualScheduler {
    clock: Mutex<ManualClock>,
}

impl ManualScheduler {
    /// Creates a scheduler at virtual time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: Mutex::new(ManualClock {
                now: 0,
                pending: Vec::new(),
            }),
        }
    }

    /// Returns the current virtual time (ms).
    pub fn now(&self) -> u64 {
        self.clock.lock().now
    }

    /// Returns the armed timers in the order they were scheduled.
    pub fn pending(&self) -> Vec<PendingTimer> {
        self.clock.lock().pending.clone()
    }

    /// Advances the clock by `ms` and returns the timers that expired,
    /// earliest deadline first.
    pub fn advance(&self, ms: u64) -> Vec<TimerId> {
        let mut clock = self.clock.lock();
        clock.now += ms;
        let now = clock.now;

        let mut due: Vec<PendingTimer> = Vec::new();
        clock.pending.retain(|timer| {
            if timer.deadline <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        drop(clock);

        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.id).collect()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, id: TimerId, delay_ms: u32) {
        let mut clock = self.clock.lock();
        let deadline = clock.now + u64::from(delay_ms);
        clock.pending.push(PendingTimer { id, deadline });
    }

    fn cancel(&self, id: TimerId) {
        self.clock.lock().pending.retain(|timer| timer.id != id);
    }
}

#[cfg(feature = "std")]
pub use thread::ThreadScheduler;

#[cfg(feature = "std")]
mod thread {
    use alloc::vec::Vec;
    use core::time::Duration;
    use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
    use std::time::Instant;

    use super::{Scheduler, TimerId};

    enum Command {
        Schedule(TimerId, Instant),
        Cancel(TimerId),
    }

    /// A scheduler that waits on one worker thread and reports expiries over
    /// a channel.
    ///
    /// The host drains the [`Receiver`] returned by [`channel`](Self::channel)
    /// on its own loop and hands each id to the drill, so the drill is only
    /// ever touched from that loop. Cancelling a timer wakes the worker and
    /// forgets the deadline at once. Dropping the scheduler stops the worker
    /// and discards whatever is still armed, which closes the receiver.
    pub struct ThreadScheduler {
        commands: Sender<Command>,
    }

    impl ThreadScheduler {
        /// Creates a scheduler and the receiver its expiries arrive on.
        #[must_use]
        pub fn channel() -> (Self, Receiver<TimerId>) {
            let (commands, inbox) = mpsc::channel();
            let (expired, rx) = mpsc::channel();
            std::thread::spawn(move || run_worker(&inbox, &expired));
            (Self { commands }, rx)
        }

        fn send(&self, command: Command) {
            if self.commands.send(command).is_err() {
                log::warn!("timer worker has stopped");
            }
        }
    }

    impl Scheduler for ThreadScheduler {
        fn schedule(&self, id: TimerId, delay_ms: u32) {
            let deadline = Instant::now() + Duration::from_millis(u64::from(delay_ms));
            self.send(Command::Schedule(id, deadline));
        }

        fn cancel(&self, id: TimerId) {
            self.send(Command::Cancel(id));
        }
    }

    fn run_worker(inbox: &Receiver<Command>, expired: &Sender<TimerId>) {
        let mut armed: Vec<(TimerId, Instant)> = Vec::new();

        loop {
            let next = armed.iter().map(|&(_, deadline)| deadline).min();
            let command = match next {
                None => match inbox.recv() {
                    Ok(command) => Some(command),
                    Err(_) => return,
                },
                Some(deadline) => {
                    match inbox.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                        Ok(command) => Some(command),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
            };

            match command {
                Some(Command::Schedule(id, deadline)) => armed.push((id, deadline)),
                Some(Command::Cancel(id)) => armed.retain(|&(armed_id, _)| armed_id != id),
                None => {}
            }

            let now = Instant::now();
            let mut due: Vec<(TimerId, Instant)> = Vec::new();
            armed.retain(|&timer| {
                if timer.1 <= now {
                    due.push(timer);
                    false
                } else {
                    true
                }
            });
            due.sort_by_key(|&(_, deadline)| deadline);

            for (id, _) in due {
                // The receiver is gone once the host stops listening.
                if expired.send(id).is_err() {
                    return;
                }
            }
        }
    }
}
