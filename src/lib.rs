//! A Hi-Lo card counting drill engine with optional `no_std` support.
//!
//! The crate provides a [`Drill`] type that runs the training loop: it deals a
//! batch of cards, keeps them face up for an adaptive display time, hides
//! them, grades the player's running count, and shortens or lengthens the
//! next reveal depending on the answer.
//!
//! # Example
//!
//! ```
//! use hilo_drill::{Drill, DrillOptions, DrillState, Feedback, ManualScheduler};
//!
//! let options = DrillOptions::default().with_cards_per_deal(6);
//! let drill = Drill::new(options, ManualScheduler::new(), 42).unwrap();
//!
//! drill.start_round();
//! for id in drill.scheduler().advance(u64::from(drill.display_time())) {
//!     drill.on_timer(id);
//! }
//!
//! let answer = drill.correct_count().to_string();
//! drill.receive_input(&answer).unwrap();
//! assert_eq!(drill.submit(), Ok(Feedback::Correct));
//! assert_eq!(drill.state(), DrillState::Graded);
//! assert_eq!(drill.display_time(), 9800);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod count;
pub mod dealer;
pub mod deck;
pub mod drill;
pub mod error;
pub mod feedback;
pub mod hand;
pub mod options;
pub mod scheduler;
pub mod settings;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use clock::{ClockParts, SessionClock, TimerDirection};
pub use deck::{Deck, generate_deck};
pub use drill::{Drill, DrillState, DrillView};
pub use error::{InputError, OptionsError, SettingsError, SubmitError};
pub use feedback::{Feedback, FeedbackKind};
pub use hand::Hand;
pub use options::DrillOptions;
#[cfg(feature = "std")]
pub use scheduler::ThreadScheduler;
pub use scheduler::{ManualScheduler, PendingTimer, Scheduler, TimerId};
#[cfg(feature = "std")]
pub use settings::JsonFileStore;
pub use settings::{DrillType, MemoryStore, Settings, SettingsStore};
