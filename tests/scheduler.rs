//! Timer backend tests.

#![cfg(feature = "std")]

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use hilo_drill::{
    Drill, DrillOptions, DrillState, ManualScheduler, Scheduler, ThreadScheduler, TimerId,
};

#[test]
fn manual_scheduler_releases_in_deadline_order() {
    let scheduler = ManualScheduler::new();
    scheduler.schedule(TimerId(1), 300);
    scheduler.schedule(TimerId(2), 100);
    scheduler.schedule(TimerId(3), 200);
    scheduler.cancel(TimerId(3));

    assert!(scheduler.advance(99).is_empty());
    assert_eq!(scheduler.advance(201), vec![TimerId(2), TimerId(1)]);
    assert_eq!(scheduler.now(), 300);
    assert!(scheduler.pending().is_empty());
}

#[test]
fn manual_scheduler_ignores_unknown_cancel() {
    let scheduler = ManualScheduler::new();
    scheduler.schedule(TimerId(1), 10);
    scheduler.cancel(TimerId(7));

    assert_eq!(scheduler.pending().len(), 1);
}

#[test]
fn thread_scheduler_delivers_uncancelled_timers() {
    let (scheduler, expired) = ThreadScheduler::channel();
    scheduler.schedule(TimerId(1), 20);
    scheduler.schedule(TimerId(2), 20);
    scheduler.cancel(TimerId(2));

    assert_eq!(
        expired.recv_timeout(Duration::from_secs(5)),
        Ok(TimerId(1))
    );
    assert!(expired.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn drill_hides_cards_on_thread_timer() {
    let (scheduler, expired) = ThreadScheduler::channel();
    let options = DrillOptions::default()
        .with_initial_display_time(30)
        .with_min_display_time(10)
        .with_cards_per_deal(6);
    let drill = Drill::new(options, scheduler, 11).unwrap();

    drill.start_round();
    assert!(drill.cards_visible());

    let id = expired.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(drill.on_timer(id));
    assert_eq!(drill.state(), DrillState::AwaitingInput);
}

#[test]
fn restarted_round_never_delivers_stale_timer() {
    let (scheduler, expired) = ThreadScheduler::channel();
    let options = DrillOptions::default()
        .with_initial_display_time(50)
        .with_min_display_time(10);
    let drill = Drill::new(options, scheduler, 11).unwrap();

    drill.start_round();
    let first = drill.live_timer().unwrap();
    drill.start_round();
    let second = drill.live_timer().unwrap();

    let id = expired.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(id, second);
    assert_ne!(id, first);
    assert!(drill.on_timer(id));
}

#[test]
fn dropped_drill_never_delivers_hide_timer() {
    let (scheduler, expired) = ThreadScheduler::channel();
    let options = DrillOptions::default()
        .with_initial_display_time(30)
        .with_min_display_time(10);
    let drill = Drill::new(options, scheduler, 11).unwrap();

    drill.start_round();
    assert!(drill.live_timer().is_some());
    drop(drill);

    assert!(expired.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn dropped_thread_scheduler_closes_channel_despite_long_timer() {
    let (scheduler, expired) = ThreadScheduler::channel();
    scheduler.schedule(TimerId(1), 60_000);
    scheduler.cancel(TimerId(1));
    scheduler.schedule(TimerId(2), 60_000);
    drop(scheduler);

    assert_eq!(
        expired.recv_timeout(Duration::from_secs(5)),
        Err(RecvTimeoutError::Disconnected)
    );
}
