//! CLI counting drill example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use hilo_drill::{
    Card, Drill, DrillState, Feedback, FeedbackKind, JsonFileStore, SessionClock, SettingsStore,
    ThreadScheduler,
};

const SETTINGS_PATH: &str = "hilo-drill-settings.json";

fn main() {
    env_logger::init();

    let store = JsonFileStore::new(
        std::env::var("HILO_DRILL_SETTINGS").unwrap_or_else(|_| SETTINGS_PATH.to_owned()),
    );
    let settings = store.load();
    if let Err(err) = store.save(&settings) {
        log::warn!("could not save settings to {}: {err}", store.path().display());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (scheduler, expired) = ThreadScheduler::channel();
    let drill = match Drill::new(settings.drill_options(), scheduler, seed) {
        Ok(drill) => drill,
        Err(err) => {
            println!("Invalid drill options: {err}");
            return;
        }
    };

    let mut clock = settings.session_clock();
    let started = Instant::now();

    println!("Hi-Lo counting drill (type 'q' to quit, 'r' to reset the timer)");

    'session: loop {
        drill.start_round();
        print_cards(&drill.cards(), drill.display_time());

        // Wait for this round's hide timer.
        loop {
            let Ok(id) = expired.recv() else {
                break 'session;
            };
            if drill.on_timer(id) {
                break;
            }
        }
        print!("\u{1b}[2J\u{1b}[H");

        while drill.state() == DrillState::AwaitingInput {
            match prompt_line("What's the count? ").as_str() {
                "q" | "quit" => break 'session,
                "r" => drill.reset_timer(),
                text => {
                    if drill.receive_input(text).is_err() {
                        continue;
                    }
                    if let Err(err) = drill.submit() {
                        println!("Submit error: {err}");
                    }
                }
            }

            if let Some(feedback) = drill.feedback() {
                print_feedback(feedback);
            }
        }

        if settings.show_timer() && advance_clock(&mut clock, started) {
            println!("Session complete.");
            break;
        }

        if prompt_line("[enter] next round, [q] quit: ") == "q" {
            break;
        }
    }

    drill.end_session();
    println!("Goodbye.");
}

/// Catches the session clock up with wall time. Returns `true` once complete.
fn advance_clock(clock: &mut SessionClock, started: Instant) -> bool {
    clock.reset();
    for _ in 0..started.elapsed().as_secs() {
        if clock.tick() {
            break;
        }
    }
    println!("Session: {}", clock.parts());
    clock.is_complete()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_cards(cards: &[Card], display_time: u32) {
    let faces: Vec<String> = cards.iter().map(format_card).collect();
    println!("\nCount the cards ({:.1}s):", f64::from(display_time) / 1000.0);
    for row in faces.chunks(6) {
        println!("  {}", row.join("  "));
    }
}

fn print_feedback(feedback: Feedback) {
    let code = match feedback.kind() {
        FeedbackKind::Success => "32",
        FeedbackKind::Failure => "31",
        FeedbackKind::Info => "33",
    };
    println!("{}", colorize(&feedback.to_string(), code));
}

fn format_card(card: &Card) -> String {
    use hilo_drill::Suit;

    let text = card.to_string();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => colorize(&text, "31"),
        Suit::Clubs | Suit::Spades => text,
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
