//! Settings, persistence and session clock tests.

#![cfg(feature = "std")]

use std::fs;
use std::path::PathBuf;

use hilo_drill::{
    Card, ClockParts, DrillType, JsonFileStore, MemoryStore, Rank, SessionClock, Settings,
    SettingsError, SettingsStore, Suit, TimerDirection,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hilo-drill-{}-{name}.json", std::process::id()))
}

#[test]
fn defaults() {
    let settings = Settings::default();

    assert_eq!(settings.display_time_ms(), 5000);
    assert_eq!(settings.number_of_cards(), 12);
    assert!(settings.show_timer());
    assert_eq!(settings.timer_direction(), TimerDirection::Down);
    assert_eq!(settings.timer_duration_secs(), 60);
    assert_eq!(settings.drill_type(), DrillType::Standard);
}

#[test]
fn setters_validate_ranges() {
    let mut settings = Settings::default();

    settings.set_display_time_ms(15_000).unwrap();
    assert_eq!(settings.display_time_ms(), 15_000);
    assert_eq!(
        settings.set_display_time_ms(2_000),
        Err(SettingsError::DisplayTime(2_000))
    );
    assert_eq!(
        settings.set_display_time_ms(4_500),
        Err(SettingsError::DisplayTime(4_500))
    );

    settings.set_number_of_cards(6).unwrap();
    assert_eq!(settings.number_of_cards(), 6);
    assert_eq!(
        settings.set_number_of_cards(7),
        Err(SettingsError::NumberOfCards(7))
    );

    settings.set_timer_duration_secs(120).unwrap();
    assert_eq!(
        settings.set_timer_duration_secs(45),
        Err(SettingsError::TimerDuration(45))
    );
    assert_eq!(
        settings.set_timer_duration_secs(150),
        Err(SettingsError::TimerDuration(150))
    );
    assert_eq!(settings.timer_duration_secs(), 120);
}

#[test]
fn toggles_flip_values() {
    let mut settings = Settings::default();

    settings.toggle_show_timer();
    settings.toggle_timer_direction();
    settings.toggle_drill_type();
    assert!(!settings.show_timer());
    assert_eq!(settings.timer_direction(), TimerDirection::Up);
    assert_eq!(settings.drill_type(), DrillType::DeckTraining);

    settings.toggle_drill_type();
    assert_eq!(settings.drill_type(), DrillType::Standard);
}

#[test]
fn drill_options_follow_settings() {
    let mut settings = Settings::default();
    settings.set_display_time_ms(8_000).unwrap();
    settings.set_number_of_cards(3).unwrap();

    let options = settings.drill_options();
    assert_eq!(options.initial_display_time, 8_000);
    assert_eq!(options.cards_per_deal, 3);
    assert!(options.validate().is_ok());
}

#[test]
fn json_shape_is_camel_case() {
    let json = serde_json::to_value(Settings::default()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "displayTime": 5000,
            "numberOfCards": 12,
            "showTimer": true,
            "timerDirection": "down",
            "timerDuration": 60,
            "drillType": "standard"
        })
    );
}

#[test]
fn cards_serialize_with_lowercase_names() {
    let cards = [
        Card::new(Suit::Hearts, Rank::Ten),
        Card::new(Suit::Spades, Rank::Ace),
    ];

    assert_eq!(
        serde_json::to_value(cards).unwrap(),
        serde_json::json!([
            { "suit": "hearts", "rank": "10" },
            { "suit": "spades", "rank": "ace" }
        ])
    );
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), Settings::default());

    let mut settings = Settings::default();
    settings.toggle_drill_type();
    store.save(&settings).unwrap();
    assert_eq!(store.load(), settings);
}

#[test]
fn file_store_saves_and_loads() {
    let path = temp_path("round-trip");
    let store = JsonFileStore::new(&path);

    let mut settings = Settings::default();
    settings.set_number_of_cards(9).unwrap();
    settings.toggle_timer_direction();
    store.save(&settings).unwrap();

    assert_eq!(store.load(), settings);
    fs::remove_file(&path).unwrap();
}

#[test]
fn file_store_falls_back_to_defaults() {
    let missing = JsonFileStore::new(temp_path("missing"));
    assert_eq!(missing.load(), Settings::default());

    let path = temp_path("garbage");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(JsonFileStore::new(&path).load(), Settings::default());

    fs::write(
        &path,
        r#"{"displayTime":1,"numberOfCards":12,"showTimer":true,"timerDirection":"down","timerDuration":60,"drillType":"standard"}"#,
    )
    .unwrap();
    assert_eq!(JsonFileStore::new(&path).load(), Settings::default());
    fs::remove_file(&path).unwrap();
}

#[test]
fn countdown_clock_stops_at_zero() {
    let mut clock = SessionClock::new(3, TimerDirection::Down);
    assert_eq!(clock.display_secs(), 3);

    assert!(!clock.tick());
    assert!(!clock.tick());
    assert!(clock.tick());
    assert!(clock.is_complete());
    assert_eq!(clock.display_secs(), 0);

    assert!(!clock.tick());
    assert_eq!(clock.display_secs(), 0);

    clock.reset();
    assert_eq!(clock.display_secs(), 3);
}

#[test]
fn countup_clock_shows_elapsed() {
    let mut settings = Settings::default();
    settings.toggle_timer_direction();
    let mut clock = settings.session_clock();

    assert_eq!(clock.direction(), TimerDirection::Up);
    assert_eq!(clock.display_secs(), 0);
    for _ in 0..60 {
        clock.tick();
    }
    assert!(clock.is_complete());
    assert_eq!(clock.display_secs(), 60);
    assert_eq!(clock.parts().to_string(), "00:01:00");
}

#[test]
fn clock_parts_format() {
    let parts = ClockParts::from_secs(3_725);
    assert_eq!(
        parts,
        ClockParts {
            hours: 1,
            minutes: 2,
            seconds: 5
        }
    );
    assert_eq!(parts.to_string(), "01:02:05");
}
