//! Display formatting tests across locales

use chrono::Locale;
use podcastr_core::format::{duration_to_time_string, format_published_at, parse_locale};
use podcastr_core::Episode;

#[test]
fn publish_dates_follow_locale() {
    let raw = "2021-01-22 10:00:00";

    assert_eq!(format_published_at(raw, Locale::en_US).unwrap(), "22 Jan 21");
    assert_eq!(
        format_published_at(raw, parse_locale("pt_BR").unwrap()).unwrap(),
        "22 jan 21"
    );
}

#[test]
fn publish_date_formats_are_equivalent() {
    let expected = format_published_at("2021-01-08 16:30:00", Locale::en_US).unwrap();

    for raw in [
        "2021-01-08T16:30:00",
        "2021-01-08T16:30:00Z",
        "2021-01-08",
        "  2021-01-08 16:30:00 ",
    ] {
        assert_eq!(format_published_at(raw, Locale::en_US).unwrap(), expected, "{raw}");
    }
}

#[test]
fn episode_round_trips_through_json() {
    let episode = Episode {
        id: "o-que-e-um-bom-codigo".to_string(),
        title: "Faladev #29".to_string(),
        members: "Diego Fernandes".to_string(),
        thumbnail_url: "https://example.com/code.jpg".to_string(),
        audio_url: "https://example.com/code.m4a".to_string(),
        duration_seconds: 1800,
        published_at: "8 jan 21".to_string(),
        description: None,
    };

    let json = serde_json::to_value(&episode).unwrap();
    assert_eq!(json["durationSeconds"], 1800);
    assert_eq!(json["audioUrl"], "https://example.com/code.m4a");

    let back: Episode = serde_json::from_value(json).unwrap();
    assert_eq!(back, episode);
    assert_eq!(duration_to_time_string(back.duration_seconds), "00:30:00");
}
