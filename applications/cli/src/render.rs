//! Plain-text rendering of listings and player state

use podcastr_client::EpisodeListing;
use podcastr_core::format::duration_to_time_string;
use podcastr_core::{AudioOutput, Episode};
use podcastr_playback::{Controls, Player};

const EMPTY_PLAYER: &str = "Select a podcast to listen";

fn row(index: usize, episode: &Episode) -> String {
    format!(
        "{:>3}  {}  |  {}  |  {}  |  {}\n",
        index,
        episode.title,
        episode.members,
        episode.published_at,
        duration_to_time_string(episode.duration_seconds),
    )
}

/// Both home page sections, numbered by their position in the play queue
pub fn render_listing(listing: &EpisodeListing) -> String {
    let mut out = String::new();

    out.push_str("Latest releases\n");
    for (i, episode) in listing.latest.iter().enumerate() {
        out.push_str(&row(i, episode));
    }

    out.push_str("\nAll episodes\n");
    for (i, episode) in listing.all.iter().enumerate() {
        out.push_str(&row(listing.latest.len() + i, episode));
    }

    out
}

/// Detail view of a single episode
pub fn render_episode(episode: &Episode) -> String {
    let mut out = format!(
        "{}\n{}\n{}  |  {}\n{}\n",
        episode.title,
        episode.members,
        episode.published_at,
        duration_to_time_string(episode.duration_seconds),
        episode.audio_url,
    );
    if let Some(description) = &episode.description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }
    out
}

/// Control bar; disabled controls are dimmed to `-`
pub fn render_controls(controls: Controls, is_playing: bool) -> String {
    let key = |enabled: bool, label: &str| {
        if enabled {
            label.to_string()
        } else {
            "-".repeat(label.len())
        }
    };

    [
        key(controls.shuffle, "[s]huffle"),
        key(controls.previous, "[b]ack"),
        key(
            controls.play_pause,
            if is_playing { "[p]ause" } else { "[p]lay" },
        ),
        key(controls.next, "[n]ext"),
        key(controls.repeat, "[l]oop"),
        key(controls.seek, "seek <s>"),
    ]
    .join(" ")
}

/// Current episode, progress and controls
pub fn render_status<O: AudioOutput>(player: &Player<O>) -> String {
    let session = player.session();
    let controls = render_controls(player.controls(), session.is_playing());

    let Some(episode) = session.current_episode() else {
        return format!("{}\n{}\n", EMPTY_PLAYER, controls);
    };

    let mut flags = Vec::new();
    if session.is_looping() {
        flags.push("loop");
    }
    if session.is_shuffling() {
        flags.push("shuffle");
    }

    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", flags.join(", "))
    };

    format!(
        "{} {} ({})\n   {} / {}{}\n{}\n",
        if session.is_playing() { ">" } else { "||" },
        episode.title,
        episode.members,
        duration_to_time_string(player.progress()),
        duration_to_time_string(player.current_duration()),
        flags,
        controls,
    )
}
