//! Human-readable rendering

use soulwave_core::{MoodRecommendation, Track};
use soulwave_playback::{format_clock, LoadState, PlaybackEvent, PlayerView};

/// One catalog line: id, title, artist, category, length, badges
pub fn track_line(track: &Track) -> String {
    let mut badges = Vec::new();
    if track.is_premium {
        badges.push("premium");
    }
    if !track.is_playable() {
        badges.push("no audio");
    }

    let mut line = format!(
        "{:>3}  {:<24} {:<20} {:<11} {:>6}",
        track.id.as_str(),
        track.title,
        track.artist,
        track.category.as_str(),
        format_clock(f64::from(track.duration_seconds)),
    );
    if !badges.is_empty() {
        line.push_str(&format!("  [{}]", badges.join(", ")));
    }
    line
}

pub fn recommendation_line(rec: &MoodRecommendation) -> String {
    format!("{} ({}) - {}", rec.title, rec.category, rec.reason)
}

/// Status bar for one simulation frame
pub fn frame_line(at_seconds: f64, view: &PlayerView) -> String {
    let state = match (view.load_state, view.is_playing, view.media_playing) {
        (LoadState::Empty, _, _) => "empty",
        (_, true, true) => "playing",
        (_, true, false) => "waiting",
        (_, false, _) => "paused",
    };
    let loading = if view.load_state == LoadState::Loading {
        " (loading)"
    } else {
        ""
    };

    format!(
        "[{:>7.1}s] {:<7} {} / {}  {:>3.0}%{}",
        at_seconds,
        state,
        view.elapsed,
        view.total,
        view.progress_fraction * 100.0,
        loading
    )
}

pub fn event_line(event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::TrackLoaded {
            track_id,
            previous_track_id,
        } => match previous_track_id {
            Some(previous) => format!("loaded track {track_id} (replacing {previous})"),
            None => format!("loaded track {track_id}"),
        },
        PlaybackEvent::StateChanged { playing: true } => "play requested".to_string(),
        PlaybackEvent::StateChanged { playing: false } => "pause requested".to_string(),
        PlaybackEvent::Ready { duration_seconds } => {
            format!("ready, duration {}", format_clock(*duration_seconds))
        }
        PlaybackEvent::Seeked { position_seconds } => {
            format!("seeked to {}", format_clock(*position_seconds))
        }
        PlaybackEvent::TrackFinished { track_id } => format!("track {track_id} finished"),
        PlaybackEvent::PlayRejected { reason } => format!("play rejected: {reason}"),
        PlaybackEvent::MediaFailed {
            message,
            recoverable,
        } => format!("media failure ({}): {message}", if *recoverable { "recoverable" } else { "fatal" }),
        PlaybackEvent::LikeChanged { liked } => format!("liked: {liked}"),
        PlaybackEvent::MuteChanged { muted } => format!("muted: {muted}"),
        PlaybackEvent::ViewModeChanged { mode } => format!("view: {mode:?}"),
        PlaybackEvent::Closed { track_id } => format!("closed track {track_id}"),
    }
}
