//! Integration tests for the playback controller
//!
//! Drives the controller against the stepped media fake the way a platform
//! would: commands go out, events come back tagged with a generation.

use soulwave_core::{catalog, Category, Track, TrackId};
use soulwave_playback::{
    Generation, LoadState, MediaCommand, MediaEvent, PlaybackController, PlaybackEvent,
    SteppedMedia, TaggedMediaEvent, ViewMode,
};

// ===== Test Helpers =====

fn track(id: &str, seconds: u32) -> Track {
    Track::new(id, format!("Session {id}"), "Test Artist", Category::Meditation, seconds)
        .with_audio_url(format!("audio/{id}.mp3"))
}

fn silent_track(id: &str, seconds: u32) -> Track {
    Track::new(id, format!("Session {id}"), "Test Artist", Category::Healing, seconds)
}

fn setup() -> (PlaybackController<SteppedMedia>, SteppedMedia) {
    let media = SteppedMedia::new()
        .with_duration("audio/a.mp3", 300.0)
        .with_duration("audio/b.mp3", 120.0);
    (PlaybackController::new(media.clone()), media)
}

/// Step the fake and deliver everything it reports
fn pump(player: &mut PlaybackController<SteppedMedia>, media: &SteppedMedia, seconds: f64) {
    for event in media.step(seconds) {
        player.handle_media_event(event);
    }
}

fn plays(media: &SteppedMedia) -> usize {
    media.count(|c| *c == MediaCommand::Play)
}

fn close_to(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ===== Load / Play =====

#[test]
fn toggle_after_load_sends_exactly_one_play() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.toggle_play();

    assert!(player.is_playing());
    assert_eq!(plays(&media), 1);

    // Reading state any number of times issues nothing new
    for _ in 0..10 {
        let _ = player.snapshot();
        let _ = player.is_playing();
    }
    pump(&mut player, &media, 0.0);
    assert_eq!(plays(&media), 1);
}

#[test]
fn load_becomes_ready_on_metadata() {
    let (mut player, media) = setup();
    player.load_track(track("a", 999));
    assert_eq!(player.load_state(), LoadState::Loading);
    assert_eq!(player.duration_label(), "16:39");

    pump(&mut player, &media, 0.0);

    assert_eq!(player.load_state(), LoadState::Ready);
    assert_eq!(player.duration_seconds(), 300.0);
    assert_eq!(player.duration_label(), "5:00");

    let events = player.drain_events();
    assert!(events.contains(&PlaybackEvent::Ready {
        duration_seconds: 300.0
    }));
}

#[test]
fn confirmed_state_follows_media_events_only() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();

    assert!(player.is_playing());
    assert!(!player.is_media_playing(), "nothing confirmed yet");

    pump(&mut player, &media, 0.0);
    assert!(player.is_media_playing());

    player.pause();
    assert!(!player.is_playing());
    assert!(player.is_media_playing(), "pause not confirmed yet");
    pump(&mut player, &media, 0.0);
    assert!(!player.is_media_playing());
}

#[test]
fn blocked_autoplay_keeps_intent_and_is_reported() {
    let (mut player, media) = setup();
    media.set_block_play(true);
    player.load_track(track("a", 300));
    player.toggle_play();

    assert!(player.is_playing(), "intent survives the rejection");
    assert!(!player.is_media_playing());

    let events = player.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::PlayRejected { .. })));

    // A later explicit retry goes through
    media.set_block_play(false);
    player.pause();
    player.play();
    pump(&mut player, &media, 1.0);
    assert!(player.is_media_playing());
}

// ===== Scenarios =====

#[test]
fn progress_then_switch_track_resets_session() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.toggle_play();
    player.toggle_like();
    player.on_position_update(player.generation(), 150.0, 300.0);

    assert!(close_to(player.progress_fraction(), 0.5));
    assert_eq!(player.elapsed_label(), "2:30");
    assert_eq!(player.remaining_label(), "2:30");
    assert!(player.is_liked());

    player.load_track(track("b", 120));

    assert_eq!(player.current_time_seconds(), 0.0);
    assert!(!player.is_liked());
    assert_eq!(player.progress_fraction(), 0.0);
    assert_eq!(player.load_state(), LoadState::Loading);
    assert_eq!(
        media.source().as_deref(),
        Some("audio/b.mp3"),
        "new source handed to the primitive"
    );
}

#[test]
fn switching_while_playing_resumes_when_ready() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 5.0);
    assert_eq!(plays(&media), 1);

    player.load_track(track("b", 120));
    assert!(player.is_playing(), "intent carries over");
    assert_eq!(plays(&media), 1, "no play before the new media is ready");

    pump(&mut player, &media, 0.0);
    assert_eq!(player.load_state(), LoadState::Ready);
    assert_eq!(plays(&media), 2);

    pump(&mut player, &media, 0.0);
    assert!(player.is_media_playing());
}

#[test]
fn track_without_media_stays_frozen() {
    let (mut player, media) = setup();
    player.load_track(silent_track("s", 900));
    player.toggle_play();

    assert!(player.is_playing());
    assert_eq!(plays(&media), 0);
    assert_eq!(media.commands(), vec![MediaCommand::Load(None)]);

    for _ in 0..5 {
        pump(&mut player, &media, 30.0);
    }

    assert_eq!(player.load_state(), LoadState::Loading);
    assert_eq!(player.elapsed_label(), "0:00");
    assert_eq!(player.duration_label(), "15:00");
    assert_eq!(player.progress_fraction(), 0.0);
}

#[test]
fn switching_to_track_without_media_drops_play_intent() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 5.0);
    player.drain_events();

    player.load_track(silent_track("s", 900));

    assert!(!player.is_playing());
    assert_eq!(plays(&media), 1);
    assert_eq!(
        player.drain_events(),
        vec![
            PlaybackEvent::StateChanged { playing: false },
            PlaybackEvent::TrackLoaded {
                track_id: TrackId::new("s"),
                previous_track_id: Some(TrackId::new("a")),
            },
        ]
    );

    pump(&mut player, &media, 10.0);
    assert!(!player.is_playing());
    assert_eq!(player.load_state(), LoadState::Loading);
}

#[test]
fn catalog_track_without_audio_is_frozen_too() {
    let (mut player, media) = setup();
    let quran = catalog::find(&TrackId::new("7")).cloned().unwrap();
    assert!(!quran.is_playable());

    player.load_track(quran);
    player.toggle_play();
    pump(&mut player, &media, 10.0);

    assert!(player.is_playing());
    assert_eq!(player.current_time_seconds(), 0.0);
}

// ===== Reload =====

#[test]
fn reloading_same_media_keeps_progress() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 42.0);
    player.toggle_like();
    let generation = player.generation();

    player.load_track(track("a", 300));

    assert_eq!(player.current_time_seconds(), 42.0);
    assert!(player.is_liked());
    assert!(player.is_playing());
    assert_eq!(player.generation(), generation);
    assert_eq!(
        media.count(|c| matches!(c, MediaCommand::Load(_))),
        1,
        "primitive not reloaded"
    );
}

#[test]
fn reloading_track_without_media_starts_over() {
    let (mut player, media) = setup();
    player.load_track(silent_track("s", 900));
    player.load_track(silent_track("s", 900));

    assert_eq!(media.commands(), vec![MediaCommand::Load(None), MediaCommand::Load(None)]);
    let loads = player
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, PlaybackEvent::TrackLoaded { .. }))
        .count();
    assert_eq!(loads, 2);
}

// ===== Seek =====

#[test]
fn seek_is_optimistic_and_forwarded() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    pump(&mut player, &media, 0.0);

    player.seek(0.25);

    assert_eq!(player.current_time_seconds(), 75.0);
    assert!(media
        .commands()
        .contains(&MediaCommand::SetCurrentTime(75.0)));
    assert_eq!(player.elapsed_label(), "1:15");
}

#[test]
fn seek_clamps_out_of_range_targets() {
    let (mut player, _) = setup();
    player.load_track(track("a", 300));

    player.seek(-0.5);
    assert_eq!(player.current_time_seconds(), 0.0);

    player.seek(1.7);
    assert_eq!(player.current_time_seconds(), 300.0);
    assert_eq!(player.progress_fraction(), 1.0);

    player.seek(f64::NAN);
    assert_eq!(player.current_time_seconds(), 0.0);
}

#[test]
fn seek_without_track_is_ignored() {
    let (mut player, media) = setup();
    player.seek(0.5);
    assert!(media.commands().is_empty());
    assert_eq!(player.generation(), Generation::INITIAL);
}

#[test]
fn stale_position_after_seek_is_dropped() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 10.0);
    let before_seek = player.generation();

    player.seek(0.5);
    player.on_position_update(before_seek, 11.0, 300.0);

    assert_eq!(player.current_time_seconds(), 150.0);

    pump(&mut player, &media, 1.0);
    assert!(close_to(player.current_time_seconds(), 151.0));
}

#[test]
fn play_confirmation_survives_a_seek() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    pump(&mut player, &media, 0.0);

    player.play();
    player.seek(0.5);
    for _ in 0..3 {
        pump(&mut player, &media, 1.0);
    }

    assert!(media.is_playing());
    assert!(player.is_media_playing());
    assert!(close_to(player.current_time_seconds(), 153.0));

    player.pause();
    player.seek(0.1);
    pump(&mut player, &media, 1.0);
    assert!(!media.is_playing());
    assert!(!player.is_media_playing());
}

#[test]
fn play_confirmation_from_previous_load_is_dropped() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    let first_load = player.generation();
    player.load_track(track("b", 120));

    player.on_media_playing(first_load, true);
    assert!(!player.is_media_playing());

    pump(&mut player, &media, 0.0);
    assert!(!player.is_media_playing());
}

// ===== End of track =====

#[test]
fn ended_resets_but_keeps_track() {
    let (mut player, media) = setup();
    player.load_track(track("b", 120));
    player.play();
    pump(&mut player, &media, 0.0);
    player.drain_events();

    pump(&mut player, &media, 200.0);

    assert!(!player.is_playing());
    assert!(!player.is_media_playing());
    assert_eq!(player.progress_fraction(), 0.0);
    assert_eq!(player.current_track().map(|t| t.id.as_str()), Some("b"));
    assert!(player.is_visible());

    let events = player.drain_events();
    assert_eq!(
        events,
        vec![
            PlaybackEvent::StateChanged { playing: false },
            PlaybackEvent::TrackFinished {
                track_id: TrackId::new("b")
            },
        ]
    );
}

#[test]
fn play_after_end_starts_from_the_top() {
    let (mut player, media) = setup();
    player.load_track(track("b", 120));
    player.play();
    pump(&mut player, &media, 0.0);
    pump(&mut player, &media, 120.0);
    assert!(!player.is_playing());

    player.toggle_play();
    assert!(player.is_playing());
    assert_eq!(plays(&media), 2);
    assert!(media
        .commands()
        .contains(&MediaCommand::SetCurrentTime(0.0)));
    player.drain_events();

    pump(&mut player, &media, 1.0);
    assert!(
        !player
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlaybackEvent::TrackFinished { .. })),
        "replay must not finish again straight away"
    );
    assert!(player.is_playing());
    assert!(player.is_media_playing());
    assert!(close_to(player.current_time_seconds(), 1.0));
    assert!(close_to(media.position(), 1.0));
}

#[test]
fn unrecoverable_error_stops_like_an_end() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 30.0);
    player.drain_events();

    media.emit(MediaEvent::Error {
        message: "decode failed".to_string(),
        recoverable: false,
    });
    pump(&mut player, &media, 0.0);

    assert!(!player.is_playing());
    assert_eq!(player.current_time_seconds(), 0.0);
    assert!(player.current_track().is_some());

    let events = player.drain_events();
    assert!(!events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::TrackFinished { .. })));
    assert!(events.contains(&PlaybackEvent::MediaFailed {
        message: "decode failed".to_string(),
        recoverable: false
    }));
}

// ===== Close =====

#[test]
fn close_clears_everything_and_ignores_stale_events() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    player.toggle_mute();
    player.set_view_mode(ViewMode::Expanded);
    pump(&mut player, &media, 20.0);
    let old = player.generation();

    player.close();

    assert!(player.current_track().is_none());
    assert!(!player.is_visible());
    assert!(!player.is_playing());
    assert_eq!(player.load_state(), LoadState::Empty);
    assert_eq!(player.view_mode(), ViewMode::Minimized);
    assert!(!media.is_playing());
    assert!(!media.is_muted());

    player.handle_media_event(TaggedMediaEvent::new(
        old,
        MediaEvent::TimeUpdate {
            current: 25.0,
            duration: 300.0,
        },
    ));
    player.handle_media_event(TaggedMediaEvent::new(old, MediaEvent::Ended));

    assert_eq!(player.progress_fraction(), 0.0);
    assert!(player.current_track().is_none());
    let events = player.drain_events();
    assert!(!events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::TrackFinished { .. })));
}

#[test]
fn close_without_track_is_a_no_op() {
    let (mut player, media) = setup();
    player.close();
    assert!(media.commands().is_empty());
    assert!(!player.has_pending_events());
}

#[test]
fn controls_without_track_do_nothing() {
    let (mut player, media) = setup();
    player.toggle_like();
    player.toggle_mute();
    player.pause();
    player.play();

    assert!(media.commands().is_empty());
    assert!(!player.is_liked());
    assert!(!player.is_muted());
}

// ===== Events / snapshot =====

#[test]
fn load_reports_previous_track() {
    let (mut player, _) = setup();
    player.load_track(track("a", 300));
    player.load_track(track("b", 120));

    let events = player.drain_events();
    assert_eq!(
        events,
        vec![
            PlaybackEvent::TrackLoaded {
                track_id: TrackId::new("a"),
                previous_track_id: None
            },
            PlaybackEvent::TrackLoaded {
                track_id: TrackId::new("b"),
                previous_track_id: Some(TrackId::new("a"))
            },
        ]
    );
    assert!(!player.has_pending_events());
}

#[test]
fn snapshot_agrees_with_accessors() {
    let (mut player, media) = setup();
    player.load_track(track("a", 300));
    player.play();
    pump(&mut player, &media, 61.0);
    player.toggle_view_mode();

    let view = player.snapshot();
    assert!(view.visible);
    assert_eq!(view.load_state, LoadState::Ready);
    assert!(view.is_playing);
    assert!(view.media_playing);
    assert_eq!(view.elapsed, "1:01");
    assert_eq!(view.remaining, "3:59");
    assert_eq!(view.total, "5:00");
    assert_eq!(view.view_mode, ViewMode::Expanded);
    assert_eq!(view.track.map(|t| t.id), Some(TrackId::new("a")));
}
