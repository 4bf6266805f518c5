//! Playback controller - the player overlay state machine
//!
//! Owns the single playback session and the media primitive behind it.
//! Every operation runs to completion synchronously; the primitive reports
//! back through [`PlaybackController::handle_media_event`].

use crate::{
    events::PlaybackEvent,
    format::format_clock,
    media::{MediaEvent, MediaPrimitive, TaggedMediaEvent},
    types::{Generation, LoadState, PlayerView, ViewMode},
};
use soulwave_core::{Track, TrackId};
use tracing::{debug, trace, warn};

/// Live state of the loaded track
#[derive(Debug, Clone)]
struct Session {
    track: Track,

    /// Source handed to the media primitive; `None` for unplayable tracks
    source: Option<String>,

    /// Load axis: false = Loading, true = Ready
    ready: bool,

    /// Requested play state (intent)
    is_playing: bool,

    /// Last play state confirmed by the media primitive
    media_playing: bool,

    /// Play was requested before the primitive was ready
    play_when_ready: bool,

    current_time: f64,

    /// Duration reported by the primitive, once usable
    media_duration: Option<f64>,

    is_liked: bool,
    is_muted: bool,
}

impl Session {
    fn new(track: Track, resume: bool) -> Self {
        let source = playable_source(&track).map(str::to_string);
        let is_playing = resume && source.is_some();
        let play_when_ready = is_playing;

        Self {
            track,
            source,
            ready: false,
            is_playing,
            media_playing: false,
            play_when_ready,
            current_time: 0.0,
            media_duration: None,
            is_liked: false,
            is_muted: false,
        }
    }

    /// Best known duration: primitive-reported, else the track's nominal one
    fn duration(&self) -> f64 {
        self.media_duration
            .unwrap_or_else(|| f64::from(self.track.duration_seconds))
    }

    fn progress(&self) -> f64 {
        let duration = self.duration();
        if !usable_duration(duration) {
            return 0.0;
        }
        (self.current_time / duration).clamp(0.0, 1.0)
    }

    /// Playhead for display, never past the end
    fn elapsed(&self) -> f64 {
        let duration = self.duration();
        if usable_duration(duration) {
            self.current_time.min(duration)
        } else {
            self.current_time
        }
    }

    fn remaining(&self) -> f64 {
        (self.duration() - self.elapsed()).max(0.0)
    }
}

fn playable_source(track: &Track) -> Option<&str> {
    track.audio_url.as_deref().filter(|_| track.is_playable())
}

fn usable_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Central player overlay management
///
/// Tracks what is loaded, whether the user wants it playing, where the
/// playhead is, and how the overlay is shown:
/// - Load axis (Empty, Loading, Ready)
/// - Play intent vs. confirmed media state
/// - Optimistic seeking
/// - Stale media event suppression (generation counter)
/// - Like / mute toggles scoped to the current track
/// - Minimized / expanded view
///
/// Commands to the media primitive are only issued on state transitions, so
/// reading the state any number of times never repeats a command.
pub struct PlaybackController<M: MediaPrimitive> {
    media: M,
    generation: Generation,

    /// Generation the current track was loaded under
    load_generation: Generation,
    session: Option<Session>,
    view_mode: ViewMode,

    // Event queue for the surrounding layers
    pending_events: Vec<PlaybackEvent>,
}

impl<M: MediaPrimitive> PlaybackController<M> {
    /// Create a controller that exclusively owns `media`
    pub fn new(media: M) -> Self {
        Self {
            media,
            generation: Generation::INITIAL,
            load_generation: Generation::INITIAL,
            session: None,
            view_mode: ViewMode::default(),
            pending_events: Vec::new(),
        }
    }

    // ===== Session =====

    /// Load a track, replacing the current session
    ///
    /// Reloading the media that is already active is a no-op: progress, like
    /// and mute survive and the primitive is not touched. Otherwise the new
    /// session starts at 0 with like/mute cleared, and inherits the play
    /// intent of the one it replaces (playback resumes once the primitive
    /// reports a duration). A track without media never inherits it.
    pub fn load_track(&mut self, track: Track) {
        if let Some(session) = self.session.as_mut() {
            let incoming = playable_source(&track);
            if incoming.is_some() && session.source.as_deref() == incoming {
                debug!(track_id = %track.id, "Media already active, keeping session");
                session.track = track;
                return;
            }
        }

        let previous = self.session.take();
        let was_playing = previous.as_ref().is_some_and(|s| s.is_playing);
        if previous.as_ref().is_some_and(|s| s.is_muted) {
            self.media.set_muted(false);
        }

        self.generation = self.generation.next();
        self.load_generation = self.generation;
        let session = Session::new(track, was_playing);
        self.media.load(session.source.as_deref(), self.generation);

        debug!(
            track_id = %session.track.id,
            generation = self.generation.value(),
            playable = session.source.is_some(),
            resume = session.play_when_ready,
            "Track loaded"
        );

        if was_playing && !session.is_playing {
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing: false });
        }

        self.pending_events.push(PlaybackEvent::TrackLoaded {
            track_id: session.track.id.clone(),
            previous_track_id: previous.map(|s| s.track.id),
        });
        self.session = Some(session);
    }

    /// Destroy the session
    ///
    /// Pauses the primitive, clears the track and every piece of derived
    /// state, and invalidates events still in flight for the closed track.
    pub fn close(&mut self) {
        let Some(session) = self.session.take() else {
            debug!("Close ignored: no track loaded");
            return;
        };

        self.generation = self.generation.next();
        if session.source.is_some() {
            self.media.pause();
        }
        if session.is_muted {
            self.media.set_muted(false);
        }
        self.view_mode = ViewMode::Minimized;

        debug!(track_id = %session.track.id, generation = self.generation.value(), "Session closed");

        if session.is_playing {
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing: false });
        }
        self.pending_events.push(PlaybackEvent::Closed {
            track_id: session.track.id,
        });
    }

    // ===== Playback Control =====

    /// Flip the play intent
    ///
    /// Ignored while no track is loaded.
    pub fn toggle_play(&mut self) {
        match self.session.as_ref().map(|s| s.is_playing) {
            Some(true) => self.pause(),
            Some(false) => self.play(),
            None => debug!("Toggle play ignored: no track loaded"),
        }
    }

    /// Request playback
    ///
    /// A rejected request keeps the intent; the primitive's own events
    /// reconcile what is actually audible.
    pub fn play(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("Play ignored: no track loaded");
            return;
        };
        if session.is_playing {
            return;
        }

        session.is_playing = true;
        session.play_when_ready = false;
        self.pending_events
            .push(PlaybackEvent::StateChanged { playing: true });

        if session.source.is_none() {
            debug!(track_id = %session.track.id, "Track has no media, nothing to play");
            return;
        }

        Self::request_play(&mut self.media, &session.track.id, &mut self.pending_events);
    }

    /// Request pause
    pub fn pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_playing {
            return;
        }

        session.is_playing = false;
        session.play_when_ready = false;
        self.pending_events
            .push(PlaybackEvent::StateChanged { playing: false });

        if session.source.is_some() {
            self.media.pause();
        }
    }

    fn request_play(media: &mut M, track_id: &TrackId, events: &mut Vec<PlaybackEvent>) {
        if let Err(e) = media.play() {
            warn!(track_id = %track_id, error = %e, "Play request rejected, keeping play intent");
            events.push(PlaybackEvent::PlayRejected {
                reason: e.to_string(),
            });
        }
    }

    // ===== Seek =====

    /// Seek to a fraction of the track
    ///
    /// The fraction is clamped to [0, 1] (NaN counts as 0). The playhead is
    /// updated immediately; position reports still in flight from before
    /// the seek are discarded.
    pub fn seek(&mut self, target_fraction: f64) {
        let Some(session) = self.session.as_mut() else {
            debug!("Seek ignored: no track loaded");
            return;
        };

        let fraction = if target_fraction.is_nan() {
            0.0
        } else {
            target_fraction.clamp(0.0, 1.0)
        };
        let duration = session.duration();
        let position = if usable_duration(duration) {
            fraction * duration
        } else {
            0.0
        };

        self.generation = self.generation.next();
        session.current_time = position;
        if session.source.is_some() {
            self.media.set_current_time(position, self.generation);
        }

        debug!(
            track_id = %session.track.id,
            position,
            generation = self.generation.value(),
            "Seek"
        );
        self.pending_events.push(PlaybackEvent::Seeked {
            position_seconds: position,
        });
    }

    // ===== Media Events =====

    /// Apply an event reported by the media primitive
    ///
    /// Position, end and error reports tagged with anything but the current
    /// generation are dropped. Play/pause confirmations only have to belong
    /// to the current load, since a seek does not change what is audible.
    pub fn handle_media_event(&mut self, tagged: TaggedMediaEvent) {
        let TaggedMediaEvent { generation, event } = tagged;
        match event {
            MediaEvent::TimeUpdate { current, duration } => {
                self.on_position_update(generation, current, duration);
            }
            MediaEvent::LoadedMetadata { duration } => {
                self.on_metadata_loaded(generation, duration);
            }
            MediaEvent::Ended => self.on_track_ended(generation),
            MediaEvent::Playing => self.on_media_playing(generation, true),
            MediaEvent::Paused => self.on_media_playing(generation, false),
            MediaEvent::Error {
                message,
                recoverable,
            } => self.on_media_error(generation, &message, recoverable),
        }
    }

    /// Position report
    ///
    /// `duration` only replaces the known duration when it is a finite
    /// positive number; until then the track's nominal duration stands in.
    pub fn on_position_update(&mut self, generation: Generation, current: f64, duration: f64) {
        let Some(session) = self.live_session(generation) else {
            return;
        };

        if current.is_finite() {
            session.current_time = current.max(0.0);
        }
        if usable_duration(duration) {
            session.media_duration = Some(duration);
        }

        self.resolve_ready();
    }

    /// Duration metadata became available
    pub fn on_metadata_loaded(&mut self, generation: Generation, duration: f64) {
        let Some(session) = self.live_session(generation) else {
            return;
        };

        if usable_duration(duration) {
            session.media_duration = Some(duration);
        }

        self.resolve_ready();
    }

    /// Media reached its end
    ///
    /// Rewinds and stops, but keeps the track loaded. The rewind is sent to
    /// the primitive as well so the next play starts from the top.
    pub fn on_track_ended(&mut self, generation: Generation) {
        let (track_id, was_playing, has_source) = {
            let Some(session) = self.live_session(generation) else {
                return;
            };

            let was_playing = session.is_playing;
            session.is_playing = false;
            session.media_playing = false;
            session.play_when_ready = false;
            session.current_time = 0.0;
            (session.track.id.clone(), was_playing, session.source.is_some())
        };

        debug!(track_id = %track_id, "Track finished");
        if has_source {
            self.media.set_current_time(0.0, self.generation);
        }

        if was_playing {
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing: false });
        }
        self.pending_events
            .push(PlaybackEvent::TrackFinished { track_id });
    }

    /// The primitive confirmed it is (or is no longer) producing sound
    ///
    /// Only the confirmed state changes; the user's intent is left alone.
    /// Confirmations issued before a seek on the same load still count.
    pub fn on_media_playing(&mut self, generation: Generation, playing: bool) {
        if generation < self.load_generation || generation > self.generation {
            trace!(
                event_generation = generation.value(),
                load_generation = self.load_generation.value(),
                "Dropping play state from another load"
            );
            return;
        }
        if let Some(session) = self.session.as_mut() {
            trace!(playing, intent = session.is_playing, "Media play state confirmed");
            session.media_playing = playing;
        }
    }

    /// The primitive reported a failure
    ///
    /// An unrecoverable failure ends the session's playback like a natural
    /// end would, minus the "finished" notification. Nothing is retried.
    pub fn on_media_error(&mut self, generation: Generation, message: &str, recoverable: bool) {
        let stopped = {
            let Some(session) = self.live_session(generation) else {
                return;
            };

            warn!(
                track_id = %session.track.id,
                error = message,
                recoverable,
                "Media primitive reported a failure"
            );

            if recoverable {
                false
            } else {
                let was_playing = session.is_playing;
                session.is_playing = false;
                session.media_playing = false;
                session.play_when_ready = false;
                session.current_time = 0.0;
                was_playing
            }
        };

        self.pending_events.push(PlaybackEvent::MediaFailed {
            message: message.to_string(),
            recoverable,
        });
        if stopped {
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing: false });
        }
    }

    fn live_session(&mut self, generation: Generation) -> Option<&mut Session> {
        if generation != self.generation {
            trace!(
                event_generation = generation.value(),
                current_generation = self.generation.value(),
                "Dropping stale media event"
            );
            return None;
        }
        self.session.as_mut()
    }

    /// Loading → Ready on the first usable duration
    fn resolve_ready(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.ready {
            return;
        }
        let Some(duration) = session.media_duration else {
            return;
        };

        session.ready = true;
        debug!(track_id = %session.track.id, duration, "Track ready");
        self.pending_events.push(PlaybackEvent::Ready {
            duration_seconds: duration,
        });

        if session.play_when_ready {
            session.play_when_ready = false;
            if session.is_playing {
                Self::request_play(&mut self.media, &session.track.id, &mut self.pending_events);
            }
        }
    }

    // ===== Toggles =====

    /// Flip the like flag of the current track
    pub fn toggle_like(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.is_liked = !session.is_liked;
        self.pending_events.push(PlaybackEvent::LikeChanged {
            liked: session.is_liked,
        });
    }

    /// Flip mute and forward it to the primitive
    pub fn toggle_mute(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.is_muted = !session.is_muted;
        self.media.set_muted(session.is_muted);
        self.pending_events.push(PlaybackEvent::MuteChanged {
            muted: session.is_muted,
        });
    }

    /// Show the overlay as a bar or full screen
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        self.pending_events
            .push(PlaybackEvent::ViewModeChanged { mode });
    }

    /// Switch between bar and full screen
    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    // ===== State Queries =====

    /// Whether the overlay is rendered at all
    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.session.as_ref().map(|s| &s.track)
    }

    pub fn load_state(&self) -> LoadState {
        match &self.session {
            None => LoadState::Empty,
            Some(s) if s.ready => LoadState::Ready,
            Some(_) => LoadState::Loading,
        }
    }

    /// Requested play state; always false without a track
    pub fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_playing)
    }

    /// Play state last confirmed by the media primitive
    pub fn is_media_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.media_playing)
    }

    pub fn current_time_seconds(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| s.current_time)
    }

    /// Best known duration; 0 without a track
    pub fn duration_seconds(&self) -> f64 {
        self.session.as_ref().map_or(0.0, Session::duration)
    }

    /// Playhead as a fraction of the duration, always within [0, 1]
    pub fn progress_fraction(&self) -> f64 {
        self.session.as_ref().map_or(0.0, Session::progress)
    }

    pub fn elapsed_label(&self) -> String {
        format_clock(self.session.as_ref().map_or(0.0, Session::elapsed))
    }

    pub fn remaining_label(&self) -> String {
        format_clock(self.session.as_ref().map_or(0.0, Session::remaining))
    }

    pub fn duration_label(&self) -> String {
        format_clock(self.duration_seconds())
    }

    pub fn is_liked(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_liked)
    }

    pub fn is_muted(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_muted)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Current generation; media events must carry it to be applied
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Everything the presentation layer renders, in one consistent snapshot
    pub fn snapshot(&self) -> PlayerView {
        PlayerView {
            visible: self.is_visible(),
            track: self.current_track().cloned(),
            load_state: self.load_state(),
            is_playing: self.is_playing(),
            media_playing: self.is_media_playing(),
            current_time_seconds: self.current_time_seconds(),
            duration_seconds: self.duration_seconds(),
            progress_fraction: self.progress_fraction(),
            elapsed: self.elapsed_label(),
            remaining: self.remaining_label(),
            total: self.duration_label(),
            is_liked: self.is_liked(),
            is_muted: self.is_muted(),
            view_mode: self.view_mode,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}
