//! Simulated playback
//!
//! Plays a catalog track through the full app session against the stepped
//! media fake, so the state machine can be watched without audio hardware.

use crate::error::{CliError, Result};
use serde::Serialize;
use soulwave_core::{Track, UserStats};
use soulwave_playback::{PlaybackEvent, PlayerView, SteppedMedia};
use soulwave_session::{AppSession, Credentials, MemoryPreferences};
use tracing::{debug, info};

/// How to drive a simulated session
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    /// Simulated time to run for, in seconds
    pub seconds: f64,
    /// Time advanced per frame, in seconds
    pub step: f64,
    /// Fraction to seek to right after loading
    pub seek: Option<f64>,
    /// Refuse every play request, like a browser without user gesture
    pub block_autoplay: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            seconds: 30.0,
            step: 5.0,
            seek: None,
            block_autoplay: false,
        }
    }
}

impl SimulationOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "step must be a positive number of seconds, got {}",
                self.step
            )));
        }
        if !self.seconds.is_finite() || self.seconds < 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "seconds must be zero or more, got {}",
                self.seconds
            )));
        }
        if let Some(seek) = self.seek {
            if !seek.is_finite() {
                return Err(CliError::InvalidArgument("seek must be a number".into()));
            }
        }
        Ok(())
    }
}

/// Player state after one step
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Simulated time since the track was loaded
    pub at_seconds: f64,
    pub view: PlayerView,
}

/// Outcome of a simulated session
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub frames: Vec<Frame>,
    pub events: Vec<PlaybackEvent>,
    pub finished: bool,
    pub stats: Option<UserStats>,
}

/// Run `track` for the configured amount of simulated time
///
/// The fake reports the track's nominal duration as its real one. Stops
/// early once the track finishes.
pub fn run(track: Track, options: &SimulationOptions) -> Result<SimulationReport> {
    options.validate()?;

    let media = SteppedMedia::with_default_duration(f64::from(track.duration_seconds));
    media.set_block_play(options.block_autoplay);

    let mut app = AppSession::new(MemoryPreferences::new(), media.clone());
    app.start()?;
    app.sign_in(&Credentials::sign_in("listener@soulwave.app", "simulated"))?;
    app.complete_onboarding()?;

    info!(track_id = %track.id, title = %track.title, "Starting simulated session");
    app.play_track(track);
    pump(&mut app, &media, 0.0);

    if let Some(fraction) = options.seek {
        app.player_mut().seek(fraction);
        pump(&mut app, &media, 0.0);
    }

    let mut frames = Vec::new();
    let mut events = app.drain_player_events();
    let mut finished = has_finished(&events);
    let mut elapsed = 0.0;

    while !finished && elapsed < options.seconds {
        let dt = options.step.min(options.seconds - elapsed);
        pump(&mut app, &media, dt);
        elapsed += dt;

        let new_events = app.drain_player_events();
        finished = has_finished(&new_events);
        events.extend(new_events);

        debug!(at = elapsed, "Frame");
        frames.push(Frame {
            at_seconds: elapsed,
            view: app.player().snapshot(),
        });
    }

    Ok(SimulationReport {
        frames,
        events,
        finished,
        stats: app.user().map(|u| u.stats),
    })
}

fn pump(app: &mut AppSession<MemoryPreferences, SteppedMedia>, media: &SteppedMedia, dt: f64) {
    for event in media.step(dt) {
        app.handle_media_event(event);
    }
}

fn has_finished(events: &[PlaybackEvent]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::TrackFinished { .. }))
}
