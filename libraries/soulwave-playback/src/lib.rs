//! SoulWave - Player Overlay
//!
//! Platform-agnostic playback session management for SoulWave.
//!
//! This crate provides:
//! - The load axis (Empty, Loading, Ready) of the single active session
//! - Play intent, tracked apart from what the media actually does
//! - Optimistic seeking with stale event suppression
//! - Like and mute toggles scoped to the current track
//! - Minimized / expanded overlay state
//! - A "track finished" signal for session bookkeeping
//!
//! # Architecture
//!
//! `soulwave-playback` never touches audio itself. The platform supplies a
//! [`MediaPrimitive`] (an HTML media element, a native player, the stepped
//! fake) and feeds its events back through
//! [`PlaybackController::handle_media_event`]. Every event carries the
//! [`Generation`] it was produced under, so late reports for a replaced,
//! seeked or closed session are dropped.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use soulwave_core::{Category, Track};
//! use soulwave_playback::{LoadState, PlaybackController, SteppedMedia};
//!
//! let media = SteppedMedia::new().with_duration("audio/rain.mp3", 240.0);
//! let mut player = PlaybackController::new(media.clone());
//!
//! let track = Track::new("1", "Rain", "Nature Sounds", Category::Nature, 600)
//!     .with_audio_url("audio/rain.mp3");
//! player.load_track(track);
//! player.play();
//! assert_eq!(player.load_state(), LoadState::Loading);
//!
//! // The platform reports back asynchronously
//! for event in media.step(1.0) {
//!     player.handle_media_event(event);
//! }
//! assert_eq!(player.load_state(), LoadState::Ready);
//! assert_eq!(player.duration_label(), "4:00");
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use soulwave_playback::{Generation, MediaPrimitive, Result};
//!
//! struct NativePlayer {
//!     // ... platform handle
//! }
//!
//! impl MediaPrimitive for NativePlayer {
//!     fn load(&mut self, source: Option<&str>, generation: Generation) {
//!         // Swap the source, remember `generation` for outgoing events
//!     }
//!
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) {}
//!
//!     fn set_current_time(&mut self, seconds: f64, generation: Generation) {}
//!
//!     fn set_muted(&mut self, muted: bool) {}
//! }
//! ```

mod controller;
mod error;
mod events;
mod format;
mod media;
pub mod stepped;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{MediaError, Result};
pub use events::PlaybackEvent;
pub use format::format_clock;
pub use media::{MediaEvent, MediaPrimitive, TaggedMediaEvent};
pub use stepped::{MediaCommand, SteppedMedia};
pub use types::{Generation, LoadState, PlayerView, ViewMode};
