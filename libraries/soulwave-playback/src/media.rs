//! Platform-agnostic media primitive trait
//!
//! Abstracts the playable handle (an HTML media element, a native player, or
//! the stepped fake used in tests). The controller is its only owner.

use crate::error::Result;
use crate::types::Generation;
use serde::{Deserialize, Serialize};

/// Platform media primitive
///
/// Commands are fire-and-forget. Anything the primitive learns afterwards
/// (duration, position, end of stream, failures) comes back as a
/// [`TaggedMediaEvent`] tagged with the last generation it was given.
pub trait MediaPrimitive {
    /// Replace the media source; `None` unloads the current one
    ///
    /// Resets the primitive's position to zero. Events produced from now on
    /// must carry `generation`.
    fn load(&mut self, source: Option<&str>, generation: Generation);

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Request accepted (playback may still start later)
    /// * `Err(_)` - Request refused, e.g. blocked autoplay
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to an absolute position in seconds
    ///
    /// Events produced from now on must carry `generation`.
    fn set_current_time(&mut self, seconds: f64, generation: Generation);

    /// Mute or unmute output
    fn set_muted(&mut self, muted: bool);
}

/// Events emitted by a media primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Periodic playhead report; `duration` is NaN or infinite until metadata loads
    TimeUpdate { current: f64, duration: f64 },

    /// Duration became known
    LoadedMetadata { duration: f64 },

    /// Reached the end of the media
    Ended,

    /// Playback actually started
    Playing,

    /// Playback actually stopped
    Paused,

    /// Decode or network failure
    Error { message: String, recoverable: bool },
}

/// A media event together with the generation it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedMediaEvent {
    pub generation: Generation,
    pub event: MediaEvent,
}

impl TaggedMediaEvent {
    pub fn new(generation: Generation, event: MediaEvent) -> Self {
        Self { generation, event }
    }
}
