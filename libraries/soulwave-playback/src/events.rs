//! Playback Events
//!
//! Event-based communication from the controller to the layers around it.
//! Events are queued at key points and drained by the caller:
//! - Track loaded / closed
//! - Play intent changes
//! - Duration resolved (Loading → Ready)
//! - Seeks
//! - Track finished (the one-way "session complete" signal)
//! - Rejected plays and media failures

use serde::{Deserialize, Serialize};
use soulwave_core::TrackId;

use crate::types::ViewMode;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new session started
    TrackLoaded {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the replaced track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Play intent changed
    StateChanged {
        /// Whether the user wants playback running
        playing: bool,
    },

    /// First usable duration arrived for the current track
    Ready {
        /// Duration reported by the media primitive
        duration_seconds: f64,
    },

    /// Playhead moved by the user
    Seeked {
        /// Absolute target position
        position_seconds: f64,
    },

    /// Track played through to the end
    ///
    /// The session stays loaded; what happens next is up to the listener.
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// The media primitive refused a play request
    PlayRejected {
        /// Reason reported by the primitive
        reason: String,
    },

    /// The media primitive reported a failure
    MediaFailed {
        /// Failure description
        message: String,
        /// Whether the primitive expects to recover on its own
        recoverable: bool,
    },

    /// Like toggled
    LikeChanged { liked: bool },

    /// Mute toggled
    MuteChanged { muted: bool },

    /// Overlay switched between bar and full screen
    ViewModeChanged { mode: ViewMode },

    /// Session destroyed by the user
    Closed {
        /// ID of the closed track
        track_id: TrackId,
    },
}
