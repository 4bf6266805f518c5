//! Core types for the player overlay

use serde::{Deserialize, Serialize};
use soulwave_core::Track;

/// Load axis of the playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    /// No track set
    Empty,

    /// Track assigned, waiting for a usable duration from the media primitive
    Loading,

    /// Duration metadata received
    Ready,
}

/// How the overlay is rendered
///
/// Independent of playback: either mode is valid in any load/play state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Bar above the bottom navigation
    #[default]
    Minimized,

    /// Full-screen "Now Playing" view
    Expanded,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Minimized => ViewMode::Expanded,
            ViewMode::Expanded => ViewMode::Minimized,
        }
    }
}

/// Monotonic session generation
///
/// Bumped by every load, seek and close that reaches the media primitive.
/// Media events carry the generation they were produced under. Reports from
/// an older generation are discarded, except play/pause confirmations that
/// still belong to the current load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    /// Generation before any track has been loaded
    pub const INITIAL: Generation = Generation(0);

    /// The following generation
    #[must_use]
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    /// Raw counter value
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Render snapshot of the overlay
///
/// Everything a presentation layer needs, computed in one pass from the
/// controller so the fields cannot disagree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub visible: bool,
    pub track: Option<Track>,
    pub load_state: LoadState,
    pub is_playing: bool,
    pub media_playing: bool,
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
    pub progress_fraction: f64,
    pub elapsed: String,
    pub remaining: String,
    pub total: String,
    pub is_liked: bool,
    pub is_muted: bool,
    pub view_mode: ViewMode,
}
