/// Track domain type
use crate::error::CoreError;
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Session category shown on category chips and the player subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sleep,
    Meditation,
    Focus,
    Healing,
    Nature,
    Quran,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Sleep,
        Category::Meditation,
        Category::Focus,
        Category::Healing,
        Category::Nature,
        Category::Quran,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "Sleep",
            Category::Meditation => "Meditation",
            Category::Focus => "Focus",
            Category::Healing => "Healing",
            Category::Nature => "Nature",
            Category::Quran => "Quran",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Audio session as supplied by the catalog
///
/// Read-only to the player: the controller clones it into the live session
/// and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Session title
    pub title: String,

    /// Artist or narrator
    pub artist: String,

    /// Session category
    pub category: Category,

    /// Nominal duration in whole seconds, used until real media metadata arrives
    pub duration_seconds: u32,

    /// Artwork reference
    pub image_url: String,

    /// Playable media reference; `None` means the track cannot be played
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,

    /// Premium badge
    #[serde(default)]
    pub is_premium: bool,
}

impl Track {
    /// Create a track with no media reference
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        category: Category,
        duration_seconds: u32,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            category,
            duration_seconds,
            image_url: String::new(),
            audio_url: None,
            is_premium: false,
        }
    }

    /// Attach a playable media reference
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Attach artwork
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Whether the media primitive has anything to play for this track
    pub fn is_playable(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }

    /// Nominal duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_seconds))
    }
}
