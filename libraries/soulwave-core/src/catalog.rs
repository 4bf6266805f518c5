//! Built-in session catalog
//!
//! The app ships a fixed, ordered list of sessions. Screens read it; nothing
//! mutates it.

use crate::error::{CoreError, Result};
use crate::types::{Category, OnboardingStep, Track, TrackId};
use std::sync::OnceLock;

struct Entry {
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    category: Category,
    duration_seconds: u32,
    image_seed: &'static str,
    audio: Option<&'static str>,
    premium: bool,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        title: "Deep Sleep Therapy",
        artist: "SoulWave Originals",
        category: Category::Sleep,
        duration_seconds: 1800,
        image_seed: "sleep1",
        audio: Some("audio/deep-sleep-therapy.mp3"),
        premium: false,
    },
    Entry {
        id: "2",
        title: "Morning Clarity",
        artist: "Mindful Minds",
        category: Category::Meditation,
        duration_seconds: 600,
        image_seed: "meditate1",
        audio: Some("audio/morning-clarity.mp3"),
        premium: false,
    },
    Entry {
        id: "3",
        title: "Delta Waves 432Hz",
        artist: "Frequency Healer",
        category: Category::Healing,
        duration_seconds: 3600,
        image_seed: "heal1",
        audio: Some("audio/delta-waves-432hz.mp3"),
        premium: true,
    },
    Entry {
        id: "4",
        title: "Forest Rain",
        artist: "Nature Sounds",
        category: Category::Nature,
        duration_seconds: 1200,
        image_seed: "nature1",
        audio: Some("audio/forest-rain.mp3"),
        premium: false,
    },
    Entry {
        id: "5",
        title: "Deep Focus Flow",
        artist: "Study LoFi",
        category: Category::Focus,
        duration_seconds: 2400,
        image_seed: "focus1",
        audio: Some("audio/deep-focus-flow.mp3"),
        premium: false,
    },
    Entry {
        id: "6",
        title: "Anxiety Release",
        artist: "Dr. Calm",
        category: Category::Healing,
        duration_seconds: 900,
        image_seed: "anxiety",
        audio: None,
        premium: true,
    },
    Entry {
        id: "7",
        title: "Surah Ar-Rahman",
        artist: "Evening Recitations",
        category: Category::Quran,
        duration_seconds: 1500,
        image_seed: "quran1",
        audio: None,
        premium: false,
    },
];

fn image_url(seed: &str, size: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/{size}/{size}")
}

/// All sessions in catalog order
pub fn tracks() -> &'static [Track] {
    static TRACKS: OnceLock<Vec<Track>> = OnceLock::new();
    TRACKS.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|e| Track {
                id: TrackId::new(e.id),
                title: e.title.to_string(),
                artist: e.artist.to_string(),
                category: e.category,
                duration_seconds: e.duration_seconds,
                image_url: image_url(e.image_seed, 400),
                audio_url: e.audio.map(str::to_string),
                is_premium: e.premium,
            })
            .collect()
    })
}

/// Look up a session by id
pub fn find(id: &TrackId) -> Option<&'static Track> {
    tracks().iter().find(|t| &t.id == id)
}

/// Look up a session by id, failing with `TrackNotFound`
pub fn get(id: &str) -> Result<&'static Track> {
    find(&TrackId::new(id)).ok_or_else(|| CoreError::TrackNotFound(id.to_string()))
}

/// Sessions in a category; `None` is the "All" chip
pub fn by_category(category: Option<Category>) -> impl Iterator<Item = &'static Track> {
    tracks()
        .iter()
        .filter(move |t| category.map_or(true, |c| t.category == c))
}

/// Case-insensitive title search, used to map a recommendation back to a session
pub fn find_by_title(title: &str) -> Option<&'static Track> {
    let needle = title.trim();
    tracks()
        .iter()
        .find(|t| t.title.eq_ignore_ascii_case(needle))
}

/// Onboarding carousel pages
pub fn onboarding_steps() -> Vec<OnboardingStep> {
    [
        (
            "Relax your mind",
            "Escape the noise of the world and find your inner sanctuary.",
            "relax",
        ),
        (
            "Heal through sound",
            "Experience the power of 432Hz and 528Hz healing frequencies.",
            "heal",
        ),
        (
            "Sleep deeper",
            "Drift off effortlessly with our curated sleep therapy sessions.",
            "sleep",
        ),
    ]
    .into_iter()
    .map(|(title, description, seed)| OnboardingStep {
        title: title.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{seed}/600/800"),
    })
    .collect()
}
