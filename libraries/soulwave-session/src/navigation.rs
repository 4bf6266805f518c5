//! Screens and theme

use serde::{Deserialize, Serialize};
use std::fmt;

/// App screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Splash,
    Auth,
    Onboarding,
    Home,
    Explore,
    Sessions,
    Favorites,
    Profile,
}

impl View {
    /// Screens listed in the bottom navigation bar
    pub const TABS: [View; 5] = [
        View::Home,
        View::Explore,
        View::Sessions,
        View::Favorites,
        View::Profile,
    ];

    /// Screens that take over the whole display (no nav bar, no player)
    pub fn is_fullscreen(self) -> bool {
        matches!(self, View::Splash | View::Auth | View::Onboarding)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value; anything but `"light"` is dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
