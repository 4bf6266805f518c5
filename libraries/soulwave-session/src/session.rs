//! App session
//!
//! Ties the signed-in user, screen routing and theme to the single playback
//! controller, and turns finished tracks into listening statistics.

use crate::auth::{authenticate, Credentials};
use crate::error::{Result, SessionError};
use crate::navigation::{Theme, View};
use crate::preferences::{PreferenceStore, KEY_ONBOARDED, KEY_THEME, KEY_USER};
use chrono::Timelike;
use soulwave_core::{Track, User};
use soulwave_playback::{MediaPrimitive, PlaybackController, PlaybackEvent, TaggedMediaEvent};
use tracing::{debug, error, info, warn};

/// Greeting for an hour of the day (0-23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Greeting for the current local time
pub fn greeting_now() -> &'static str {
    greeting(chrono::Local::now().hour())
}

/// Everything the app shell keeps between screens
pub struct AppSession<S: PreferenceStore, M: MediaPrimitive> {
    prefs: S,
    player: PlaybackController<M>,
    view: View,
    theme: Theme,
    user: Option<User>,

    // Player events already applied to the session, kept for the caller
    player_events: Vec<PlaybackEvent>,
}

impl<S: PreferenceStore, M: MediaPrimitive> AppSession<S, M> {
    /// Create a session on the splash screen
    pub fn new(prefs: S, media: M) -> Self {
        Self {
            prefs,
            player: PlaybackController::new(media),
            view: View::Splash,
            theme: Theme::default(),
            user: None,
            player_events: Vec::new(),
        }
    }

    // ===== Lifecycle =====

    /// Leave the splash screen
    ///
    /// Restores the theme, then routes to Home for a stored user or to Auth.
    /// A stored user that cannot be decoded is discarded.
    pub fn start(&mut self) -> Result<View> {
        self.theme = Theme::from_stored(self.prefs.get(KEY_THEME)?.as_deref());

        self.user = match self.prefs.get(KEY_USER)? {
            Some(json) => match serde_json::from_str::<User>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable stored user");
                    self.prefs.remove(KEY_USER)?;
                    None
                }
            },
            None => None,
        };

        self.view = if self.user.is_some() {
            View::Home
        } else {
            View::Auth
        };
        info!(view = %self.view, theme = self.theme.as_str(), "Session started");
        Ok(self.view)
    }

    /// Sign in or sign up, then continue to onboarding or Home
    pub fn sign_in(&mut self, credentials: &Credentials) -> Result<&User> {
        let user = authenticate(credentials)?;
        self.prefs.set(KEY_USER, &serde_json::to_string(&user)?)?;

        self.view = if self.prefs.get(KEY_ONBOARDED)?.is_some() {
            View::Home
        } else {
            View::Onboarding
        };
        info!(user_id = %user.id, view = %self.view, "Signed in");

        Ok(self.user.insert(user))
    }

    /// Mark onboarding as seen and go Home
    pub fn complete_onboarding(&mut self) -> Result<()> {
        if self.user.is_none() {
            return Err(SessionError::NotSignedIn);
        }
        self.prefs.set(KEY_ONBOARDED, "true")?;
        self.view = View::Home;
        Ok(())
    }

    /// Forget the user and return to Auth
    ///
    /// The player session is closed as well.
    pub fn sign_out(&mut self) -> Result<()> {
        self.prefs.remove(KEY_USER)?;
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Signed out");
        }
        self.player.close();
        self.collect_player_events();
        self.view = View::Auth;
        Ok(())
    }

    /// Switch between dark and light and remember the choice
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.prefs.set(KEY_THEME, theme.as_str())?;
        self.theme = theme;
        Ok(theme)
    }

    /// Go to a tab
    ///
    /// Fullscreen views are only reached through the flow itself.
    pub fn navigate(&mut self, view: View) -> Result<()> {
        if view.is_fullscreen() {
            return Err(SessionError::Navigation(view.to_string()));
        }
        if self.user.is_none() {
            return Err(SessionError::NotSignedIn);
        }
        debug!(from = %self.view, to = %view, "Navigate");
        self.view = view;
        Ok(())
    }

    // ===== Player =====

    /// Load `track` and start it
    pub fn play_track(&mut self, track: Track) {
        self.player.load_track(track);
        self.player.play();
        self.collect_player_events();
    }

    pub fn toggle_play(&mut self) {
        self.player.toggle_play();
        self.collect_player_events();
    }

    pub fn close_player(&mut self) {
        self.player.close();
        self.collect_player_events();
    }

    /// Forward a media report to the player
    pub fn handle_media_event(&mut self, event: TaggedMediaEvent) {
        self.player.handle_media_event(event);
        self.collect_player_events();
    }

    /// Read access to the player
    pub fn player(&self) -> &PlaybackController<M> {
        &self.player
    }

    /// Direct control of the player (seek, like, mute, view mode)
    ///
    /// Events raised this way are picked up by the next session call or
    /// [`AppSession::drain_player_events`].
    pub fn player_mut(&mut self) -> &mut PlaybackController<M> {
        &mut self.player
    }

    /// Player events seen since the last drain, oldest first
    pub fn drain_player_events(&mut self) -> Vec<PlaybackEvent> {
        self.collect_player_events();
        std::mem::take(&mut self.player_events)
    }

    fn collect_player_events(&mut self) {
        for event in self.player.drain_events() {
            if let PlaybackEvent::TrackFinished { track_id } = &event {
                debug!(track_id = %track_id, "Session complete");
                self.record_completed_session();
            }
            self.player_events.push(event);
        }
    }

    /// Credit the finished track to the user's statistics
    fn record_completed_session(&mut self) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        let minutes = (self.player.duration_seconds() / 60.0).floor().max(0.0) as u32;
        user.stats.sessions_completed = user.stats.sessions_completed.saturating_add(1);
        user.stats.total_minutes = user.stats.total_minutes.saturating_add(minutes);

        let stored = serde_json::to_string(&*user)
            .map_err(SessionError::from)
            .and_then(|json| self.prefs.set(KEY_USER, &json));
        if let Err(e) = stored {
            error!(error = %e, "Failed to persist user statistics");
        }
    }

    // ===== State Queries =====

    pub fn view(&self) -> View {
        self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the player overlay is rendered
    ///
    /// Hidden on fullscreen views and while nothing is loaded.
    pub fn player_overlay_visible(&self) -> bool {
        !self.view.is_fullscreen() && self.player.is_visible()
    }

    /// First name for the Home header, "Guest" when unknown
    pub fn display_first_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(User::first_name)
            .unwrap_or("Guest")
    }

    pub fn preferences(&self) -> &S {
        &self.prefs
    }
}
