//! Deterministic media primitive
//!
//! Stands in for a real player where none exists (tests, the CLI simulation).
//! Time only moves when [`SteppedMedia::step`] is called, never on a clock.
//!
//! The handle is cheaply cloneable: give one clone to the controller and keep
//! the other on the "platform" side to step time, inspect received commands
//! and feed events back.

use crate::error::{MediaError, Result};
use crate::media::{MediaEvent, MediaPrimitive, TaggedMediaEvent};
use crate::types::Generation;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Duration reported for sources without an explicit one
const DEFAULT_DURATION_SECS: f64 = 180.0;

/// Command received from the controller
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load(Option<String>),
    Play,
    Pause,
    SetCurrentTime(f64),
    SetMuted(bool),
}

#[derive(Debug)]
struct SteppedState {
    commands: Vec<MediaCommand>,
    source: Option<String>,
    generation: Generation,
    position: f64,
    playing: bool,
    muted: bool,
    metadata_sent: bool,
    block_play: bool,
    durations: HashMap<String, f64>,
    default_duration: f64,
    queued: Vec<TaggedMediaEvent>,
}

impl SteppedState {
    fn duration(&self) -> f64 {
        self.source
            .as_ref()
            .and_then(|s| self.durations.get(s).copied())
            .unwrap_or(self.default_duration)
    }

    /// Duration as a media element reports it: NaN until metadata is loaded
    fn reported_duration(&self) -> f64 {
        if self.metadata_sent {
            self.duration()
        } else {
            f64::NAN
        }
    }

    fn queue(&mut self, event: MediaEvent) {
        self.queued
            .push(TaggedMediaEvent::new(self.generation, event));
    }
}

/// Media primitive that advances only when stepped
#[derive(Debug, Clone)]
pub struct SteppedMedia {
    inner: Rc<RefCell<SteppedState>>,
}

impl Default for SteppedMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl SteppedMedia {
    /// Create a fake where every source lasts three minutes
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_DURATION_SECS)
    }

    /// Create a fake with a custom fallback duration
    pub fn with_default_duration(seconds: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SteppedState {
                commands: Vec::new(),
                source: None,
                generation: Generation::INITIAL,
                position: 0.0,
                playing: false,
                muted: false,
                metadata_sent: false,
                block_play: false,
                durations: HashMap::new(),
                default_duration: seconds,
                queued: Vec::new(),
            })),
        }
    }

    /// Report `seconds` as the real duration of `source`
    #[must_use]
    pub fn with_duration(self, source: impl Into<String>, seconds: f64) -> Self {
        self.inner
            .borrow_mut()
            .durations
            .insert(source.into(), seconds);
        self
    }

    /// Refuse every play request, like a browser blocking autoplay
    pub fn set_block_play(&self, block: bool) {
        self.inner.borrow_mut().block_play = block;
    }

    /// Advance time by `seconds` and collect the resulting events
    ///
    /// Reports metadata on the first step after a load, then a position
    /// update while playing, then pause + ended when the media runs out.
    /// Events queued by commands since the last step come first.
    pub fn step(&self, seconds: f64) -> Vec<TaggedMediaEvent> {
        let mut state = self.inner.borrow_mut();

        if state.source.is_some() {
            let duration = state.duration();
            if !state.metadata_sent {
                state.metadata_sent = true;
                state.queue(MediaEvent::LoadedMetadata { duration });
            }

            if state.playing && seconds > 0.0 {
                state.position = (state.position + seconds).min(duration);
                let current = state.position;
                state.queue(MediaEvent::TimeUpdate { current, duration });

                if current >= duration {
                    state.playing = false;
                    state.queue(MediaEvent::Paused);
                    state.queue(MediaEvent::Ended);
                }
            }
        }

        std::mem::take(&mut state.queued)
    }

    /// Queue an arbitrary event under the current generation
    pub fn emit(&self, event: MediaEvent) {
        self.inner.borrow_mut().queue(event);
    }

    /// Every command received so far, oldest first
    pub fn commands(&self) -> Vec<MediaCommand> {
        self.inner.borrow().commands.clone()
    }

    /// Number of received commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&MediaCommand) -> bool) -> usize {
        self.inner
            .borrow()
            .commands
            .iter()
            .filter(|&c| predicate(c))
            .count()
    }

    pub fn clear_commands(&self) {
        self.inner.borrow_mut().commands.clear();
    }

    pub fn source(&self) -> Option<String> {
        self.inner.borrow().source.clone()
    }

    pub fn position(&self) -> f64 {
        self.inner.borrow().position
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().playing
    }

    pub fn is_muted(&self) -> bool {
        self.inner.borrow().muted
    }

    /// Generation the fake currently tags its events with
    pub fn generation(&self) -> Generation {
        self.inner.borrow().generation
    }
}

impl MediaPrimitive for SteppedMedia {
    fn load(&mut self, source: Option<&str>, generation: Generation) {
        let mut state = self.inner.borrow_mut();
        state.commands.push(MediaCommand::Load(source.map(str::to_string)));
        state.source = source.map(str::to_string);
        state.generation = generation;
        state.position = 0.0;
        state.playing = false;
        state.metadata_sent = false;
    }

    fn play(&mut self) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        state.commands.push(MediaCommand::Play);

        if state.block_play {
            return Err(MediaError::PlayRejected("autoplay blocked".to_string()));
        }
        if state.source.is_none() {
            return Err(MediaError::NoSource);
        }
        if !state.playing {
            // An ended element restarts from the top
            if state.position >= state.duration() {
                state.position = 0.0;
            }
            state.playing = true;
            state.queue(MediaEvent::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.commands.push(MediaCommand::Pause);
        if state.playing {
            state.playing = false;
            state.queue(MediaEvent::Paused);
        }
    }

    fn set_current_time(&mut self, seconds: f64, generation: Generation) {
        let mut state = self.inner.borrow_mut();
        state.commands.push(MediaCommand::SetCurrentTime(seconds));
        state.generation = generation;
        if state.source.is_none() {
            return;
        }

        let end = state.duration();
        state.position = seconds.max(0.0).min(end);
        let current = state.position;
        let duration = state.reported_duration();
        state.queue(MediaEvent::TimeUpdate { current, duration });
    }

    fn set_muted(&mut self, muted: bool) {
        let mut state = self.inner.borrow_mut();
        state.commands.push(MediaCommand::SetMuted(muted));
        state.muted = muted;
    }
}
