//! SoulWave command line
//!
//! Library half of the `soulwave` binary: configuration loading, the
//! simulated playback driver and text rendering.

pub mod config;
pub mod error;
pub mod output;
pub mod simulate;
