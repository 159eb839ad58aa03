#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AnimationEngine`**: drives a fixed-length strip through the pattern catalog
//! - **`Pattern`**: one named visual effect, recomputed per frame from pure math
//! - **`Show`** / **`ShowEntry`** / **`Cue`**: the declarative, repeating show script
//! - **`Sequencer`**: plays a show through an engine until externally cancelled
//! - **`PixelSink`**: trait to implement for your strip hardware
//! - **`Delay`** / **`TimeDuration`**: traits to implement for your timing system
//!
//! Colors are 8-bit [`Srgb<u8>`] triples (the [`Color`] alias). The engine
//! truncates any floating-point intermediate math to integers before a value
//! reaches the sink; the sink never sees out-of-range channels.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod engine;
pub mod pattern;
pub mod sequencer;
pub mod show;
pub mod time;

pub use engine::{AnimationEngine, EngineError, PixelSink, SinkError};
pub use pattern::Pattern;
pub use sequencer::Sequencer;
pub use show::{Cue, DEFAULT_SHOW_LEN, Show, ShowBuilder, ShowEntry, ShowError};
#[cfg(feature = "std")]
pub use time::ThreadDelay;
pub use time::{Delay, TimeDuration};

/// 8-bit RGB color triple used for all pixel writes.
pub type Color = Srgb<u8>;
