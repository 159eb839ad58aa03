//! Declarative show data: the ordered, repeating composition of patterns.
//!
//! A [`Show`] is a fixed list of [`ShowEntry`] values consumed by the
//! [`crate::sequencer::Sequencer`]. Keeping the script as data rather than
//! code makes the default sequence reproducible and alternate shows cheap
//! to define.

use crate::pattern::Pattern;
use crate::{colors, Color};
use heapless::Vec;

/// One instruction a show can issue to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Run a catalog pattern.
    Pattern(Pattern),

    /// Set a single pixel to a color.
    Pixel {
        /// Pixel to write.
        index: usize,
        /// Color to apply.
        color: Color,
    },

    /// Blink a single pixel on and off.
    Blink {
        /// Pixel to blink.
        index: usize,
        /// On color; off is black.
        color: Color,
        /// Number of on/off cycles.
        count: u32,
        /// Duration of each on and each off phase, in milliseconds.
        half_period_ms: u64,
    },
}

/// A cue with its repeat count and trailing pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowEntry {
    /// What to run.
    pub cue: Cue,

    /// How many times to run it back to back. Zero is allowed and skips
    /// the entry.
    pub repeats: u32,

    /// Pause after the last repeat, in milliseconds.
    pub delay_after_ms: u64,
}

impl ShowEntry {
    /// Creates a show entry.
    #[inline]
    pub const fn new(cue: Cue, repeats: u32, delay_after_ms: u64) -> Self {
        Self {
            cue,
            repeats,
            delay_after_ms,
        }
    }
}

/// Show validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowError {
    /// No entries provided.
    EmptyShow,

    /// Show capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ShowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShowError::EmptyShow => write!(f, "show must have at least one entry"),
            ShowError::CapacityExceeded => write!(f, "show capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShowError {}

/// Number of entries in the default show.
pub const DEFAULT_SHOW_LEN: usize = 14;

/// An ordered list of show entries, played in a loop by the sequencer.
///
/// # Type Parameters
/// * `M` - Maximum number of entries this show can hold
#[derive(Debug, Clone)]
pub struct Show<const M: usize> {
    entries: Vec<ShowEntry, M>,
}

impl<const M: usize> Show<M> {
    /// Creates a new show builder.
    pub fn builder() -> ShowBuilder<M> {
        ShowBuilder::new()
    }

    /// Returns the entries in playback order.
    pub fn entries(&self) -> &[ShowEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the show has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const DEFAULT_ENTRIES: [ShowEntry; DEFAULT_SHOW_LEN] = [
    // Startup pulse on pixel 0, then the five static looks, each held 3 s.
    ShowEntry::new(
        Cue::Pixel {
            index: 0,
            color: colors::RED,
        },
        1,
        3000,
    ),
    ShowEntry::new(Cue::Pattern(Pattern::SolidRed), 1, 3000),
    ShowEntry::new(Cue::Pattern(Pattern::RainbowStatic), 1, 3000),
    ShowEntry::new(Cue::Pattern(Pattern::AlternateRedBlue), 1, 3000),
    ShowEntry::new(Cue::Pattern(Pattern::GradientRedGreen), 1, 3000),
    ShowEntry::new(Cue::Pattern(Pattern::Clear), 1, 0),
    ShowEntry::new(
        Cue::Blink {
            index: 0,
            color: colors::RED,
            count: 6,
            half_period_ms: 500,
        },
        1,
        0,
    ),
    ShowEntry::new(Cue::Pattern(Pattern::BlinkSequence), 1, 0),
    ShowEntry::new(Cue::Pattern(Pattern::GrowAndShrink), 4, 0),
    ShowEntry::new(Cue::Pattern(Pattern::PingPong), 4, 0),
    ShowEntry::new(Cue::Pattern(Pattern::BarberPole), 1, 0),
    ShowEntry::new(Cue::Pattern(Pattern::SeesawOrangeGreen), 4, 0),
    ShowEntry::new(Cue::Pattern(Pattern::WipeRainbow), 4, 0),
    ShowEntry::new(Cue::Pattern(Pattern::Clear), 1, 0),
];

impl Show<DEFAULT_SHOW_LEN> {
    /// The reference show: startup pulse, the five static looks with 3 s
    /// pauses, then the animated patterns with their fixed repeat counts.
    pub fn default_show() -> Self {
        let entries =
            Vec::from_slice(&DEFAULT_ENTRIES).expect("capacity matches entry count");
        Self { entries }
    }
}

/// Builder for constructing validated shows.
#[derive(Debug)]
pub struct ShowBuilder<const M: usize> {
    entries: Vec<ShowEntry, M>,
}

impl<const M: usize> ShowBuilder<M> {
    /// Creates a new empty show builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry to the show.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The show is full
    pub fn entry(
        mut self,
        cue: Cue,
        repeats: u32,
        delay_after_ms: u64,
    ) -> Result<Self, ShowError> {
        self.entries
            .push(ShowEntry::new(cue, repeats, delay_after_ms))
            .map_err(|_| ShowError::CapacityExceeded)?;
        Ok(self)
    }

    /// Adds a pattern with a repeat count and no trailing pause.
    pub fn pattern(self, pattern: Pattern, repeats: u32) -> Result<Self, ShowError> {
        self.entry(Cue::Pattern(pattern), repeats, 0)
    }

    /// Builds and validates the show.
    ///
    /// # Errors
    /// * `EmptyShow` - No entries were added
    pub fn build(self) -> Result<Show<M>, ShowError> {
        if self.entries.is_empty() {
            return Err(ShowError::EmptyShow);
        }

        Ok(Show {
            entries: self.entries,
        })
    }
}

impl<const M: usize> Default for ShowBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
