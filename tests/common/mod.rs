//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animator::time::{Delay, TimeDuration};
use strip_animator::{colors, Color, PixelSink, SinkError};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Delay provider that records requested pauses instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub pauses_ms: Vec<u64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Delay for MockDelay {
    type Duration = TestDuration;

    fn delay(&mut self, duration: TestDuration) {
        self.pauses_ms.push(duration.0);
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that keeps a framebuffer and records every write in order
pub struct MockStrip {
    pub pixels: Vec<Color>,
    pub writes: Vec<(usize, Color)>,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![colors::BLACK; len],
            writes: Vec::new(),
        }
    }

    /// Number of writes issued to the given pixel
    pub fn writes_to(&self, index: usize) -> usize {
        self.writes.iter().filter(|(i, _)| *i == index).count()
    }

    /// Highest pixel index written so far, if any
    pub fn max_index_written(&self) -> Option<usize> {
        self.writes.iter().map(|(i, _)| *i).max()
    }

    /// True if every pixel of the framebuffer is black
    pub fn is_all_black(&self) -> bool {
        self.pixels.iter().all(|&c| c == colors::BLACK)
    }
}

impl PixelSink for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), SinkError> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(SinkError::IndexOutOfRange { index, len })?;
        *pixel = color;
        self.writes.push((index, color));
        Ok(())
    }
}
