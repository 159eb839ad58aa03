//! Animation engine driving a fixed-length strip through the pattern catalog.
//!
//! Provides [`AnimationEngine`] which owns the strip length, a [`PixelSink`]
//! for hardware writes, and a [`Delay`] provider for frame pacing. Each
//! catalog pattern is one method; the per-frame color math lives in
//! [`crate::pattern`] as pure functions.

use crate::colors;
use crate::pattern::{self, Pattern};
use crate::show::Cue;
use crate::time::{Delay, TimeDuration};
use crate::Color;

/// Trait for abstracting the pixel-write capability of the strip hardware.
///
/// Implement this for your transport (SPI, PWM, serial, ...). The sink is
/// expected to reject an out-of-range index; it does not clamp color values.
pub trait PixelSink {
    /// Sets one pixel to the given color.
    ///
    /// # Errors
    /// Returns [`SinkError::IndexOutOfRange`] if `index` does not address a
    /// pixel on the strip.
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), SinkError>;
}

impl<T: PixelSink> PixelSink for &mut T {
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), SinkError> {
        (**self).set_pixel(index, color)
    }
}

/// Errors reported by a [`PixelSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The write addressed a pixel the strip does not have.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of pixels on the strip.
        len: usize,
    },
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SinkError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for strip of {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {}

/// Errors that can occur while running a pattern or cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// A cue named a pixel the engine's strip does not have.
    PixelOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of pixels on the strip.
        len: usize,
    },
    /// The sink rejected a write.
    Sink(SinkError),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::PixelOutOfRange { index, len } => {
                write!(f, "cue pixel index {} out of range for strip of {}", index, len)
            }
            EngineError::Sink(err) => write!(f, "sink error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<SinkError> for EngineError {
    fn from(err: SinkError) -> Self {
        EngineError::Sink(err)
    }
}

/// Drives an addressable strip of `len` pixels through animation patterns.
///
/// The engine is stateless between pattern invocations: every run recomputes
/// its frames from scratch, so patterns can be invoked in any order and any
/// number of times. All writes within one invocation are strictly ordered,
/// and pacing delays always fall between writes, never mid-write.
///
/// A strip of length zero is valid; every pattern is then a no-op.
///
/// # Type Parameters
/// * `S` - Pixel sink implementation
/// * `P` - Delay provider for frame pacing
pub struct AnimationEngine<S: PixelSink, P: Delay> {
    sink: S,
    delay: P,
    len: usize,
}

impl<S: PixelSink, P: Delay> AnimationEngine<S, P> {
    /// Creates an engine for a strip of `len` pixels.
    pub fn new(sink: S, delay: P, len: usize) -> Self {
        Self { sink, delay, len }
    }

    /// Returns the strip length this engine was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the strip has no pixels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Runs one pattern from the catalog.
    pub fn run_pattern(&mut self, pattern: Pattern) -> Result<(), EngineError> {
        match pattern {
            Pattern::SolidRed => self.solid_red(),
            Pattern::RainbowStatic => self.rainbow_static(),
            Pattern::AlternateRedBlue => self.alternate_red_blue(),
            Pattern::GradientRedGreen => self.gradient_red_green(),
            Pattern::GrowAndShrink => self.grow_and_shrink(),
            Pattern::BlinkSequence => self.blink_sequence(),
            Pattern::PingPong => self.ping_pong(),
            Pattern::BarberPole => self.barber_pole(),
            Pattern::SeesawOrangeGreen => self.seesaw_orange_green(),
            Pattern::WipeRainbow => self.wipe_rainbow(),
            Pattern::Clear => self.clear(),
        }
    }

    /// Runs one show cue.
    pub fn run_cue(&mut self, cue: &Cue) -> Result<(), EngineError> {
        match *cue {
            Cue::Pattern(pattern) => self.run_pattern(pattern),
            Cue::Pixel { index, color } => self.set_pixel(index, color),
            Cue::Blink {
                index,
                color,
                count,
                half_period_ms,
            } => self.blink_pixel(index, color, count, half_period_ms),
        }
    }

    /// Sets the whole strip to half-intensity red. One frame, no delay.
    pub fn solid_red(&mut self) -> Result<(), EngineError> {
        self.fill(colors::RED)
    }

    /// Turns every pixel off. One frame, no delay.
    pub fn clear(&mut self) -> Result<(), EngineError> {
        self.fill(colors::BLACK)
    }

    /// Applies the static 8-color rainbow palette to the first pixels.
    ///
    /// Pixels beyond the eighth are left untouched; on a strip shorter than
    /// eight the palette is truncated to the strip.
    pub fn rainbow_static(&mut self) -> Result<(), EngineError> {
        for (i, &color) in pattern::RAINBOW8.iter().take(self.len).enumerate() {
            self.write(i, color)?;
        }
        Ok(())
    }

    /// Alternates red and blue along the strip. One frame, no delay.
    pub fn alternate_red_blue(&mut self) -> Result<(), EngineError> {
        for i in 0..self.len {
            self.write(i, pattern::alternate(i))?;
        }
        Ok(())
    }

    /// Paints a linear red-to-green gradient across the strip.
    ///
    /// A single-pixel strip gets full red; see [`pattern::gradient`].
    pub fn gradient_red_green(&mut self) -> Result<(), EngineError> {
        for i in 0..self.len {
            self.write(i, pattern::gradient(i, self.len))?;
        }
        Ok(())
    }

    /// Lights pixels dim green one at a time, then extinguishes them in the
    /// same order. 50 ms after each write, both phases.
    pub fn grow_and_shrink(&mut self) -> Result<(), EngineError> {
        for i in 0..self.len {
            self.write(i, colors::DIM_GREEN)?;
            self.pause(50);
        }
        for i in 0..self.len {
            self.write(i, colors::BLACK)?;
            self.pause(50);
        }
        Ok(())
    }

    /// Blinks each pixel in turn, faster and more often toward the far end.
    ///
    /// Pixel `i` blinks `i + 1` times with a half period of `1000 / (i + 1)`
    /// milliseconds, so higher indices flicker rapidly while pixel 0 blinks
    /// once at a leisurely full second per half.
    pub fn blink_sequence(&mut self) -> Result<(), EngineError> {
        for i in 0..self.len {
            let half_period = 1000 / (i as u64 + 1);
            for _ in 0..=i {
                self.write(i, colors::DIM_WHITE)?;
                self.pause(half_period);
                self.write(i, colors::BLACK)?;
                self.pause(half_period);
            }
        }
        Ok(())
    }

    /// Sweeps yellow forward and cyan backward between held endpoints.
    ///
    /// The endpoints are set exactly once (yellow at 0, cyan at the far end);
    /// each interior pixel is lit for 150 ms and then cleared. A strip with
    /// fewer than two pixels has no endpoints to hold, so this is a no-op.
    pub fn ping_pong(&mut self) -> Result<(), EngineError> {
        if self.len < 2 {
            return Ok(());
        }

        self.write(0, colors::YELLOW)?;
        self.write(self.len - 1, colors::CYAN)?;

        for i in 1..self.len - 1 {
            self.write(i, colors::YELLOW)?;
            self.pause(150);
            self.write(i, colors::BLACK)?;
        }
        for i in (1..self.len - 1).rev() {
            self.write(i, colors::CYAN)?;
            self.pause(150);
            self.write(i, colors::BLACK)?;
        }
        Ok(())
    }

    /// Scrolls diagonal red/blue/silver stripes for 100 frames, 200 ms each.
    pub fn barber_pole(&mut self) -> Result<(), EngineError> {
        if self.len == 0 {
            return Ok(());
        }

        for t in 0..pattern::BARBER_FRAME_COUNT {
            for i in 0..self.len {
                self.write(i, pattern::barber_stripe(t, i))?;
            }
            self.pause(200);
        }
        Ok(())
    }

    /// Sweeps orange forward, then green backward, 100 ms per write.
    pub fn seesaw_orange_green(&mut self) -> Result<(), EngineError> {
        for i in 0..self.len {
            self.write(i, colors::ORANGE)?;
            self.pause(100);
        }
        for i in 0..self.len {
            self.write(self.len - 1 - i, colors::GREEN)?;
            self.pause(100);
        }
        Ok(())
    }

    /// Runs the moving rainbow wipe: `6 * len` frames at 45 ms each, with a
    /// quadratic brightness tail behind the wipe head.
    pub fn wipe_rainbow(&mut self) -> Result<(), EngineError> {
        for t in 0..pattern::wipe_frame_count(self.len) {
            for i in 0..self.len {
                self.write(i, pattern::wipe(t, i, self.len))?;
            }
            self.pause(45);
        }
        Ok(())
    }

    /// Sets a single pixel, validating the index against the strip length.
    pub fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), EngineError> {
        self.check_index(index)?;
        self.write(index, color)
    }

    /// Blinks one pixel on and off `count` times.
    ///
    /// The pixel holds `color` for `half_period_ms`, then black for the same
    /// duration, per blink.
    pub fn blink_pixel(
        &mut self,
        index: usize,
        color: Color,
        count: u32,
        half_period_ms: u64,
    ) -> Result<(), EngineError> {
        self.check_index(index)?;
        for _ in 0..count {
            self.write(index, color)?;
            self.pause(half_period_ms);
            self.write(index, colors::BLACK)?;
            self.pause(half_period_ms);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), EngineError> {
        if index >= self.len {
            return Err(EngineError::PixelOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), EngineError> {
        for i in 0..self.len {
            self.write(i, color)?;
        }
        Ok(())
    }

    /// Issues one pixel write. An index outside the strip here is a defect
    /// in pattern math, not a runtime condition.
    fn write(&mut self, index: usize, color: Color) -> Result<(), EngineError> {
        debug_assert!(
            index < self.len,
            "pattern computed pixel index {} on strip of {}",
            index,
            self.len
        );
        self.sink.set_pixel(index, color)?;
        Ok(())
    }

    pub(crate) fn pause(&mut self, millis: u64) {
        self.delay.delay(P::Duration::from_millis(millis));
    }
}
