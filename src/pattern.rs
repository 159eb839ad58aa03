//! Pure per-frame color math for the pattern catalog.
//!
//! Every animated pattern here is stateless: the color of pixel `i` at frame
//! `t` on a strip of length `len` is a pure function of those three values.
//! No per-pixel state is stored between frames, which keeps the functions
//! trivially testable without a running strip.

use crate::Color;
use crate::colors;
use palette::Srgb;

/// Identifies one pattern from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Whole strip at half-intensity red.
    SolidRed,
    /// Static 8-color rainbow on pixels 0..8.
    RainbowStatic,
    /// Red on even pixels, blue on odd.
    AlternateRedBlue,
    /// Linear red-to-green gradient across the strip.
    GradientRedGreen,
    /// Light every pixel dim green, then extinguish in the same order.
    GrowAndShrink,
    /// Each pixel blinks, higher indices faster and more often.
    BlinkSequence,
    /// Yellow sweep forward, cyan sweep back, endpoints held.
    PingPong,
    /// Diagonal red/blue/silver stripes scrolling for 100 frames.
    BarberPole,
    /// Orange sweep forward, green sweep backward.
    SeesawOrangeGreen,
    /// Six-color wipe with a quadratic brightness tail.
    WipeRainbow,
    /// Whole strip off.
    Clear,
}

/// Static rainbow palette applied to the first eight pixels.
pub const RAINBOW8: [Color; 8] = [
    Srgb::new(255, 0, 0),   // red
    Srgb::new(255, 128, 0), // orange
    Srgb::new(255, 255, 0), // yellow
    Srgb::new(0, 255, 0),   // green
    Srgb::new(0, 255, 255), // cyan
    Srgb::new(0, 128, 255), // sky blue
    Srgb::new(0, 0, 255),   // blue
    Srgb::new(64, 0, 128),  // violet
];

/// Full-intensity palette cycled by the rainbow wipe.
pub const WIPE_PALETTE: [Color; 6] = [
    Srgb::new(255, 0, 0),   // red
    Srgb::new(255, 255, 0), // yellow
    Srgb::new(0, 255, 0),   // green
    Srgb::new(0, 255, 255), // cyan
    Srgb::new(0, 0, 255),   // blue
    Srgb::new(255, 0, 255), // magenta
];

/// Number of scroll frames in the barber pole animation.
pub const BARBER_FRAME_COUNT: usize = 100;

/// Stripe period of the barber pole: three bands of three pixels each.
const BARBER_PERIOD: usize = 9;

/// Color of pixel `i` in the alternating red/blue pattern.
#[inline]
pub fn alternate(i: usize) -> Color {
    if i % 2 == 0 { colors::RED } else { colors::BLUE }
}

/// Color of pixel `i` in the red-to-green gradient on a strip of `len`.
///
/// Pixel 0 is full red, pixel `len - 1` full green, linearly interpolated
/// between with channel values truncated to integers. A strip shorter than
/// two pixels has no gradient span; the single pixel gets the gradient's
/// starting color, full red.
pub fn gradient(i: usize, len: usize) -> Color {
    if len < 2 {
        return Srgb::new(255, 0, 0);
    }

    let span = (len - 1) as f32;
    let red = ((len - 1 - i) as f32 / span * 255.0) as u8;
    let green = (i as f32 / span * 255.0) as u8;
    Srgb::new(red, green, 0)
}

/// Color of pixel `i` at frame `t` in the barber pole pattern.
///
/// `(t + i) mod 9` buckets into three bands of width three, so advancing `t`
/// scrolls the stripes without any stored state.
pub fn barber_stripe(t: usize, i: usize) -> Color {
    match (t + i) % BARBER_PERIOD {
        0..=2 => colors::RED,
        3..=5 => colors::BLUE,
        _ => colors::SILVER,
    }
}

/// Number of frames in one rainbow wipe pass: palette size times strip length.
#[inline]
pub fn wipe_frame_count(len: usize) -> usize {
    WIPE_PALETTE.len() * len
}

/// Color of pixel `i` at frame `t` in the rainbow wipe on a strip of `len`.
///
/// The palette entry advances once per `len` frames; brightness falls off as
/// `((len - (t + i) mod len) / len)^2`. The squared falloff is a visual
/// tuning constant producing a sharp bright head and a soft fading tail.
pub fn wipe(t: usize, i: usize, len: usize) -> Color {
    let base = WIPE_PALETTE[(t + i) / len % WIPE_PALETTE.len()];

    let fade = (len - (t + i) % len) as f32 / len as f32;
    let fade = fade * fade;

    Srgb::new(
        (fade * f32::from(base.red)) as u8,
        (fade * f32::from(base.green)) as u8,
        (fade * f32::from(base.blue)) as u8,
    )
}
