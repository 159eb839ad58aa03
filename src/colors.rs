//! Named color constants used by the pattern catalog.
//!
//! All values are 8-bit sRGB. Most animation colors run at half intensity
//! (128) so the strip stays comfortable to look at up close.

use crate::Color;
use palette::Srgb;

/// All channels off.
pub const BLACK: Color = Srgb::new(0, 0, 0);

/// Half-intensity red.
pub const RED: Color = Srgb::new(128, 0, 0);

/// Half-intensity blue.
pub const BLUE: Color = Srgb::new(0, 0, 128);

/// Half-intensity green.
pub const GREEN: Color = Srgb::new(0, 128, 0);

/// Half-intensity yellow.
pub const YELLOW: Color = Srgb::new(128, 128, 0);

/// Half-intensity cyan.
pub const CYAN: Color = Srgb::new(0, 128, 128);

/// Orange, used by the seesaw forward sweep.
pub const ORANGE: Color = Srgb::new(128, 64, 0);

/// Quarter-intensity green, used by the grow phase.
pub const DIM_GREEN: Color = Srgb::new(0, 64, 0);

/// Quarter-intensity white, used by the blink sequence.
pub const DIM_WHITE: Color = Srgb::new(64, 64, 64);

/// Half-intensity white, the third barber pole band.
pub const SILVER: Color = Srgb::new(128, 128, 128);
