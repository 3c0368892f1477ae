//! Fully saturated hue wheel
//!
//! The wheel has six sextants of sixteen steps each. Within a sextant one
//! channel is held at maximum, one is off and the third ramps.

use super::{CHANNEL_MAX, Color};

/// Number of distinct steps on the hue wheel
pub const HUE_STEPS: u8 = 96;

const SEXTANT_STEPS: u8 = 16;

/// Angles past the wheel, `HUE_STEPS..=255`
#[allow(clippy::cast_lossless)]
const OVERFLOW_ANGLES: u16 = 256 - HUE_STEPS as u16;

/// Map an 8-bit hue angle to a fully saturated color
///
/// Angles below [`HUE_STEPS`] index the wheel directly: `h >> 4` picks the
/// sextant and `h & 0xF` the step inside it. Angles from [`HUE_STEPS`] up to
/// 255 are spread once more across the wheel, so 96 is the start of the
/// first sextant again and 255 lands one step before the end of the last.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn color_hue(h: u8) -> Color {
    if h < HUE_STEPS {
        return color_hue_step(h);
    }
    let excess = (h - HUE_STEPS) as u16;
    color_hue_step((excess * (HUE_STEPS as u16 - 1) / OVERFLOW_ANGLES) as u8)
}

/// Color at a raw wheel position, wrapping past [`HUE_STEPS`]
pub const fn color_hue_step(step: u8) -> Color {
    let step = step % HUE_STEPS;
    let local = step % SEXTANT_STEPS;
    match step / SEXTANT_STEPS {
        0 => Color::new(local, CHANNEL_MAX, 0),
        1 => Color::new(CHANNEL_MAX, CHANNEL_MAX - local, 0),
        2 => Color::new(CHANNEL_MAX, 0, local),
        3 => Color::new(CHANNEL_MAX - local, 0, CHANNEL_MAX),
        4 => Color::new(0, local, CHANNEL_MAX),
        _ => Color::new(0, CHANNEL_MAX, CHANNEL_MAX - local),
    }
}
