//! 12-bit color model used on the G-35 wire
//!
//! A [`Color`] packs three 4-bit channels. Red occupies bits 0-3, green
//! bits 4-7 and blue bits 8-11, so blue is the first nibble on the wire.

mod hue;
mod palette;
mod utils;

pub use hue::{HUE_STEPS, color_hue, color_hue_step};
pub use palette::{MAX_COLORS, Rainbow, max_color, rainbow_color};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Maximum value of a single channel
pub const CHANNEL_MAX: u8 = 0x0F;

const CHANNEL_MASK: u16 = 0x0F;
const COLOR_MASK: u16 = 0x0FFF;

/// Packed 12-bit bulb color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);
    pub const RED: Self = Self::new(CHANNEL_MAX, 0, 0);
    pub const GREEN: Self = Self::new(0, CHANNEL_MAX, 0);
    pub const BLUE: Self = Self::new(0, 0, CHANNEL_MAX);
    pub const CYAN: Self = Self::new(0, CHANNEL_MAX, CHANNEL_MAX);
    pub const MAGENTA: Self = Self::new(CHANNEL_MAX, 0, CHANNEL_MAX);
    pub const YELLOW: Self = Self::new(CHANNEL_MAX, CHANNEL_MAX, 0);
    pub const PURPLE: Self = Self::new(0xA, 0x3, 0xD);
    pub const ORANGE: Self = Self::new(0xF, 0x1, 0x0);
    pub const PALE_ORANGE: Self = Self::new(0x8, 0x1, 0x0);
    pub const WARM_WHITE: Self = Self::new(0xF, 0x7, 0x2);
    pub const INDIGO: Self = Self::new(0x6, 0x0, 0xF);
    pub const VIOLET: Self = Self::new(0x8, 0x0, 0xF);

    /// Pack red, green and blue channels
    ///
    /// Channels are expected in `0..=CHANNEL_MAX`. Values are not clamped,
    /// only the low nibble of each channel is kept.
    #[allow(clippy::cast_lossless)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(
            (r as u16 & CHANNEL_MASK)
                | ((g as u16 & CHANNEL_MASK) << 4)
                | ((b as u16 & CHANNEL_MASK) << 8),
        )
    }

    /// Build a color from its packed representation, dropping bits above 11
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & COLOR_MASK)
    }

    /// Packed 12-bit value as sent on the wire
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        (self.0 & CHANNEL_MASK) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        ((self.0 >> 4) & CHANNEL_MASK) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        ((self.0 >> 8) & CHANNEL_MASK) as u8
    }

    /// Convert an 8-bit HSV color to the closest bulb color
    pub fn from_hsv(hsv: Hsv) -> Self {
        hsv2rgb(hsv).into()
    }
}

/// Returns 12-bit color from red, green, and blue components
pub const fn color(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}
