pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Color, Rgb},
    math8::{expand4, reduce4},
};

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Rgb {
            r: expand4(color.r()),
            g: expand4(color.g()),
            b: expand4(color.b()),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::new(reduce4(rgb.r), reduce4(rgb.g), reduce4(rgb.b))
    }
}
