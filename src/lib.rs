#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod frame;
pub mod math8;
pub mod patterns;
pub mod random;
pub mod range;

pub use color::{CHANNEL_MAX, Color, Hsv, Rainbow, Rgb};
pub use config::{BulbStringConfig, WaveformTimings};
pub use controller::{BROADCAST_ADDRESS, BulbString, MAX_INTENSITY};
pub use frame::{FRAME_BITS, Frame, Symbol};
pub use random::{RandomSource, XorShift16};
pub use range::BulbRange;

pub use embassy_time::Duration;
