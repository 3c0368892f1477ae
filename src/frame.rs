//! Command frame encoding
//!
//! A frame addresses one bulb and carries 26 bits: a 6-bit address, an
//! 8-bit intensity and a 12-bit color, each field sent MSB first.

use core::iter::once;

use heapless::Vec;

use crate::color::Color;

pub const ADDRESS_BITS: u8 = 6;
pub const INTENSITY_BITS: u8 = 8;
pub const COLOR_BITS: u8 = 12;

/// Number of data bits in a frame
pub const FRAME_BITS: u8 = ADDRESS_BITS + INTENSITY_BITS + COLOR_BITS;

/// Number of symbols in an encoded frame (start + data bits + end)
pub const FRAME_SYMBOLS: usize = FRAME_BITS as usize + 2;

const ADDRESS_MASK: u8 = (1 << ADDRESS_BITS) - 1;

/// Waveform primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Short high pulse that opens a frame
    Start,
    /// Long low, short high
    One,
    /// Short low, long high
    Zero,
    /// Quiet low period that closes a frame
    End,
}

impl Symbol {
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }
}

/// Single bulb update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    pub intensity: u8,
    pub color: Color,
}

impl Frame {
    pub const fn new(address: u8, intensity: u8, color: Color) -> Self {
        Self {
            address,
            intensity,
            color,
        }
    }

    /// Packed 26-bit word, first transmitted bit at position 25
    ///
    /// Only the low 6 bits of the address are part of the frame.
    #[allow(clippy::cast_lossless)]
    pub const fn to_raw(self) -> u32 {
        ((self.address & ADDRESS_MASK) as u32) << (INTENSITY_BITS + COLOR_BITS)
            | (self.intensity as u32) << COLOR_BITS
            | self.color.raw() as u32
    }

    /// Data bits in transmission order
    pub fn bits(self) -> impl Iterator<Item = bool> {
        let raw = self.to_raw();
        (0..FRAME_BITS).rev().map(move |bit| raw & (1 << bit) != 0)
    }

    /// Full waveform of the frame
    pub fn symbols(self) -> Vec<Symbol, FRAME_SYMBOLS> {
        once(Symbol::Start)
            .chain(self.bits().map(Symbol::from_bit))
            .chain(once(Symbol::End))
            .collect()
    }
}

impl From<(u8, u8, Color)> for Frame {
    fn from((address, intensity, color): (u8, u8, Color)) -> Self {
        Self::new(address, intensity, color)
    }
}
