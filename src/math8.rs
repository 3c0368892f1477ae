/// Expand a 4-bit channel to the full 8-bit range (`0xF` becomes `0xFF`)
#[inline]
pub const fn expand4(value: u8) -> u8 {
    (value & 0x0F) * 17
}

/// Reduce an 8-bit channel to 4 bits, rounding to the nearest step
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn reduce4(value: u8) -> u8 {
    ((value as u16 + 8) / 17) as u8
}
