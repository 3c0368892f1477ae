/// Source of pseudo-random numbers for random fills
///
/// Implemented for any `FnMut() -> u16`, so a closure over a hardware RNG
/// or a fixed test sequence can be passed directly.
pub trait RandomSource {
    fn next_u16(&mut self) -> u16;
}

impl<F> RandomSource for F
where
    F: FnMut() -> u16,
{
    fn next_u16(&mut self) -> u16 {
        self()
    }
}

/// Xorshift generator for targets without a hardware RNG
#[derive(Debug, Clone)]
pub struct XorShift16 {
    state: u16,
}

impl XorShift16 {
    /// Create a generator; a zero seed is replaced with a fixed one
    pub const fn new(seed: u16) -> Self {
        Self {
            state: if seed == 0 { 0xACE1 } else { seed },
        }
    }
}

impl Default for XorShift16 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for XorShift16 {
    fn next_u16(&mut self) -> u16 {
        let mut x = self.state;
        x ^= x << 7;
        x ^= x >> 9;
        x ^= x << 8;
        self.state = x;
        x
    }
}
