/// Contiguous run of bulb addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulbRange {
    pub begin: u8,
    pub count: u8,
}

impl BulbRange {
    pub const fn new(begin: u8, count: u8) -> Self {
        Self { begin, count }
    }

    /// Range covering a whole string of `light_count` bulbs
    pub const fn whole(light_count: u8) -> Self {
        Self::new(0, light_count)
    }

    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Address of the bulb at `offset` from the start of the range
    pub const fn address(self, offset: u8) -> u8 {
        self.begin.wrapping_add(offset)
    }

    /// Check if the address falls inside the range
    #[allow(clippy::cast_lossless)]
    pub const fn contains(self, address: u8) -> bool {
        address >= self.begin && (address as u16) < self.begin as u16 + self.count as u16
    }

    /// Addresses in ascending order
    pub fn addresses(self) -> impl DoubleEndedIterator<Item = u8> {
        (0..self.count).map(move |offset| self.address(offset))
    }
}
