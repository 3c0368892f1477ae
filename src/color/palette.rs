use super::Color;

/// Named spectrum colors, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rainbow {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    Indigo = 5,
    Violet = 6,
}

impl Rainbow {
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    #[allow(clippy::cast_possible_truncation)]
    pub const COUNT: u16 = Self::ALL.len() as u16;

    /// Select a rainbow slot, wrapping every seven entries
    pub const fn from_index(index: u16) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::RED,
            Self::Orange => Color::ORANGE,
            Self::Yellow => Color::YELLOW,
            Self::Green => Color::GREEN,
            Self::Blue => Color::BLUE,
            Self::Indigo => Color::INDIGO,
            Self::Violet => Color::VIOLET,
        }
    }
}

/// Fully saturated primary and secondary colors
pub const MAX_COLORS: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::CYAN,
    Color::MAGENTA,
    Color::YELLOW,
];

/// One of seven spectrum colors, selected by `index % 7`
pub const fn rainbow_color(index: u16) -> Color {
    Rainbow::from_index(index).color()
}

/// One of six saturated colors, selected by `index % 6`
#[allow(clippy::cast_possible_truncation)]
pub const fn max_color(index: u16) -> Color {
    MAX_COLORS[(index % MAX_COLORS.len() as u16) as usize]
}
