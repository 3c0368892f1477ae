//! Demo animations for checking a freshly wired string

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::color::{Color, Rainbow};
use crate::controller::{BulbString, MAX_INTENSITY};

/// Pause between rainbow steps in [`BulbString::test_patterns`]
pub const RAINBOW_STEP_MS: u32 = 50;
/// Pause after the string is blanked at the end of the test patterns
pub const BLANK_HOLD_MS: u32 = 500;

const TEST_FADE_MS: u8 = 1;
const STEADY_FADE_MS: u8 = 10;

/// Repeating group used by [`BulbString::steady_multi`]
pub const STEADY_GROUP: [Color; 5] = [
    Color::RED,
    Color::GREEN,
    Color::ORANGE,
    Color::BLUE,
    Color::YELLOW,
];

impl<P, D> BulbString<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Fade in, walk the rainbow, fade out and blank the string
    pub fn test_patterns(&mut self) -> Result<(), P::Error> {
        let light_count = self.light_count();
        let first = Rainbow::ALL[0].color();

        self.fill_color(0, light_count, 0, first)?;
        self.fade_in(TEST_FADE_MS)?;
        for slot in Rainbow::ALL {
            self.pause_ms(RAINBOW_STEP_MS);
            self.fill_color(0, light_count, MAX_INTENSITY, slot.color())?;
        }
        self.fade_out(TEST_FADE_MS)?;
        self.fill_color(0, light_count, MAX_INTENSITY, Color::BLACK)?;
        self.pause_ms(BLANK_HOLD_MS);
        Ok(())
    }

    /// Load a steady multicolor pattern dark, then fade it in
    pub fn steady_multi(&mut self) -> Result<(), P::Error> {
        let light_count = self.light_count();
        for address in 0..light_count {
            let color = STEADY_GROUP[usize::from(address) % STEADY_GROUP.len()];
            self.set_color(address, 0, color)?;
        }
        self.fade_in(STEADY_FADE_MS)
    }
}
