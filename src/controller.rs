//! G-35 bulb string driver
//!
//! Bit-bangs command frames on a single output line. Every transmission
//! busy-waits through [`DelayNs`] for its full waveform and cannot be
//! interrupted; a pause inside a frame corrupts it and usually the next one.

use embassy_time::Duration;
use embedded_hal::{delay::DelayNs, digital::OutputPin};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Color, max_color};
use crate::config::{BulbStringConfig, WaveformTimings};
use crate::frame::{Frame, Symbol};
use crate::random::RandomSource;
use crate::range::BulbRange;

/// Address reserved by the bulbs for string-wide brightness
pub const BROADCAST_ADDRESS: u8 = 63;

/// Brightest intensity level
pub const MAX_INTENSITY: u8 = 0xFF;

/// Pulse widths converted once to delay units
#[derive(Debug, Clone, Copy)]
struct PulseWidths {
    start: u32,
    short: u32,
    long: u32,
    quiet: u32,
}

impl PulseWidths {
    fn new(timings: &WaveformTimings) -> Self {
        Self {
            start: micros(timings.start_pulse),
            short: micros(timings.short_phase),
            long: micros(timings.long_phase),
            quiet: micros(timings.quiet),
        }
    }
}

fn micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}

/// Driver for one G-35 string
///
/// Owns the data line exclusively. Only [`BulbString::set_color_if_in_range`]
/// checks addresses against the configured light count; every other operation
/// transmits whatever it is given and the bulbs ignore addresses past the end
/// of the physical chain.
pub struct BulbString<P, D> {
    pin: P,
    delay: D,
    light_count: u8,
    timings: WaveformTimings,
    widths: PulseWidths,
}

impl<P, D> BulbString<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Bind the data line with default timings
    ///
    /// Nothing is transmitted until the first update.
    pub fn new(pin: P, delay: D, light_count: u8) -> Self {
        Self::with_config(pin, delay, &BulbStringConfig::new(light_count))
    }

    /// Bind the data line with explicit configuration
    pub fn with_config(pin: P, delay: D, config: &BulbStringConfig) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("[g35] string bound, {} lights", config.light_count);

        Self {
            pin,
            delay,
            light_count: config.light_count,
            timings: config.timings,
            widths: PulseWidths::new(&config.timings),
        }
    }

    /// Number of bulbs configured at construction
    pub fn light_count(&self) -> u8 {
        self.light_count
    }

    pub fn timings(&self) -> &WaveformTimings {
        &self.timings
    }

    /// Release the data line and the delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Transmit one frame
    ///
    /// Only the low 6 bits of `address` are sent and no range check is made.
    pub fn set_color(&mut self, address: u8, intensity: u8, color: Color) -> Result<(), P::Error> {
        self.transmit(Frame::new(address, intensity, color))
    }

    /// Transmit one frame if `position` is on the string
    ///
    /// Returns `false` without touching the line when `position` is not
    /// below the configured light count.
    pub fn set_color_if_in_range(
        &mut self,
        position: u8,
        intensity: u8,
        color: Color,
    ) -> Result<bool, P::Error> {
        if !BulbRange::whole(self.light_count).contains(position) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[g35] position {} out of range ({} lights)",
                position, self.light_count
            );
            return Ok(false);
        }
        self.set_color(position, intensity, color)?;
        Ok(true)
    }

    /// Transmit a prepared frame
    pub fn transmit(&mut self, frame: Frame) -> Result<(), P::Error> {
        for symbol in frame.symbols() {
            self.emit(symbol)?;
        }
        Ok(())
    }

    /// Set `count` bulbs starting at `begin` to the same color, ascending
    pub fn fill_color(
        &mut self,
        begin: u8,
        count: u8,
        intensity: u8,
        color: Color,
    ) -> Result<(), P::Error> {
        for address in BulbRange::new(begin, count).addresses() {
            self.set_color(address, intensity, color)?;
        }
        Ok(())
    }

    /// Fill a range with random saturated colors
    pub fn fill_random_max<R>(
        &mut self,
        begin: u8,
        count: u8,
        intensity: u8,
        rng: &mut R,
    ) -> Result<(), P::Error>
    where
        R: RandomSource + ?Sized,
    {
        for address in BulbRange::new(begin, count).addresses() {
            self.set_color(address, intensity, max_color(rng.next_u16()))?;
        }
        Ok(())
    }

    /// Fill a range from a sequence function
    ///
    /// The bulb at offset `k` receives `sequence_fn((sequence + k) / span_size)`,
    /// so `span_size` consecutive bulbs share an index. Bulbs are written from
    /// the end of the range back to `begin`. A `span_size` of zero is treated
    /// as one.
    pub fn fill_sequence<F>(
        &mut self,
        begin: u8,
        count: u8,
        sequence: u16,
        span_size: u8,
        intensity: u8,
        mut sequence_fn: F,
    ) -> Result<(), P::Error>
    where
        F: FnMut(u16) -> Color,
    {
        self.fill_sequence_with_intensity(begin, count, sequence, span_size, |index| {
            (sequence_fn(index), intensity)
        })
    }

    /// Fill the whole string from a sequence function
    pub fn fill_sequence_all<F>(
        &mut self,
        sequence: u16,
        span_size: u8,
        intensity: u8,
        sequence_fn: F,
    ) -> Result<(), P::Error>
    where
        F: FnMut(u16) -> Color,
    {
        let light_count = self.light_count;
        self.fill_sequence(0, light_count, sequence, span_size, intensity, sequence_fn)
    }

    /// Fill a range from a sequence function that also picks the intensity
    pub fn fill_sequence_with_intensity<F>(
        &mut self,
        begin: u8,
        count: u8,
        sequence: u16,
        span_size: u8,
        mut sequence_fn: F,
    ) -> Result<(), P::Error>
    where
        F: FnMut(u16) -> (Color, u8),
    {
        let span = u16::from(span_size.max(1));
        let range = BulbRange::new(begin, count);
        for offset in (0..count).rev() {
            let index = sequence.wrapping_add(u16::from(offset)) / span;
            let (color, intensity) = sequence_fn(index);
            self.set_color(range.address(offset), intensity, color)?;
        }
        Ok(())
    }

    /// Blank every bulb one by one to identify their positions
    pub fn enumerate(&mut self, reverse: bool) -> Result<(), P::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[g35] enumerate {} lights, reverse: {}", self.light_count, reverse);

        let addresses = BulbRange::whole(self.light_count).addresses();
        if reverse {
            for address in addresses.rev() {
                self.set_color(address, MAX_INTENSITY, Color::BLACK)?;
            }
        } else {
            for address in addresses {
                self.set_color(address, MAX_INTENSITY, Color::BLACK)?;
            }
        }
        Ok(())
    }

    pub fn enumerate_forward(&mut self) -> Result<(), P::Error> {
        self.enumerate(false)
    }

    pub fn enumerate_reverse(&mut self) -> Result<(), P::Error> {
        self.enumerate(true)
    }

    /// Ramp the string brightness from 0 to [`MAX_INTENSITY`]
    pub fn fade_in(&mut self, delay_ms: u8) -> Result<(), P::Error> {
        for intensity in 0..=MAX_INTENSITY {
            self.fade_step(intensity, delay_ms)?;
        }
        Ok(())
    }

    /// Ramp the string brightness from [`MAX_INTENSITY`] down to 0
    pub fn fade_out(&mut self, delay_ms: u8) -> Result<(), P::Error> {
        for intensity in (0..=MAX_INTENSITY).rev() {
            self.fade_step(intensity, delay_ms)?;
        }
        Ok(())
    }

    /// Block for `ms` milliseconds between frames
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn fade_step(&mut self, intensity: u8, delay_ms: u8) -> Result<(), P::Error> {
        self.set_color(BROADCAST_ADDRESS, intensity, Color::BLACK)?;
        self.pause_ms(u32::from(delay_ms));
        Ok(())
    }

    fn emit(&mut self, symbol: Symbol) -> Result<(), P::Error> {
        let widths = self.widths;
        match symbol {
            Symbol::Start => {
                self.pin.set_high()?;
                self.delay.delay_us(widths.start);
                self.pin.set_low()
            }
            Symbol::One => self.bit(widths.long, widths.short),
            Symbol::Zero => self.bit(widths.short, widths.long),
            Symbol::End => {
                self.pin.set_low()?;
                self.delay.delay_us(widths.quiet);
                Ok(())
            }
        }
    }

    fn bit(&mut self, low_us: u32, high_us: u32) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.delay.delay_us(low_us);
        self.pin.set_high()?;
        self.delay.delay_us(high_us);
        self.pin.set_low()
    }
}

impl<P> BulbString<P, embassy_time::Delay>
where
    P: OutputPin,
{
    /// Bind the data line using the embassy busy-wait delay
    pub fn with_embassy_delay(pin: P, light_count: u8) -> Self {
        Self::new(pin, embassy_time::Delay, light_count)
    }
}
