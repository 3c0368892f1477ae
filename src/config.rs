use embassy_time::Duration;

/// Default hold time of the frame-start pulse
pub const DEFAULT_START_PULSE: Duration = Duration::from_micros(10);
/// Default duration of the short phase of a bit
pub const DEFAULT_SHORT_PHASE: Duration = Duration::from_micros(10);
/// Default duration of the long phase of a bit
pub const DEFAULT_LONG_PHASE: Duration = Duration::from_micros(20);
/// Default quiet period after a frame
pub const DEFAULT_QUIET: Duration = Duration::from_micros(30);

/// Pulse widths of the G-35 line protocol
///
/// The defaults are hand-tuned to the sampling window of the bulbs.
/// A logic one is a long low phase followed by a short high phase,
/// a logic zero is the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformTimings {
    /// High time of the frame-start pulse
    pub start_pulse: Duration,
    /// Short phase of a bit
    pub short_phase: Duration,
    /// Long phase of a bit
    pub long_phase: Duration,
    /// Low time that terminates a frame
    pub quiet: Duration,
}

impl Default for WaveformTimings {
    fn default() -> Self {
        Self {
            start_pulse: DEFAULT_START_PULSE,
            short_phase: DEFAULT_SHORT_PHASE,
            long_phase: DEFAULT_LONG_PHASE,
            quiet: DEFAULT_QUIET,
        }
    }
}

impl WaveformTimings {
    /// Total line time of one bit
    pub fn bit(&self) -> Duration {
        self.short_phase + self.long_phase
    }
}

/// Configuration for a bulb string
#[derive(Debug, Clone, Default)]
pub struct BulbStringConfig {
    /// Number of bulbs physically present on the string
    pub light_count: u8,
    /// Pulse widths of the line protocol
    pub timings: WaveformTimings,
}

impl BulbStringConfig {
    /// Configuration with default timings
    pub fn new(light_count: u8) -> Self {
        Self {
            light_count,
            timings: WaveformTimings::default(),
        }
    }

    /// Override the waveform timings
    #[must_use]
    pub fn with_timings(mut self, timings: WaveformTimings) -> Self {
        self.timings = timings;
        self
    }
}
