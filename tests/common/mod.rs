//! Recording pin and delay that capture the emitted waveform
#![allow(dead_code)]

use std::{cell::RefCell, convert::Infallible, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};
use myrtio_g35::{
    BulbString, Color, Frame, WaveformTimings,
    frame::FRAME_BITS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

/// Decoded line activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Frame(Frame),
    Pause(u32),
}

/// Shared event log
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self) -> TracePin {
        TracePin(self.clone())
    }

    pub fn delay(&self) -> TraceDelay {
        TraceDelay(self.clone())
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Decode the log with default timings
    pub fn items(&self) -> Vec<Item> {
        decode(&self.events(), &WaveformTimings::default())
    }

    /// Decoded frames only, pauses dropped
    pub fn frames(&self) -> Vec<Frame> {
        self.items()
            .into_iter()
            .filter_map(|item| match item {
                Item::Frame(frame) => Some(frame),
                Item::Pause(_) => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub struct TracePin(Trace);

impl ErrorType for TracePin {
    type Error = Infallible;
}

impl OutputPin for TracePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::High);
        Ok(())
    }
}

pub struct TraceDelay(Trace);

impl DelayNs for TraceDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}

/// Create a string wired to a fresh trace
pub fn traced_string(light_count: u8) -> (Trace, BulbString<TracePin, TraceDelay>) {
    let trace = Trace::new();
    let string = BulbString::new(trace.pin(), trace.delay(), light_count);
    (trace, string)
}

fn us(duration: embassy_time::Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap()
}

/// Line events of a logic one
pub fn one_events(timings: &WaveformTimings) -> [Event; 5] {
    [
        Event::Low,
        Event::DelayUs(us(timings.long_phase)),
        Event::High,
        Event::DelayUs(us(timings.short_phase)),
        Event::Low,
    ]
}

/// Line events of a logic zero
pub fn zero_events(timings: &WaveformTimings) -> [Event; 5] {
    [
        Event::Low,
        Event::DelayUs(us(timings.short_phase)),
        Event::High,
        Event::DelayUs(us(timings.long_phase)),
        Event::Low,
    ]
}

pub fn start_events(timings: &WaveformTimings) -> [Event; 3] {
    [
        Event::High,
        Event::DelayUs(us(timings.start_pulse)),
        Event::Low,
    ]
}

pub fn end_events(timings: &WaveformTimings) -> [Event; 2] {
    [Event::Low, Event::DelayUs(us(timings.quiet))]
}

/// Decode a log into frames and pauses, panicking on any malformed waveform
pub fn decode(events: &[Event], timings: &WaveformTimings) -> Vec<Item> {
    let start = start_events(timings);
    let one = one_events(timings);
    let zero = zero_events(timings);
    let end = end_events(timings);

    let mut items = Vec::new();
    let mut rest = events;
    while let Some(first) = rest.first() {
        match *first {
            Event::DelayMs(ms) => {
                items.push(Item::Pause(ms));
                rest = &rest[1..];
            }
            Event::High => {
                assert!(rest.starts_with(&start), "bad start pulse: {:?}", rest);
                rest = &rest[start.len()..];
                let mut raw = 0u32;
                for bit in 0..FRAME_BITS {
                    if rest.starts_with(&one) {
                        raw = raw << 1 | 1;
                    } else if rest.starts_with(&zero) {
                        raw <<= 1;
                    } else {
                        panic!("bad waveform for bit {}: {:?}", bit, rest);
                    }
                    rest = &rest[one.len()..];
                }
                assert!(rest.starts_with(&end), "bad frame end: {:?}", rest);
                rest = &rest[end.len()..];
                items.push(Item::Frame(frame_from_raw(raw)));
            }
            other => panic!("unexpected event outside a frame: {:?}", other),
        }
    }
    items
}

#[allow(clippy::cast_possible_truncation)]
fn frame_from_raw(raw: u32) -> Frame {
    Frame::new(
        ((raw >> 20) & 0x3F) as u8,
        ((raw >> 12) & 0xFF) as u8,
        Color::from_raw((raw & 0x0FFF) as u16),
    )
}
