//! Pulse descriptors for the single-wire LED protocol.
//!
//! Every transmitted bit is one [`Symbol`]: a high level followed by a low
//! level, where only the ratio of the two durations tells a one from a zero.
//! A frame ends with a [`RESET`] symbol that holds the line low long enough
//! for the LEDs to latch.

use embassy_time::Duration;

/// Tick rate of the output peripheral (1 tick = 0.1 µs)
pub const RESOLUTION_HZ: u32 = 10_000_000;

/// High time of a zero bit
pub const T0H_NS: u32 = 300;
/// Low time of a zero bit
pub const T0L_NS: u32 = 900;
/// High time of a one bit
pub const T1H_NS: u32 = 900;
/// Low time of a one bit
pub const T1L_NS: u32 = 300;

/// Minimum low period between two frames
pub const RESET_PERIOD: Duration = Duration::from_micros(50);

/// Number of symbols used to encode one byte
pub const SYMBOLS_PER_BYTE: usize = 8;

/// One two-level timed pulse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symbol {
    pub level0: bool,
    pub duration0: u16,
    pub level1: bool,
    pub duration1: u16,
}

impl Symbol {
    pub const fn new(level0: bool, duration0: u16, level1: bool, duration1: u16) -> Self {
        Self {
            level0,
            duration0,
            level1,
            duration1,
        }
    }

    /// Pack into the 32-bit RMT memory word
    ///
    /// Durations are limited to 15 bits by the hardware.
    #[allow(clippy::cast_lossless)]
    pub const fn to_word(self) -> u32 {
        let low = (self.duration0 as u32 & 0x7fff) | ((self.level0 as u32) << 15);
        let high = (self.duration1 as u32 & 0x7fff) | ((self.level1 as u32) << 15);
        low | (high << 16)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn ns_to_ticks(nanos: u32) -> u16 {
    (nanos as u64 * RESOLUTION_HZ as u64 / 1_000_000_000) as u16
}

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn reset_half_ticks() -> u16 {
    (RESET_PERIOD.as_micros() * (RESOLUTION_HZ as u64 / 1_000_000) / 2) as u16
}

/// Symbol for a zero bit
pub const ZERO: Symbol = Symbol::new(true, ns_to_ticks(T0H_NS), false, ns_to_ticks(T0L_NS));

/// Symbol for a one bit
pub const ONE: Symbol = Symbol::new(true, ns_to_ticks(T1H_NS), false, ns_to_ticks(T1L_NS));

/// Trailing latch symbol, low for the whole reset period
pub const RESET: Symbol = Symbol::new(false, reset_half_ticks(), false, reset_half_ticks());

/// Total number of symbols a frame of `byte_count` bytes expands to
pub const fn symbols_for(byte_count: usize) -> usize {
    byte_count * SYMBOLS_PER_BYTE + 1
}
