#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::SmartLedsWrite;

use crate::color::{ColorOrder, Rgb};
use crate::error::{LedError, StripError};
use crate::flush::{FlushController, FlushState};
use crate::gamma::decode_rgb332;
use crate::pixel_store::{PixelStore, STRIP_CAPACITY};
use crate::transmitter::Transmitter;

/// Number of LEDs lit with the default value after a clear
pub const DEFAULT_LIT_COUNT: usize = 4;

/// Packed value written to the default LEDs after a clear
pub const DEFAULT_PACKED_VALUE: u8 = 0;

/// Configuration for the LED strip
#[derive(Debug, Clone)]
pub struct LedStripConfig {
    /// Byte order expected by the LEDs
    pub color_order: ColorOrder,
    /// LEDs re-established by [`LedStrip::clear`]
    pub default_lit_count: usize,
}

impl Default for LedStripConfig {
    fn default() -> Self {
        Self {
            color_order: ColorOrder::default(),
            default_lit_count: DEFAULT_LIT_COUNT,
        }
    }
}

/// Addressable LED strip: pixel store plus the flush controller driving it
pub struct LedStrip<T: Transmitter, const MAX_LEDS: usize = STRIP_CAPACITY> {
    pixels: PixelStore<MAX_LEDS>,
    flush: FlushController<T>,
    default_lit_count: usize,
}

impl<T: Transmitter, const MAX_LEDS: usize> LedStrip<T, MAX_LEDS> {
    /// Create the strip and show the default frame
    pub fn new(transmitter: T, config: &LedStripConfig) -> Result<Self, T::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[strip] init: {} LEDs max", MAX_LEDS);

        let mut strip = Self {
            pixels: PixelStore::new(config.color_order),
            flush: FlushController::new(transmitter),
            default_lit_count: config.default_lit_count.min(MAX_LEDS),
        };
        strip.clear()?;
        Ok(strip)
    }

    /// Store a color without sending it
    pub fn write(&mut self, index: usize, color: Rgb) -> Result<(), LedError> {
        self.pixels.write(index, color)
    }

    /// Store a packed RGB332 value without sending it
    pub fn write_packed(&mut self, index: usize, packed: u8) -> Result<(), LedError> {
        self.pixels.write_packed(index, packed)
    }

    /// Send the first `count` LEDs, clamped to the active count
    pub fn flush(&mut self, count: usize) -> Result<(), T::Error> {
        let frame = self.pixels.committed_bytes(count);

        #[cfg(feature = "esp32-log")]
        println!("[strip] flush {} LEDs", frame.len() / crate::pixel_store::BYTES_PER_LED);

        self.flush.flush(frame)
    }

    /// Wipe the frame, then show the default one
    ///
    /// The strip always ends up in a known visible state rather than going
    /// dark silently.
    pub fn clear(&mut self) -> Result<(), T::Error> {
        self.pixels.reset();

        #[cfg(feature = "esp32-log")]
        println!("[strip] clear, {} default LEDs", self.default_lit_count);

        let default_color = decode_rgb332(DEFAULT_PACKED_VALUE);
        for index in 0..self.default_lit_count {
            // default_lit_count is clamped to capacity
            let _ = self.pixels.write(index, default_color);
        }
        self.flush(self.default_lit_count)
    }

    /// Block until the last transmission has completed
    pub fn wait_idle(&mut self) -> Result<(), T::Error> {
        self.flush.wait_idle()
    }

    pub const fn pixels(&self) -> &PixelStore<MAX_LEDS> {
        &self.pixels
    }

    pub const fn flush_state(&self) -> FlushState {
        self.flush.state()
    }

    pub const fn transmitter(&self) -> &T {
        self.flush.transmitter()
    }

    pub const fn default_lit_count(&self) -> usize {
        self.default_lit_count
    }
}

impl<T: Transmitter, const MAX_LEDS: usize> SmartLedsWrite for LedStrip<T, MAX_LEDS> {
    type Error = StripError<T::Error>;
    type Color = Rgb;

    /// Write colors from the first LED on, then flush them
    fn write<I, C>(&mut self, iterator: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = C>,
        C: Into<Self::Color>,
    {
        let mut count = 0;
        for (index, color) in iterator.into_iter().enumerate() {
            self.pixels.write(index, color.into())?;
            count = index + 1;
        }
        self.flush(count).map_err(StripError::Transmit)
    }
}
