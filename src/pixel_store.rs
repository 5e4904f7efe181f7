//! Fixed-capacity frame buffer.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{ColorOrder, Rgb};
use crate::error::LedError;
use crate::gamma::decode_rgb332;

/// Default strip capacity
pub const STRIP_CAPACITY: usize = 256;

/// Bytes stored per LED
pub const BYTES_PER_LED: usize = 3;

/// Pixel buffer holding wire-ordered bytes for up to `MAX_LEDS` LEDs
///
/// `active_count` is one past the highest index written since the last
/// [`reset`](Self::reset). Only that prefix takes part in a flush.
#[derive(Debug, Clone)]
pub struct PixelStore<const MAX_LEDS: usize = STRIP_CAPACITY> {
    pixels: [[u8; BYTES_PER_LED]; MAX_LEDS],
    active_count: usize,
    order: ColorOrder,
}

impl<const MAX_LEDS: usize> PixelStore<MAX_LEDS> {
    /// Create an all-off store
    pub const fn new(order: ColorOrder) -> Self {
        Self {
            pixels: [[0; BYTES_PER_LED]; MAX_LEDS],
            active_count: 0,
            order,
        }
    }

    /// Store a color at `index`, raising the active count if needed
    ///
    /// Out-of-range writes leave the store untouched.
    pub fn write(&mut self, index: usize, color: Rgb) -> Result<(), LedError> {
        let Some(pixel) = self.pixels.get_mut(index) else {
            #[cfg(feature = "esp32-log")]
            println!("[pixels] LED {} is out of range", index);
            return Err(LedError::OutOfRange {
                index,
                capacity: MAX_LEDS,
            });
        };
        *pixel = self.order.arrange(color);
        if index >= self.active_count {
            self.active_count = index + 1;
        }
        Ok(())
    }

    /// Decode a packed RGB332 value and store it at `index`
    pub fn write_packed(&mut self, index: usize, packed: u8) -> Result<(), LedError> {
        self.write(index, decode_rgb332(packed))
    }

    /// Zero every pixel and forget the active count
    pub fn reset(&mut self) {
        self.pixels = [[0; BYTES_PER_LED]; MAX_LEDS];
        self.active_count = 0;
    }

    /// Wire bytes of the first `count` LEDs, clamped to the active count
    pub fn committed_bytes(&self, count: usize) -> &[u8] {
        let count = count.min(self.active_count);
        self.pixels[..count].as_flattened()
    }

    /// Logical color stored at `index`
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).map(|bytes| self.order.restore(*bytes))
    }

    /// Number of LEDs in the current frame
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    pub const fn capacity(&self) -> usize {
        MAX_LEDS
    }

    pub const fn order(&self) -> ColorOrder {
        self.order
    }
}

impl<const MAX_LEDS: usize> Default for PixelStore<MAX_LEDS> {
    fn default() -> Self {
        Self::new(ColorOrder::default())
    }
}
