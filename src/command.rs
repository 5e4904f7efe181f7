//! `+LED` command adapter
//!
//! Receives the already-parsed integer parameters of one command. Each
//! parameter is a packed RGB332 value for the LED at its position.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::color::Rgb;
use crate::error::{LedError, StripError};
use crate::gamma::decode_rgb332;
use crate::strip::LedStrip;
use crate::transmitter::Transmitter;

/// Result code reported back to the command layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    Error,
}

impl<E> From<Result<(), E>> for ResultCode {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(_) => Self::Error,
        }
    }
}

/// Decode packed values into colors
///
/// At most `MAX_LEDS` parameters are taken; the rest are ignored.
pub fn decode_params<const MAX_LEDS: usize>(
    params: &[i32],
) -> Result<Vec<Rgb, MAX_LEDS>, LedError> {
    if params.is_empty() {
        return Err(LedError::EmptyInput);
    }

    let mut colors = Vec::new();
    for (position, &value) in params.iter().take(MAX_LEDS).enumerate() {
        let packed = u8::try_from(value).map_err(|_| LedError::InvalidValue { position, value })?;
        let color = decode_rgb332(packed);

        #[cfg(feature = "esp32-log")]
        println!(
            "[command] LED {} to {:02x} / {},{},{}",
            position, packed, color.r, color.g, color.b
        );

        // take(MAX_LEDS) bounds the length
        let _ = colors.push(color);
    }
    Ok(colors)
}

/// Execute `+LED=<v0>,<v1>,...`
///
/// Every value is validated before the first write, so a rejected command
/// leaves the strip untouched. On success the written LEDs are flushed.
pub fn set_leds<T: Transmitter, const MAX_LEDS: usize>(
    strip: &mut LedStrip<T, MAX_LEDS>,
    params: &[i32],
) -> Result<(), StripError<T::Error>> {
    let colors = decode_params::<MAX_LEDS>(params)?;
    for (index, color) in colors.iter().enumerate() {
        strip.write(index, *color)?;
    }
    strip.flush(colors.len()).map_err(StripError::Transmit)
}
