//! Gamma-corrected decoding of packed RGB332 pixel values.
//!
//! Code 0 is reserved for "off". Codes `1..=max` are spread over `2..=255`
//! with a power curve (γ ≈ 2.2). The floor of 2 keeps the dimmest code
//! visible on real LEDs.

use crate::color::Rgb;

/// Gamma exponent used to build the lookup tables
pub const GAMMA: f32 = 2.2;

/// Lowest non-zero output level
pub const GAMMA_FLOOR: u8 = 2;

/// Lookup table for 3-bit channels (red, green)
pub const LUT3: [u8; 8] = [0, 2, 7, 25, 57, 106, 171, 255];

/// Lookup table for 2-bit channels (blue)
pub const LUT2: [u8; 4] = [0, 2, 57, 255];

/// Decode a packed `RRRGGGBB` value into a gamma-corrected color
pub const fn decode_rgb332(packed: u8) -> Rgb {
    Rgb {
        r: LUT3[((packed >> 5) & 0x7) as usize],
        g: LUT3[((packed >> 2) & 0x7) as usize],
        b: LUT2[(packed & 0x3) as usize],
    }
}

/// Compute the output level of `code` on a curve with `max_code` steps
///
/// This is the curve the fixed tables were generated from.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma_level(code: u8, max_code: u8) -> u8 {
    if code == 0 {
        return 0;
    }
    if code >= max_code || max_code <= 1 {
        return u8::MAX;
    }
    let span = f32::from(u8::MAX - GAMMA_FLOOR);
    let position = f32::from(code - 1) / f32::from(max_code - 1);
    let level = f32::from(GAMMA_FLOOR) + span * libm::powf(position, GAMMA);
    libm::roundf(level) as u8
}

/// Build a lookup table with `N` entries
#[allow(clippy::cast_possible_truncation)]
pub fn ws2812_lut<const N: usize>() -> [u8; N] {
    let mut lut = [0; N];
    let max_code = N.saturating_sub(1).min(u8::MAX as usize) as u8;
    for (code, level) in lut.iter_mut().enumerate() {
        *level = gamma_level(code as u8, max_code);
    }
    lut
}
