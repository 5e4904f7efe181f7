use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Byte order of one LED on the wire
///
/// The strip stores every pixel already arranged in this order, so a flush
/// can hand the raw bytes to the encoder without reshuffling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Blue, red, green
    #[default]
    Brg,
    /// Green, red, blue (common WS2812B wiring)
    Grb,
    /// Red, green, blue
    Rgb,
}

impl ColorOrder {
    /// Arrange a logical color into wire bytes
    pub const fn arrange(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Brg => [color.b, color.r, color.g],
            Self::Grb => [color.g, color.r, color.b],
            Self::Rgb => [color.r, color.g, color.b],
        }
    }

    /// Recover the logical color from wire bytes
    pub const fn restore(self, bytes: [u8; 3]) -> Rgb {
        let [first, second, third] = bytes;
        match self {
            Self::Brg => Rgb {
                r: second,
                g: third,
                b: first,
            },
            Self::Grb => Rgb {
                r: second,
                g: first,
                b: third,
            },
            Self::Rgb => Rgb {
                r: first,
                g: second,
                b: third,
            },
        }
    }
}
