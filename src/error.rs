use core::fmt;

/// Errors raised by pixel writes and LED commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Pixel index past the strip capacity
    OutOfRange { index: usize, capacity: usize },
    /// Packed pixel value outside `0..=255`
    InvalidValue { position: usize, value: i32 },
    /// Command without any pixel values
    EmptyInput,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, capacity } => {
                write!(f, "LED {index} is out of range (capacity {capacity})")
            }
            Self::InvalidValue { position, value } => {
                write!(f, "value {value} at position {position} is not a packed pixel")
            }
            Self::EmptyInput => f.write_str("no pixel values given"),
        }
    }
}

/// Errors raised by strip operations that reach the output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError<E> {
    Led(LedError),
    /// The transmission peripheral failed
    Transmit(E),
}

impl<E> From<LedError> for StripError<E> {
    fn from(error: LedError) -> Self {
        Self::Led(error)
    }
}

impl<E: fmt::Debug> fmt::Display for StripError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Led(error) => error.fmt(f),
            Self::Transmit(error) => write!(f, "transmission failed: {error:?}"),
        }
    }
}
