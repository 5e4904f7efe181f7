#![no_std]

pub mod color;
pub mod command;
pub mod encoder;
pub mod error;
pub mod flush;
pub mod gamma;
pub mod pixel_store;
pub mod signal;
pub mod strip;
pub mod symbol;
pub mod transmitter;

pub use command::{ResultCode, set_leds};
pub use encoder::{Encoder, Expansion, SymbolPump, expand};
pub use error::{LedError, StripError};
pub use flush::{FlushController, FlushState};
pub use gamma::{decode_rgb332, ws2812_lut};
pub use pixel_store::{PixelStore, STRIP_CAPACITY};
pub use signal::CompletionSignal;
pub use strip::{DEFAULT_LIT_COUNT, LedStrip, LedStripConfig};
pub use symbol::Symbol;
pub use transmitter::Transmitter;

pub use color::{ColorOrder, Rgb};
pub use smart_leds::SmartLedsWrite;
