//! Stateless byte-to-symbol encoder.
//!
//! The transmission hardware pulls symbols whenever it has room and tells the
//! encoder how many symbols it has already accepted. The byte to encode next
//! is recovered from that counter alone, so [`expand`] keeps no state and may
//! be called from any context, including an interrupt handler.

use crate::symbol::{ONE, RESET, SYMBOLS_PER_BYTE, Symbol, ZERO};

/// Outcome of one encoder call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// Number of symbols written into the output window
    pub produced: usize,
    /// Whether the frame has been fully encoded
    pub done: bool,
}

impl Expansion {
    /// Nothing written because the window cannot hold a whole byte
    pub const DEFERRED: Self = Self {
        produced: 0,
        done: false,
    };

    /// Returns true if the call was deferred to a larger window
    pub const fn is_deferred(self) -> bool {
        self.produced == 0 && !self.done
    }
}

/// Signature of a pull-based symbol source
///
/// Arguments are the source bytes, the number of symbols already accepted
/// by the consumer and the free output window.
pub type Encoder = fn(&[u8], usize, &mut [Symbol]) -> Expansion;

/// Encode the next byte of `source`, or the trailing reset
///
/// Bytes are never split across calls: a window smaller than one byte worth
/// of symbols is deferred even if only the reset symbol is left.
pub fn expand(source: &[u8], symbols_written: usize, symbols: &mut [Symbol]) -> Expansion {
    if symbols.len() < SYMBOLS_PER_BYTE {
        return Expansion::DEFERRED;
    }

    let position = symbols_written / SYMBOLS_PER_BYTE;
    let Some(&byte) = source.get(position) else {
        symbols[0] = RESET;
        return Expansion {
            produced: 1,
            done: true,
        };
    };

    for (bit, symbol) in symbols.iter_mut().take(SYMBOLS_PER_BYTE).enumerate() {
        *symbol = if byte & (0x80 >> bit) != 0 { ONE } else { ZERO };
    }

    Expansion {
        produced: SYMBOLS_PER_BYTE,
        done: false,
    }
}

/// Pull loop over an [`Encoder`]
///
/// Owns the monotonic `symbols_written` counter that a transmission
/// peripheral keeps for flow control, and fills whatever window it is
/// offered with as many whole bytes as fit.
#[derive(Debug, Clone)]
pub struct SymbolPump<'a> {
    source: &'a [u8],
    encoder: Encoder,
    symbols_written: usize,
    done: bool,
}

impl<'a> SymbolPump<'a> {
    pub const fn new(source: &'a [u8], encoder: Encoder) -> Self {
        Self {
            source,
            encoder,
            symbols_written: 0,
            done: false,
        }
    }

    /// Fill `window` and return the number of symbols written
    ///
    /// Returns 0 once the frame is done or when the window is too small
    /// for the next byte.
    pub fn fill(&mut self, window: &mut [Symbol]) -> usize {
        let mut filled = 0;
        while !self.done {
            let Some(free) = window.get_mut(filled..) else {
                break;
            };
            let expansion = (self.encoder)(self.source, self.symbols_written, free);
            if expansion.is_deferred() {
                break;
            }
            filled += expansion.produced;
            self.symbols_written += expansion.produced;
            self.done = expansion.done;
        }
        filled
    }

    /// Number of symbols handed out so far
    pub const fn symbols_written(&self) -> usize {
        self.symbols_written
    }

    /// Returns true once the trailing reset has been emitted
    pub const fn is_done(&self) -> bool {
        self.done
    }
}
