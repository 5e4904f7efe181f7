//! Completion flag shared between a transmit interrupt and the issuing task.
//!
//! Built on `critical-section`, so it is safe to signal from an interrupt
//! handler or another thread.

use core::cell::Cell;

use critical_section::Mutex;

/// One-shot "transmission finished" flag
///
/// A fresh signal is set: nothing is in flight yet.
pub struct CompletionSignal {
    done: Mutex<Cell<bool>>,
}

impl CompletionSignal {
    pub const fn new() -> Self {
        Self {
            done: Mutex::new(Cell::new(true)),
        }
    }

    /// Mark a transmission as started
    pub fn reset(&self) {
        critical_section::with(|cs| self.done.borrow(cs).set(false));
    }

    /// Mark the transmission as finished
    ///
    /// Called from the completion interrupt.
    pub fn signal(&self) {
        critical_section::with(|cs| self.done.borrow(cs).set(true));
    }

    pub fn is_signaled(&self) -> bool {
        critical_section::with(|cs| self.done.borrow(cs).get())
    }

    /// Spin until the flag is set
    ///
    /// There is no timeout: a strip never legitimately takes unbounded time.
    pub fn wait(&self) {
        while !self.is_signaled() {
            core::hint::spin_loop();
        }
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}
