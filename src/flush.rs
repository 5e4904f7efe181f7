//! Flush controller
//!
//! Owns the output line and guarantees that transmissions never overlap.

use crate::encoder::expand;
use crate::transmitter::Transmitter;

/// State of the output line as last seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushState {
    Idle,
    /// A transmission was started and has not been awaited yet
    Transmitting,
}

/// Serializes transmissions over one output line
pub struct FlushController<T: Transmitter> {
    transmitter: T,
    state: FlushState,
}

impl<T: Transmitter> FlushController<T> {
    pub const fn new(transmitter: T) -> Self {
        Self {
            transmitter,
            state: FlushState::Idle,
        }
    }

    /// Send `frame` to the strip
    ///
    /// Waits for the previous transmission first, then starts a new one
    /// with [`expand`] as the symbol source. Returns as soon as the new
    /// transmission is started; the next call is its completion barrier.
    pub fn flush(&mut self, frame: &[u8]) -> Result<(), T::Error> {
        self.wait_idle()?;
        self.transmitter.transmit(frame, expand)?;
        self.state = FlushState::Transmitting;
        Ok(())
    }

    /// Block until the line is idle
    pub fn wait_idle(&mut self) -> Result<(), T::Error> {
        if self.state == FlushState::Transmitting {
            self.transmitter.wait_all_done()?;
            self.state = FlushState::Idle;
        }
        Ok(())
    }

    pub const fn state(&self) -> FlushState {
        self.state
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Release the transmitter, waiting for the line to go idle first
    pub fn into_inner(mut self) -> Result<T, T::Error> {
        self.wait_idle()?;
        Ok(self.transmitter)
    }
}
