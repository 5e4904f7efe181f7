use crate::encoder::Encoder;

/// Hardware capability that turns a symbol stream into a wire signal
///
/// Implement this trait to support different output peripherals (RMT, SPI,
/// PIO or a bit-banged pin). A transmission is started with
/// [`transmit`](Self::transmit) and may keep running after it returns; the
/// implementation pulls symbols from `encoder` with a growing
/// `symbols_written` count until it reports done.
///
/// Implementations that stream in the background must copy `frame` into
/// their own fixed-size buffer, since the borrow ends when `transmit`
/// returns.
pub trait Transmitter {
    type Error;

    /// Block until every transmission started so far has completed
    fn wait_all_done(&mut self) -> Result<(), Self::Error>;

    /// Start sending `frame`, pulling symbols from `encoder` on demand
    fn transmit(&mut self, frame: &[u8], encoder: Encoder) -> Result<(), Self::Error>;
}

impl<T: Transmitter + ?Sized> Transmitter for &mut T {
    type Error = T::Error;

    fn wait_all_done(&mut self) -> Result<(), Self::Error> {
        (**self).wait_all_done()
    }

    fn transmit(&mut self, frame: &[u8], encoder: Encoder) -> Result<(), Self::Error> {
        (**self).transmit(frame, encoder)
    }
}
