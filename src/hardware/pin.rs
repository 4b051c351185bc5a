//! embedded-hal view over a single bit of a [`BitPort`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use super::port::BitPort;

/// One pin of a port, exposed through the embedded-hal digital traits.
///
/// The front-panel shift-register driver lives outside this crate and takes
/// its lines as [`OutputPin`]/[`InputPin`] rather than raw port handles.
pub struct PortPin<P> {
    port: P,
    bit: u8,
}

impl<P: BitPort> PortPin<P> {
    /// Views bit `bit` of `port`. `bit` comes from the pin map and must be
    /// in `0..8`.
    pub fn new(port: P, bit: u8) -> Self {
        Self { port, bit }
    }
}

impl<P: BitPort> ErrorType for PortPin<P> {
    type Error = Infallible;
}

impl<P: BitPort> OutputPin for PortPin<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.port.clear_bit(self.bit);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.port.set_bit(self.bit);
        Ok(())
    }
}

impl<P: BitPort> InputPin for PortPin<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.port.read_bit(self.bit))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.port.read_bit(self.bit))
    }
}
