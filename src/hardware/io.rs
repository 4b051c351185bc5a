//! Trigger inputs, gate outputs and the debug toggles.

use super::pins;
use super::port::BitPort;

/// Quantizer channel. The module has two of everything: trigger in, gate
/// out, CV out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A = 0,
    B = 1,
}

impl Channel {
    /// Bit offset of this channel above a channel-A base address.
    #[inline(always)]
    pub const fn offset(self) -> u8 {
        self as u8
    }
}

/// The two trigger inputs, on adjacent bits of one port.
pub struct Triggers<P> {
    port: P,
}

impl<P: BitPort> Triggers<P> {
    /// `port` is the input register carrying [`pins::TRIG_A`].
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// True while the trigger input of `ch` is high.
    ///
    /// The base bit is a constant; only the channel offset is added at
    /// runtime. This read sits on the interrupt path of the control loop.
    #[inline(always)]
    pub fn read(&self, ch: Channel) -> bool {
        self.port.read_bit(pins::TRIG_A.bit + ch.offset())
    }
}

/// The two gate outputs, on adjacent bits of one port.
pub struct Gates<P> {
    port: P,
}

impl<P: BitPort> Gates<P> {
    /// `port` is the output register carrying [`pins::GATE_A`].
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Raises the gate of `ch`.
    #[inline(always)]
    pub fn set(&mut self, ch: Channel) {
        self.port.set_bit(pins::GATE_A.bit + ch.offset());
    }

    /// Drops the gate of `ch`.
    #[inline(always)]
    pub fn clear(&mut self, ch: Channel) {
        self.port.clear_bit(pins::GATE_A.bit + ch.offset());
    }
}

/// Scope-probe toggle outputs on [`pins::DEBUG_A`] and the bit above.
#[cfg(feature = "debug-pins")]
pub struct DebugPins<P> {
    port: P,
}

#[cfg(feature = "debug-pins")]
impl<P: BitPort> DebugPins<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    #[inline(always)]
    pub fn set(&mut self, ch: Channel) {
        self.port.set_bit(pins::DEBUG_A.bit + ch.offset());
    }

    #[inline(always)]
    pub fn clear(&mut self, ch: Channel) {
        self.port.clear_bit(pins::DEBUG_A.bit + ch.offset());
    }
}

/// Without the `debug-pins` feature the toggles compile to nothing; the
/// struct keeps the same shape so call sites do not change.
#[cfg(not(feature = "debug-pins"))]
pub struct DebugPins<P> {
    _port: core::marker::PhantomData<P>,
}

#[cfg(not(feature = "debug-pins"))]
impl<P: BitPort> DebugPins<P> {
    pub fn new(_port: P) -> Self {
        Self {
            _port: core::marker::PhantomData,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, _ch: Channel) {}

    #[inline(always)]
    pub fn clear(&mut self, _ch: Channel) {}
}
