//! Pin map: the single point of hardware-address truth.
//!
//! Every logical signal of the quantizer board is pinned down here as a
//! (port, bit) pair. Callers never address a port or bit literal directly;
//! they go through the accessors in the sibling modules, which take their
//! base bits from these constants.

/// Physical 8-bit I/O port identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    B,
    C,
    D,
}

/// One physical pin: an 8-bit port plus a bit position within it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalAddress {
    pub port: PortId,
    pub bit: u8,
}

/// Trigger input A.
///
/// Trigger B sits on the same port one bit above. Only the A address is
/// stored; the channel accessors derive B by adding the channel index.
pub const TRIG_A: SignalAddress = SignalAddress { port: PortId::D, bit: 2 };

/// Gate output A. Gate B is one bit above on the same port, as with
/// [`TRIG_A`].
pub const GATE_A: SignalAddress = SignalAddress { port: PortId::C, bit: 4 };

/// Serial clock shared by both front-panel shift registers.
pub const SCL: SignalAddress = SignalAddress { port: PortId::B, bit: 0 };

/// Serial data out of the switch (input) shift register.
pub const SDI: SignalAddress = SignalAddress { port: PortId::D, bit: 4 };

/// Load line of the switch shift register.
pub const SLI: SignalAddress = SignalAddress { port: PortId::D, bit: 5 };

/// Serial data into the LED (output) shift register.
pub const SDO: SignalAddress = SignalAddress { port: PortId::D, bit: 6 };

/// Latch line of the LED shift register.
pub const SLO: SignalAddress = SignalAddress { port: PortId::D, bit: 7 };

/// Debug toggle output A; B is one bit above. Only driven when the
/// `debug-pins` feature is on.
pub const DEBUG_A: SignalAddress = SignalAddress { port: PortId::B, bit: 3 };

// Channel B adds 1 to the A bit, so every two-channel base needs headroom.
const _: () = assert!(TRIG_A.bit < 7 && GATE_A.bit < 7 && DEBUG_A.bit < 7);
const _: () = assert!(SCL.bit < 8 && SDI.bit < 8 && SLI.bit < 8 && SDO.bit < 8 && SLO.bit < 8);
