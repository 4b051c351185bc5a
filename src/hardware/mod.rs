//! Hardware layer of the quantizer module.
//!
//! The pin map in [`pins`] is the single point of hardware-address truth;
//! [`port`] turns physical registers into owned handles; the remaining
//! modules give the control loop named access to triggers, gates, the DAC
//! and the front-panel serial lines. No caller addresses a port or bit
//! directly.

pub mod dac;
pub mod io;
pub mod panel;
pub mod pin;
pub mod pins;
pub mod port;

use dac::Dac;
use io::{DebugPins, Gates, Triggers};
use panel::Panel;
use port::{BitPort, DacRegister};

/// Everything the control loop and the trigger interrupt touch.
///
/// Construction wires the port handles to the pin map once; the fields are
/// never reassigned afterwards. Which handles alias one physical port is a
/// wiring fact the caller states by passing copies of the same handle, as on
/// the quantizer board where the triggers and the panel data lines share a
/// port.
pub struct Hardware<T, G, R, C, D> {
    pub triggers: Triggers<T>,
    pub gates: Gates<G>,
    pub dac: Dac<R>,
    pub panel: Panel<C, D>,
    pub debug: DebugPins<C>,
}

impl<T, G, R, C, D> Hardware<T, G, R, C, D>
where
    T: BitPort,
    G: BitPort,
    R: DacRegister,
    C: BitPort + Copy,
    D: BitPort,
{
    /// Wires the hardware layer.
    ///
    /// `trig` carries the trigger inputs, `gate` the gate outputs, `dac_a`
    /// and `dac_b` the two analog output registers. `clk_port` carries the
    /// serial clock and the debug toggles, `data_port` the four panel data
    /// and latch lines.
    pub fn new(trig: T, gate: G, dac_a: R, dac_b: R, clk_port: C, data_port: D) -> Self {
        #[cfg(feature = "defmt")]
        defmt::trace!("hardware: wiring pin map");
        Self {
            triggers: Triggers::new(trig),
            gates: Gates::new(gate),
            dac: Dac::new(dac_a, dac_b),
            debug: DebugPins::new(clk_port),
            panel: Panel::new(clk_port, data_port),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::io::Channel;
    use super::*;

    #[test]
    fn shared_port_wiring_keeps_signals_apart() {
        // Triggers and the panel data lines share one physical port on the
        // board; the pin map keeps them on disjoint bits.
        let port_b = Cell::new(0u8);
        let port_c = Cell::new(0u8);
        let port_d = Cell::new(0u8);
        let dac_a = Cell::new(0u16);
        let dac_b = Cell::new(0u16);
        let mut hw = Hardware::new(&port_d, &port_c, &dac_a, &dac_b, &port_b, &port_d);

        hw.gates.set(Channel::B);
        assert_eq!(port_c.get(), 1 << (pins::GATE_A.bit + 1));

        port_d.set(1 << pins::TRIG_A.bit);
        assert!(hw.triggers.read(Channel::A));
        assert!(!hw.panel.read_data_in());

        hw.panel.latch_in_high();
        assert!(hw.triggers.read(Channel::A));

        hw.dac.set(Channel::A, 2048);
        assert_eq!((dac_a.get(), dac_b.get()), (2048, 0));
    }
}
