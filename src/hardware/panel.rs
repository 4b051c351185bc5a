//! Front-panel shift-register lines.
//!
//! Two daisy-chained shift registers sit behind five lines: switch states
//! come in through one (data plus load), LED states go out through the other
//! (data plus latch), and both share the serial clock. Only the pin roles
//! live here. The clocking protocol belongs to the front-panel driver one
//! level up, which can take the lines as embedded-hal pins via
//! [`Panel::split_pins`].

use super::pin::PortPin;
use super::pins;
use super::port::BitPort;

pub struct Panel<C, D> {
    clk_port: C,
    data_port: D,
}

impl<C: BitPort, D: BitPort> Panel<C, D> {
    /// `clk_port` carries [`pins::SCL`]; `data_port` carries the four data
    /// and latch lines.
    pub fn new(clk_port: C, data_port: D) -> Self {
        Self { clk_port, data_port }
    }

    /// Serial clock high. The clock is shared by both shift registers.
    #[inline(always)]
    pub fn clock_high(&mut self) {
        self.clk_port.set_bit(pins::SCL.bit);
    }

    /// Serial clock low.
    #[inline(always)]
    pub fn clock_low(&mut self) {
        self.clk_port.clear_bit(pins::SCL.bit);
    }

    /// Current state of the switch register's serial output.
    #[inline(always)]
    pub fn read_data_in(&self) -> bool {
        self.data_port.read_bit(pins::SDI.bit)
    }

    /// Load line of the switch register high.
    #[inline(always)]
    pub fn latch_in_high(&mut self) {
        self.data_port.set_bit(pins::SLI.bit);
    }

    /// Load line of the switch register low.
    #[inline(always)]
    pub fn latch_in_low(&mut self) {
        self.data_port.clear_bit(pins::SLI.bit);
    }

    /// Serial input of the LED register high.
    #[inline(always)]
    pub fn data_out_high(&mut self) {
        self.data_port.set_bit(pins::SDO.bit);
    }

    /// Serial input of the LED register low.
    #[inline(always)]
    pub fn data_out_low(&mut self) {
        self.data_port.clear_bit(pins::SDO.bit);
    }

    /// Latch line of the LED register high.
    #[inline(always)]
    pub fn latch_out_high(&mut self) {
        self.data_port.set_bit(pins::SLO.bit);
    }

    /// Latch line of the LED register low.
    #[inline(always)]
    pub fn latch_out_low(&mut self) {
        self.data_port.clear_bit(pins::SLO.bit);
    }
}

/// The five panel lines as embedded-hal pins.
pub struct PanelPins<C, D> {
    pub clock: PortPin<C>,
    pub data_in: PortPin<D>,
    pub latch_in: PortPin<D>,
    pub data_out: PortPin<D>,
    pub latch_out: PortPin<D>,
}

impl<C: BitPort, D: BitPort + Copy> Panel<C, D> {
    /// Tears the panel down into individual pins for an external
    /// shift-register driver. The four data-port pins alias one physical
    /// port, hence the `Copy` bound on its handle.
    pub fn split_pins(self) -> PanelPins<C, D> {
        PanelPins {
            clock: PortPin::new(self.clk_port, pins::SCL.bit),
            data_in: PortPin::new(self.data_port, pins::SDI.bit),
            latch_in: PortPin::new(self.data_port, pins::SLI.bit),
            data_out: PortPin::new(self.data_port, pins::SDO.bit),
            latch_out: PortPin::new(self.data_port, pins::SLO.bit),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn lines_map_to_their_pins() {
        let clk = Cell::new(0u8);
        let data = Cell::new(0u8);
        let mut panel = Panel::new(&clk, &data);
        panel.clock_high();
        assert_eq!(clk.get(), 1 << pins::SCL.bit);
        panel.clock_low();
        assert_eq!(clk.get(), 0);
        panel.latch_in_high();
        panel.data_out_high();
        panel.latch_out_high();
        assert_eq!(
            data.get(),
            (1 << pins::SLI.bit) | (1 << pins::SDO.bit) | (1 << pins::SLO.bit)
        );
        panel.latch_in_low();
        panel.data_out_low();
        panel.latch_out_low();
        assert_eq!(data.get(), 0);
        assert!(!panel.read_data_in());
        data.set(1 << pins::SDI.bit);
        assert!(panel.read_data_in());
    }

    #[test]
    fn split_pins_share_the_data_port() {
        use embedded_hal::digital::{InputPin, OutputPin};

        let clk = Cell::new(0u8);
        let data = Cell::new(0u8);
        let mut p = Panel::new(&clk, &data).split_pins();
        p.latch_out.set_high().unwrap();
        p.data_out.set_high().unwrap();
        assert_eq!(data.get(), (1 << pins::SLO.bit) | (1 << pins::SDO.bit));
        data.set(data.get() | (1 << pins::SDI.bit));
        assert!(p.data_in.is_high().unwrap());
        p.clock.set_high().unwrap();
        assert_eq!(clk.get(), 1 << pins::SCL.bit);
    }
}
