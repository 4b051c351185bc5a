#![no_std]

//! Hardware access layer for a two-channel musical CV quantizer.
//!
//! Everything that touches a physical pin lives under [`hardware`]: the pin
//! map, single-bit port access, the gate/trigger channel accessors, the
//! two-channel DAC and the front-panel shift-register lines. [`math`] holds
//! the two integer helpers the quantization loop leans on. The quantization
//! algorithm itself, the front-panel protocol and the menu logic are callers
//! of this crate, not part of it.
//!
//! Ports are explicit handles rather than globals, so host tests (and the
//! example below) can stand in a `Cell` for a register:
//!
//! ```
//! use core::cell::Cell;
//! use quantizer_module::hardware::{pins, Hardware};
//! use quantizer_module::hardware::io::Channel;
//!
//! let port_b = Cell::new(0u8);
//! let port_c = Cell::new(0u8);
//! let port_d = Cell::new(0u8);
//! let (dac_a, dac_b) = (Cell::new(0u16), Cell::new(0u16));
//!
//! let mut hw = Hardware::new(&port_d, &port_c, &dac_a, &dac_b, &port_b, &port_d);
//! hw.gates.set(Channel::A);
//! hw.dac.set(Channel::A, 0x0800);
//! assert!(port_c.get() & (1 << pins::GATE_A.bit) != 0);
//! assert_eq!(dac_a.get(), 0x0800);
//! ```

pub mod hardware;
pub mod math;
