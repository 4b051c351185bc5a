//! Register handles and single-bit I/O primitives.
//!
//! Physical ports are explicit, owned handles instead of globals. Real
//! targets wrap a memory-mapped register in [`Reg8`]/[`Reg16`]; host tests
//! substitute a `Cell`, which implements the same traits.

use core::cell::Cell;
use core::ptr;

/// Single-bit access to an 8-bit port register.
///
/// `bit` must be in `0..8` for every method. The implementations shift by
/// `bit` without a range check; the pin map constants are the only sanctioned
/// source of bit positions, so a check here would only cost cycles on the
/// trigger path.
///
/// Set and clear are read-modify-write sequences and are not atomic. A
/// caller sharing one port between an interrupt handler and the main loop
/// must bracket them in its own critical section.
pub trait BitPort {
    /// Drives bit `bit` of the port high.
    fn set_bit(&mut self, bit: u8);
    /// Drives bit `bit` of the port low.
    fn clear_bit(&mut self, bit: u8);
    /// Reads the current electrical state of bit `bit`.
    fn read_bit(&self, bit: u8) -> bool;
}

/// A 16-bit register a DAC channel value is stored to.
pub trait DacRegister {
    /// Stores `value`; the conversion happens on the next hardware cycle.
    fn write(&mut self, value: u16);
}

/// Handle to a memory-mapped 8-bit I/O register.
///
/// Copies of a handle alias the same register. That mirrors the hardware:
/// several logical signals can live on one physical port, and this layer
/// does not arbitrate between them.
#[derive(Debug, Copy, Clone)]
pub struct Reg8 {
    addr: *mut u8,
}

impl Reg8 {
    /// Handle over the register at `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must point to an 8-bit I/O register that remains valid for the
    /// life of the handle and all copies of it, with volatile reads and
    /// writes sound at that address.
    pub const unsafe fn new(addr: *mut u8) -> Self {
        Self { addr }
    }
}

impl BitPort for Reg8 {
    #[inline(always)]
    fn set_bit(&mut self, bit: u8) {
        unsafe {
            let v = ptr::read_volatile(self.addr);
            ptr::write_volatile(self.addr, v | (1 << bit));
        }
    }

    #[inline(always)]
    fn clear_bit(&mut self, bit: u8) {
        unsafe {
            let v = ptr::read_volatile(self.addr);
            ptr::write_volatile(self.addr, v & !(1 << bit));
        }
    }

    #[inline(always)]
    fn read_bit(&self, bit: u8) -> bool {
        unsafe { ptr::read_volatile(self.addr) & (1 << bit) != 0 }
    }
}

/// Handle to a memory-mapped 16-bit output register, e.g. a timer compare
/// register feeding a PWM DAC stage.
#[derive(Debug, Copy, Clone)]
pub struct Reg16 {
    addr: *mut u16,
}

impl Reg16 {
    /// Handle over the register at `addr`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Reg8::new`], for a 16-bit register.
    pub const unsafe fn new(addr: *mut u16) -> Self {
        Self { addr }
    }
}

impl DacRegister for Reg16 {
    #[inline(always)]
    fn write(&mut self, value: u16) {
        unsafe { ptr::write_volatile(self.addr, value) }
    }
}

// Simulated ports for host-side tests. Two copies of the reference model two
// signal groups sharing one physical port.
impl BitPort for &Cell<u8> {
    fn set_bit(&mut self, bit: u8) {
        self.set(self.get() | (1 << bit));
    }

    fn clear_bit(&mut self, bit: u8) {
        self.set(self.get() & !(1 << bit));
    }

    fn read_bit(&self, bit: u8) -> bool {
        self.get() & (1 << bit) != 0
    }
}

impl DacRegister for &Cell<u16> {
    fn write(&mut self, value: u16) {
        self.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg8_sets_clears_and_reads_bits() {
        let mut backing: u8 = 0b0000_0001;
        let mut reg = unsafe { Reg8::new(&mut backing as *mut u8) };
        reg.set_bit(6);
        assert!(reg.read_bit(0));
        assert!(reg.read_bit(6));
        assert!(!reg.read_bit(3));
        reg.clear_bit(0);
        assert!(!reg.read_bit(0));
        assert_eq!(backing, 0b0100_0000);
    }

    #[test]
    fn reg16_stores_the_full_word() {
        let mut backing: u16 = 0;
        let mut reg = unsafe { Reg16::new(&mut backing as *mut u16) };
        reg.write(0xBEEF);
        assert_eq!(backing, 0xBEEF);
    }

    #[test]
    fn cell_port_matches_register_semantics() {
        let cell = Cell::new(0u8);
        let mut port = &cell;
        port.set_bit(2);
        port.set_bit(5);
        assert_eq!(cell.get(), 0b0010_0100);
        port.clear_bit(2);
        assert_eq!(cell.get(), 0b0010_0000);
        assert!(port.read_bit(5));
        assert!(!port.read_bit(2));
    }
}
