//! Two-channel DAC output.

use super::io::Channel;
use super::port::DacRegister;

/// The DAC channel table: logical channel index to hardware output register.
///
/// On the quantizer board the two registers are the 16-bit timer compare
/// registers feeding the PWM DAC stages. The table is built once and owned
/// exclusively here; callers only ever go through [`Dac::set`].
pub struct Dac<R> {
    channels: [R; 2],
}

impl<R: DacRegister> Dac<R> {
    pub fn new(a: R, b: R) -> Self {
        Self { channels: [a, b] }
    }

    /// Stores `value` into the register of `ch`.
    ///
    /// Nothing happens here beyond the table index and the store; the call
    /// sits on the timing-sensitive path between quantization and the next
    /// conversion cycle. The analog stage decides how many of the 16 bits
    /// are meaningful.
    #[inline(always)]
    pub fn set(&mut self, ch: Channel, value: u16) {
        self.channels[ch as usize].write(value);
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn set_targets_only_the_selected_register() {
        let a = Cell::new(0u16);
        let b = Cell::new(0u16);
        let mut dac = Dac::new(&a, &b);
        dac.set(Channel::A, 0x0FFF);
        assert_eq!((a.get(), b.get()), (0x0FFF, 0));
        dac.set(Channel::B, 0x8000);
        assert_eq!((a.get(), b.get()), (0x0FFF, 0x8000));
        dac.set(Channel::A, 0);
        assert_eq!((a.get(), b.get()), (0, 0x8000));
    }

    #[test]
    fn full_register_width_is_accepted() {
        let a = Cell::new(0u16);
        let b = Cell::new(0u16);
        let mut dac = Dac::new(&a, &b);
        dac.set(Channel::B, u16::MAX);
        assert_eq!(b.get(), u16::MAX);
    }
}
