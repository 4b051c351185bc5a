//! Integer helpers on the quantizer hot path.

/// `MOD12_TABLE[i]` is the largest multiple of 12 not above `4 * i`.
///
/// A block of four consecutive values shares one table entry; multiples of
/// 12 are multiples of 4, so a block never straddles one and the entry is
/// exact for all four. The tests verify this against `%` over the whole
/// domain rather than trusting the construction.
const MOD12_TABLE: [u8; 64] = build_mod12_table();

const fn build_mod12_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        let v = (i as u8) * 4;
        table[i] = v - v % 12;
        i += 1;
    }
    table
}

/// Remainder of `value / 12`, as one table lookup and one subtraction.
///
/// Pitch-class reduction is the hottest computation in the quantization
/// loop, so it avoids the divide entirely. Exact for the whole `u8` domain;
/// the domain bound is carried by the argument type, not a runtime check.
#[inline(always)]
pub fn mod12(value: u8) -> u8 {
    value - MOD12_TABLE[(value >> 2) as usize]
}

/// Error of [`map_range`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// `in_min == in_max`: the input range has no width to rescale from.
    DegenerateInput,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DegenerateInput => f.write_str("input range is empty (in_min == in_max)"),
        }
    }
}

/// Rescales `x` from `[in_min, in_max]` to `[out_min, out_max]` in integer
/// arithmetic throughout.
///
/// Both bounds map exactly: `map_range(in_min, ..)` is `out_min` and
/// `map_range(in_max, ..)` is `out_max`. Values in between truncate toward
/// zero, which callers snapping ADC readings to note numbers rely on.
///
/// An empty input range is the one runtime condition this layer reports,
/// since the bounds often come from runtime calibration rather than
/// constants.
pub fn map_range(
    x: i32,
    in_min: i32,
    in_max: i32,
    out_min: i32,
    out_max: i32,
) -> Result<i32, RangeError> {
    if in_min == in_max {
        return Err(RangeError::DegenerateInput);
    }
    Ok((x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min)
}
