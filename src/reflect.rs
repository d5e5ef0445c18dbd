//! Bit reflection helpers.
//!
//! Variants that process data least significant bit first are expressed here
//! in MSB-first form, with input bytes and the final register reversed.

/// Reverse the bit order of a byte (bit 0 ↔ bit 7, bit 1 ↔ bit 6, ...).
#[inline]
pub const fn reflect8(value: u8) -> u8 {
    value.reverse_bits()
}

/// Reverse the bit order of a 16 bit word (bit 0 ↔ bit 15, bit 1 ↔ bit 14, ...).
#[inline]
pub const fn reflect16(value: u16) -> u16 {
    value.reverse_bits()
}
