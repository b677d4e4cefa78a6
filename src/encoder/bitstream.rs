/// Bitstream assembly: bit buffer, terminator, byte alignment and pad codewords
use std::fmt;

use crate::error::EncodeError;

/// Pad codewords appended alternately after the data
pub const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Ordered sequence of bits, most significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `count` bits of `value`, high bit first.
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32 && (count == 32 || value >> count == 0));
        for i in (0..count).rev() {
            self.bits.push(((value >> i) & 1) != 0);
        }
    }

    pub fn extend(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Pack into bytes, MSB first. A trailing partial byte is dropped.
    pub fn to_codewords(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
            .collect()
    }

    /// '0'/'1' rendering
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

/// Terminate, byte-align and pad `bits` to exactly `capacity_bits`.
///
/// The terminator is up to four zero bits, cut short when the capacity
/// leaves less room. Pad codewords 0xEC and 0x11 alternate after alignment.
pub fn pad_bitstream(bits: &mut BitBuffer, capacity_bits: usize) -> Result<(), EncodeError> {
    if bits.len() > capacity_bits {
        return Err(EncodeError::InvariantViolation(format!(
            "bitstream of {} bits exceeds capacity of {} bits",
            bits.len(),
            capacity_bits
        )));
    }
    if capacity_bits % 8 != 0 {
        return Err(EncodeError::InvariantViolation(format!(
            "capacity of {} bits is not a whole number of codewords",
            capacity_bits
        )));
    }

    let terminator = (capacity_bits - bits.len()).min(4);
    bits.append_bits(0, terminator);

    let alignment = (8 - bits.len() % 8) % 8;
    bits.append_bits(0, alignment);

    for &pad in PAD_CODEWORDS.iter().cycle() {
        if bits.len() >= capacity_bits {
            break;
        }
        bits.append_bits(pad as u32, 8);
    }

    if bits.len() != capacity_bits {
        return Err(EncodeError::InvariantViolation(format!(
            "padded bitstream is {} bits, expected {}",
            bits.len(),
            capacity_bits
        )));
    }
    Ok(())
}
