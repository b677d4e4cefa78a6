/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;

pub fn is_encodable(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_digit)
}

/// Bits needed for `len` digits
pub fn encoded_len(len: usize) -> usize {
    10 * (len / 3)
        + match len % 3 {
            0 => 0,
            1 => 4,
            _ => 7,
        }
}

pub fn encode(data: &[u8]) -> BitBuffer {
    debug_assert!(is_encodable(data), "input outside the numeric set");
    let mut bits = BitBuffer::with_capacity(encoded_len(data.len()));
    for group in data.chunks(3) {
        let value = group
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
        let width = match group.len() {
            3 => 10,
            2 => 7,
            _ => 4,
        };
        bits.append_bits(value, width);
    }
    bits
}
