/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

pub fn encoded_len(len: usize) -> usize {
    8 * len
}

/// Each byte becomes 8 bits in input order. Multi-byte UTF-8 sequences
/// are written as consecutive bytes.
pub fn encode(data: &[u8]) -> BitBuffer {
    let mut bits = BitBuffer::with_capacity(encoded_len(data.len()));
    for &byte in data {
        bits.append_bits(byte as u32, 8);
    }
    bits
}
