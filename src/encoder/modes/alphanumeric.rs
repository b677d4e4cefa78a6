/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [u8; 45] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

use crate::encoder::bitstream::BitBuffer;

/// Value of a character in the 45-symbol alphabet
pub fn char_value(c: u8) -> Option<u8> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&t| t == c)
        .map(|p| p as u8)
}

pub fn is_encodable(data: &[u8]) -> bool {
    data.iter().all(|&c| char_value(c).is_some())
}

/// Bits needed for `len` characters
pub fn encoded_len(len: usize) -> usize {
    11 * (len / 2) + 6 * (len % 2)
}

/// Pairs = 11 bits (first * 45 + second), trailing single = 6 bits.
///
/// `data` must be alphanumeric; other bytes are a caller bug.
pub fn encode(data: &[u8]) -> BitBuffer {
    debug_assert!(is_encodable(data), "input outside the alphanumeric set");
    let mut bits = BitBuffer::with_capacity(encoded_len(data.len()));
    let value = |c: u8| char_value(c).unwrap_or(0) as u32;
    for pair in data.chunks(2) {
        match *pair {
            [first, second] => bits.append_bits(value(first) * 45 + value(second), 11),
            [single] => bits.append_bits(value(single), 6),
            _ => {}
        }
    }
    bits
}
