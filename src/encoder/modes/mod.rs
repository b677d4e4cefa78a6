//! QR code data mode encoders
//!
//! This module contains the mode selector and one encoder per mode:
//! - Numeric: digits (0-9), three per 10 bits
//! - Alphanumeric: upper-case letters, digits and nine symbols, two per 11 bits
//! - Byte: raw 8-bit data (UTF-8 text is written byte by byte)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use crate::encoder::bitstream::BitBuffer;
use crate::models::Mode;

impl Mode {
    /// Narrowest mode able to represent every byte of `data`. Empty input
    /// has nothing to classify and falls back to byte mode.
    pub fn select(data: &[u8]) -> Mode {
        if data.is_empty() {
            Mode::Byte
        } else if numeric::is_encodable(data) {
            Mode::Numeric
        } else if alphanumeric::is_encodable(data) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Whether this mode can represent `data`
    pub fn can_encode(&self, data: &[u8]) -> bool {
        match self {
            Mode::Numeric => numeric::is_encodable(data),
            Mode::Alphanumeric => alphanumeric::is_encodable(data),
            Mode::Byte => true,
        }
    }

    /// Length of the encoded data for `len` characters, headers excluded
    pub fn data_bits(&self, len: usize) -> usize {
        match self {
            Mode::Numeric => numeric::encoded_len(len),
            Mode::Alphanumeric => alphanumeric::encoded_len(len),
            Mode::Byte => byte::encoded_len(len),
        }
    }

    /// Encoded data bits, without mode and length indicators.
    ///
    /// `data` must satisfy [`Mode::can_encode`]; characters outside the
    /// alphabet are a caller bug.
    pub fn encode_data(&self, data: &[u8]) -> BitBuffer {
        match self {
            Mode::Numeric => numeric::encode(data),
            Mode::Alphanumeric => alphanumeric::encode(data),
            Mode::Byte => byte::encode(data),
        }
    }
}
