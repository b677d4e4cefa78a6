//! rust_qrencode - QR code (Model 2) encoder
//!
//! Turns text or raw bytes into a QR symbol: mode selection, version and
//! error correction level resolution, Reed-Solomon coding, module placement
//! and mask selection. The result is a plain module matrix that the
//! [`render`] helpers turn into images or text.
//!
//! # Example
//! ```
//! let qr = rust_qrencode::encode("HELLO WORLD", None).unwrap();
//! assert_eq!(qr.size(), 21);
//! assert_eq!(qr.ec_level(), rust_qrencode::ECLevel::Q);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// QR code encoding modules (modes, error correction, placement, masking)
#[allow(missing_docs)]
pub mod encoder;
/// Error type returned by the encoder
pub mod error;
/// Core data structures (QrMatrix, BitMatrix, Version, etc.)
#[allow(missing_docs)]
pub mod models;
/// Image and text output for encoded symbols
pub mod render;

pub use encoder::{EncodeOptions, Encoder};
pub use error::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, Mode, Module, QrMatrix, Version};

/// Encode `text` (as UTF-8) into a QR symbol.
///
/// Without an `ec_level` the strongest level that fits the smallest possible
/// version is chosen.
pub fn encode(text: &str, ec_level: Option<ECLevel>) -> Result<QrMatrix, EncodeError> {
    encode_bytes(text.as_bytes(), ec_level)
}

/// Encode raw bytes into a QR symbol
pub fn encode_bytes(data: &[u8], ec_level: Option<ECLevel>) -> Result<QrMatrix, EncodeError> {
    Encoder::with_options(EncodeOptions {
        ec_level,
        ..EncodeOptions::default()
    })
    .encode(data)
}
