//! QR code encoding modules
//!
//! Everything between the input bytes and the finished module matrix:
//! - Mode selection and per-mode data encoding (numeric, alphanumeric, byte)
//! - Version and error correction level resolution
//! - Padding, Reed-Solomon error correction and block interleaving
//! - Function patterns, zigzag placement, masking and format/version info

/// BCH codes for format and version info
pub mod bch;
/// Bit buffer, terminator and pad codewords
pub mod bitstream;
pub mod config;
/// Format and version information placement
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// RS block split and interleaving
pub mod interleave;
/// Mask patterns, penalty scoring and selection
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Zigzag codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks, capacities, alignment)
pub mod tables;
/// Version and EC level resolution
pub mod version;

pub use qr_encoder::{EncodeOptions, Encoder};
