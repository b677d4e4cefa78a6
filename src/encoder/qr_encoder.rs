/// Main QR code encoder - wires everything together
use crate::debug::debug_enabled;
use crate::encoder::bitstream::pad_bitstream;
use crate::encoder::format::write_format_info;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::interleave::build_codeword_stream;
use crate::encoder::mask::{masked_candidate, select_mask};
use crate::encoder::placement::place_codewords;
use crate::encoder::tables::data_capacity_bits;
use crate::encoder::version::resolve_version;
use crate::error::EncodeError;
use crate::models::{ECLevel, MaskPattern, Mode, QrMatrix};

/// Caller overrides for one encode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Fixed error correction level; `None` picks the strongest level that
    /// fits the smallest version
    pub ec_level: Option<ECLevel>,
    /// Fixed mode; `None` picks the most compact mode for the input
    pub mode: Option<Mode>,
    /// Fixed mask; `None` runs the penalty search
    pub mask: Option<MaskPattern>,
}

/// QR encoder with its options
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Encoder with automatic level, mode and mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder with explicit options
    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Fix the error correction level
    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.options.ec_level = Some(ec_level);
        self
    }

    /// Force an encoding mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = Some(mode);
        self
    }

    /// Commit a mask without the penalty search
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.options.mask = Some(mask);
        self
    }

    /// Current options
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode raw bytes into a finished symbol
    pub fn encode(&self, data: &[u8]) -> Result<QrMatrix, EncodeError> {
        let mode = match self.options.mode {
            Some(mode) if !mode.can_encode(data) => {
                return Err(EncodeError::ModeMismatch { mode });
            }
            Some(mode) => mode,
            None => Mode::select(data),
        };

        let resolution = resolve_version(mode, data.len(), self.options.ec_level)?;
        let version = resolution.version;
        let ec_level = resolution.ec_level;

        // Header + data, then terminator and pad codewords
        let mut bits = resolution.header();
        bits.extend(&mode.encode_data(data));
        let capacity = data_capacity_bits(version, ec_level).ok_or_else(|| {
            EncodeError::InvariantViolation(format!(
                "no capacity for version {} level {}",
                version, ec_level
            ))
        })?;
        pad_bitstream(&mut bits, capacity)?;

        let stream = build_codeword_stream(&bits.to_codewords(), version, ec_level)?;

        let func = FunctionMask::new(version);
        let unmasked = place_codewords(&func, &stream)?;

        let (mask, mut modules) = match self.options.mask {
            Some(mask) => (mask, masked_candidate(&unmasked, &func, ec_level, mask)),
            None => select_mask(&unmasked, &func, ec_level),
        };
        // Format bits are already in place; rewrite so a forced mask and the
        // search leave identical symbols. Version info comes with the patterns.
        write_format_info(&mut modules, ec_level, mask);

        if debug_enabled() {
            eprintln!(
                "[DEBUG] committed mask {:?} for version {} level {}",
                mask, version, ec_level
            );
        }

        Ok(QrMatrix::new(
            version,
            ec_level,
            mode,
            mask,
            modules,
            func.mask().clone(),
        ))
    }

    /// Encode text as its UTF-8 bytes
    pub fn encode_str(&self, text: &str) -> Result<QrMatrix, EncodeError> {
        self.encode(text.as_bytes())
    }
}
