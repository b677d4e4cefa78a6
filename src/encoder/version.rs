/// Version and error correction level resolution
use crate::debug::debug_enabled;
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::tables::data_capacity_bits;
use crate::error::EncodeError;
use crate::models::{ECLevel, Mode, Version};

/// Mode indicator width
const MODE_INDICATOR_BITS: usize = 4;

/// Outcome of version/level resolution, everything the bitstream header needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolution {
    pub version: Version,
    pub ec_level: ECLevel,
    pub mode: Mode,
    /// 4-bit mode indicator
    pub mode_indicator: BitBuffer,
    /// Character count in the version-dependent indicator width
    pub length_indicator: BitBuffer,
}

impl VersionResolution {
    /// Numeric mode code (1, 2 or 4)
    pub fn mode_code(&self) -> u8 {
        self.mode.code()
    }

    /// Mode indicator followed by the length indicator
    pub fn header(&self) -> BitBuffer {
        let mut header = self.mode_indicator.clone();
        header.extend(&self.length_indicator);
        header
    }
}

/// Total bits for header and data of `len` characters at `version`.
///
/// `None` when the count does not fit the character count indicator.
pub fn required_bits(mode: Mode, len: usize, version: Version) -> Option<usize> {
    let count_bits = mode.char_count_bits(version);
    if len >= 1usize << count_bits {
        return None;
    }
    Some(MODE_INDICATOR_BITS + count_bits + mode.data_bits(len))
}

/// Smallest version holding `len` characters at `ec_level`.
pub fn min_version(mode: Mode, len: usize, ec_level: ECLevel) -> Option<Version> {
    Version::all().find(|&version| {
        match (
            required_bits(mode, len, version),
            data_capacity_bits(version, ec_level),
        ) {
            (Some(needed), Some(capacity)) => needed <= capacity,
            _ => false,
        }
    })
}

/// Resolve the version and level for `len` characters in `mode`.
///
/// With a requested level, the smallest version at that level wins. Without
/// one, every level is sized; the smallest of those versions is kept, and the
/// highest level that still fits in it is chosen.
pub fn resolve_version(
    mode: Mode,
    len: usize,
    requested: Option<ECLevel>,
) -> Result<VersionResolution, EncodeError> {
    let levels: &[ECLevel] = match &requested {
        Some(level) => std::slice::from_ref(level),
        None => &ECLevel::ALL,
    };

    let mut best: Option<(Version, ECLevel)> = None;
    for &level in levels {
        if let Some(version) = min_version(mode, len, level) {
            match best {
                Some((best_version, _)) if version > best_version => {}
                _ => best = Some((version, level)),
            }
        }
    }

    let (version, ec_level) = best.ok_or(EncodeError::CapacityExceeded {
        mode,
        length: len,
        ec_level: requested,
    })?;

    let mut mode_indicator = BitBuffer::new();
    mode_indicator.append_bits(mode.code() as u32, MODE_INDICATOR_BITS);
    let mut length_indicator = BitBuffer::new();
    length_indicator.append_bits(len as u32, mode.char_count_bits(version));

    if debug_enabled() {
        eprintln!(
            "[DEBUG] resolved {} chars in {} mode to version {} level {}",
            len, mode, version, ec_level
        );
    }

    Ok(VersionResolution {
        version,
        ec_level,
        mode,
        mode_indicator,
        length_indicator,
    })
}
