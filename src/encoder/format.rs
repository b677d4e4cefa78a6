/// Format and version information placement
use crate::encoder::bch::BchEncoder;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Write both copies of the 15-bit format information.
///
/// Copy one wraps the top-left finder: bits 0-7 down column 8 (skipping the
/// timing row), bits 8-14 leftward along row 8. Copy two splits bits 0-7
/// along row 8 under the top-right finder and bits 8-14 down column 8 beside
/// the bottom-left finder.
pub fn write_format_info(matrix: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let size = matrix.width();
    let bits = BchEncoder::encode_format(ec_level, mask);
    let bit = |i: usize| (bits >> i) & 1 != 0;

    for i in 0..6 {
        matrix.set(8, i, bit(i));
    }
    matrix.set(8, 7, bit(6));
    matrix.set(8, 8, bit(7));
    matrix.set(7, 8, bit(8));
    for i in 9..15 {
        matrix.set(14 - i, 8, bit(i));
    }

    for i in 0..8 {
        matrix.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        matrix.set(8, size - 15 + i, bit(i));
    }
    // Dark module sits between the two halves of copy two
    matrix.set(8, size - 8, true);
}

/// Write both copies of the 18-bit version information (versions 7+).
pub fn write_version_info(matrix: &mut BitMatrix, version: Version) {
    if version.number() < 7 {
        return;
    }
    let size = matrix.width();
    let bits = BchEncoder::encode_version(version);
    for i in 0..18 {
        let bit = (bits >> i) & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        matrix.set(a, b, bit);
        matrix.set(b, a, bit);
    }
}

/// Read back the first format copy (bit 14 first)
pub fn read_format_bits(matrix: &BitMatrix) -> u16 {
    let mut positions: Vec<(usize, usize)> = Vec::with_capacity(15);
    positions.extend((0..6).map(|i| (8, i)));
    positions.extend([(8, 7), (8, 8), (7, 8)]);
    positions.extend((9..15).map(|i| (14 - i, 8)));
    positions
        .iter()
        .enumerate()
        .fold(0u16, |acc, (i, &(x, y))| acc | ((matrix.get(x, y) as u16) << i))
}
