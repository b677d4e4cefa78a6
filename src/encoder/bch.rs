use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR applied to format info so it is never all zero
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// BCH encoder for QR code format and version info
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format information: EC level and mask plus 10 check bits, masked.
    pub fn encode_format(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let data = ((ec_level.format_bits() as u32) << 3) | mask.bits() as u32;
        let check = Self::remainder(data, FORMAT_GENERATOR, 10);
        (((data << 10) | check) ^ FORMAT_MASK) as u16
    }

    /// 18-bit version information (versions 7-40): version number plus 12 check bits.
    pub fn encode_version(version: Version) -> u32 {
        let data = version.number() as u32;
        let check = Self::remainder(data, VERSION_GENERATOR, 12);
        (data << 12) | check
    }

    /// Polynomial remainder of data * x^degree modulo generator over GF(2).
    fn remainder(data: u32, generator: u32, degree: u32) -> u32 {
        let mut rem = data;
        for _ in 0..degree {
            rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
        }
        rem & ((1 << degree) - 1)
    }
}
