use std::fmt;

use super::BitMatrix;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Create a version, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Version(number))
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Iterate every version from 1 to 40
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels in ascending redundancy order
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Ordinal of the level counting from 1 (L=1, M=2, Q=3, H=4)
    pub fn index(&self) -> u8 {
        *self as u8 + 1
    }

    /// Two-bit code stored in the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Get error correction level from format bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// Parse a level letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'L' => Some(ECLevel::L),
            'M' => Some(ECLevel::M),
            'Q' => Some(ECLevel::Q),
            'H' => Some(ECLevel::H),
            _ => None,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(letter)
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in reference order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Three-bit identifier written into the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Data encoding mode, chosen once for the whole input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9, three per 10 bits
    Numeric,
    /// 0-9, A-Z, space and $%*+-./:, two per 11 bits
    Alphanumeric,
    /// Raw 8-bit bytes
    Byte,
}

impl Mode {
    /// Numeric mode code (1, 2, 4), also the 4-bit mode indicator
    pub fn code(&self) -> u8 {
        match self {
            Mode::Numeric => 1,
            Mode::Alphanumeric => 2,
            Mode::Byte => 4,
        }
    }

    /// Width of the character count indicator for a version
    pub fn char_count_bits(&self, version: Version) -> usize {
        let band = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][band],
            Mode::Alphanumeric => [9, 11, 13][band],
            Mode::Byte => [8, 16, 16][band],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
        };
        f.write_str(name)
    }
}

/// One cell of the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    /// true = black
    pub dark: bool,
    /// Part of a finder/timing/alignment pattern or format/version area
    pub function: bool,
}

impl Module {
    /// Signed visualization value: magnitude 2 for function modules,
    /// 1 for data modules, positive = black
    pub fn signed(&self) -> i8 {
        let magnitude = if self.function { 2 } else { 1 };
        if self.dark { magnitude } else { -magnitude }
    }
}

/// Encoded QR code symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    version: Version,
    ec_level: ECLevel,
    mode: Mode,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
    function: BitMatrix,
}

impl QrMatrix {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mode: Mode,
        mask_pattern: MaskPattern,
        modules: BitMatrix,
        function: BitMatrix,
    ) -> Self {
        Self {
            version,
            ec_level,
            mode,
            mask_pattern,
            modules,
            function,
        }
    }

    /// Side length in modules (17 + 4 * version)
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level written in the format information
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Encoding mode used for the data
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Committed mask pattern
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Color of the module at column `x`, row `y` (false outside the symbol)
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Module at column `x`, row `y`
    pub fn module(&self, x: usize, y: usize) -> Module {
        Module {
            dark: self.modules.get(x, y),
            function: self.function.get(x, y),
        }
    }

    /// Row-major module colors
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|y| (0..self.size()).map(|x| self.is_dark(x, y)).collect())
            .collect()
    }

    /// Plain color plane
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }
}
