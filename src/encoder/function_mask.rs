use crate::encoder::format::write_version_info;
use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{BitMatrix, Version};

/// Function modules of a symbol: which modules are reserved and the colors
/// of the fixed patterns drawn into them.
/// In `mask`, true = function module (not data), false = data module.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
    patterns: BitMatrix,
    version: Version,
}

impl FunctionMask {
    /// Draw finders, timing, alignment, reserved format area, version
    /// information and the dark module, in that order.
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut func = Self {
            mask: BitMatrix::square(size),
            patterns: BitMatrix::square(size),
            version,
        };

        // Finder patterns + separators
        func.draw_finder(3, 3);
        func.draw_finder(size - 4, 3);
        func.draw_finder(3, size - 4);

        // Timing patterns (row 6 and column 6) between the separators
        for i in 8..size - 8 {
            func.set_function(6, i, i % 2 == 0);
            func.set_function(i, 6, i % 2 == 0);
        }

        // Alignment patterns, skipping the three finder corners
        let align = alignment_pattern_positions(version);
        let last = align.len().saturating_sub(1);
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                let on_finder = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
                if !on_finder {
                    func.draw_alignment(cx, cy);
                }
            }
        }

        // Format info areas
        for i in 0..9 {
            func.reserve(8, i);
            func.reserve(i, 8);
        }
        for i in 0..8 {
            func.reserve(size - 1 - i, 8);
        }
        for i in 0..7 {
            func.reserve(8, size - 1 - i);
        }

        // Version info (v7+)
        if version.number() >= 7 {
            for dy in 0..6 {
                for dx in 0..3 {
                    func.reserve(size - 11 + dx, dy);
                    func.reserve(dy, size - 11 + dx);
                }
            }
            write_version_info(&mut func.patterns, version);
        }

        // Dark module
        func.set_function(8, size - 8, true);

        func
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Function flags
    pub fn mask(&self) -> &BitMatrix {
        &self.mask
    }

    /// Colors of the function modules; data modules are light
    pub fn patterns(&self) -> &BitMatrix {
        &self.patterns
    }

    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.mask.set(x, y, true);
        self.patterns.set(x, y, dark);
    }

    /// Mark as function without touching the color
    fn reserve(&mut self, x: usize, y: usize) {
        self.mask.set(x, y, true);
    }

    /// 7x7 finder centered on (cx, cy) plus its one-module light separator,
    /// clipped to the symbol.
    fn draw_finder(&mut self, cx: usize, cy: usize) {
        let size = self.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    /// 5x5 alignment pattern centered on (cx, cy)
    fn draw_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }
}
