/// Mask application, penalty scoring and mask selection
use rayon::prelude::*;

use crate::debug::debug_enabled;
use crate::encoder::config::parallel_masks;
use crate::encoder::format::write_format_info;
use crate::encoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Dark-light-dark-dark-dark-light-dark
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// XOR the mask pattern into every data module. Applying twice restores
/// the input.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Penalty breakdown for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalty {
    /// Runs of five or more same-colored modules
    pub runs: u32,
    /// 2x2 blocks of one color
    pub blocks: u32,
    /// Finder look-alikes with four light modules on one side
    pub finder_like: u32,
    /// Dark ratio away from 50%
    pub balance: u32,
}

impl Penalty {
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Score a complete symbol with the four penalty rules.
pub fn penalty_score(matrix: &BitMatrix) -> Penalty {
    let size = matrix.width();
    let mut penalty = Penalty::default();

    for i in 0..size {
        let row: Vec<bool> = (0..size).map(|x| matrix.get(x, i)).collect();
        let col: Vec<bool> = (0..size).map(|y| matrix.get(i, y)).collect();
        for line in [&row, &col] {
            penalty.runs += run_penalty(line);
            penalty.finder_like += finder_penalty(line);
        }
    }

    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let c = matrix.get(x, y);
            if c == matrix.get(x + 1, y) && c == matrix.get(x, y + 1) && c == matrix.get(x + 1, y + 1)
            {
                penalty.blocks += PENALTY_N2;
            }
        }
    }

    let total = (size * size) as i64;
    if total > 0 {
        let dark = matrix.count_ones() as i64;
        // Smallest k with (45 - 5k)% <= dark <= (55 + 5k)%
        let k = (((dark * 20 - total * 10).abs() + total - 1) / total - 1).max(0);
        penalty.balance = k as u32 * PENALTY_N4;
    }

    penalty
}

fn run_penalty(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut run = 0;
    let mut color = None;
    for &module in line {
        if color == Some(module) {
            run += 1;
        } else {
            if run >= 5 {
                score += PENALTY_N1 + (run - 5);
            }
            color = Some(module);
            run = 1;
        }
    }
    if run >= 5 {
        score += PENALTY_N1 + (run - 5);
    }
    score
}

/// Modules outside the symbol count as light.
fn finder_penalty(line: &[bool]) -> u32 {
    let len = line.len();
    let light = |from: isize, to: isize| {
        (from.max(0)..to.min(len as isize)).all(|i| !line[i as usize])
    };
    let mut score = 0;
    for start in 0..len.saturating_sub(FINDER_LIKE.len() - 1) {
        if line[start..start + FINDER_LIKE.len()] != FINDER_LIKE {
            continue;
        }
        let s = start as isize;
        if light(s - 4, s) || light(s + 7, s + 11) {
            score += PENALTY_N3;
        }
    }
    score
}

/// Try all eight masks on the unmasked symbol and keep the lowest penalty.
///
/// Format information for each candidate is written before scoring. Ties go
/// to the lower mask index.
pub fn select_mask(
    unmasked: &BitMatrix,
    func: &FunctionMask,
    ec_level: ECLevel,
) -> (MaskPattern, BitMatrix) {
    let evaluate = |mask: MaskPattern| {
        let candidate = masked_candidate(unmasked, func, ec_level, mask);
        let penalty = penalty_score(&candidate);
        if debug_enabled() {
            eprintln!("[DEBUG] mask {:?}: penalty {:?}", mask, penalty);
        }
        (penalty.total(), mask, candidate)
    };

    let candidates: Vec<(u32, MaskPattern, BitMatrix)> = if parallel_masks() {
        MaskPattern::ALL.par_iter().map(|&m| evaluate(m)).collect()
    } else {
        MaskPattern::ALL.iter().map(|&m| evaluate(m)).collect()
    };

    // min_by_key keeps the first of equal minimums
    match candidates.into_iter().min_by_key(|(score, _, _)| *score) {
        Some((_, mask, matrix)) => (mask, matrix),
        // ALL is never empty
        None => {
            let mask = MaskPattern::Pattern0;
            (mask, masked_candidate(unmasked, func, ec_level, mask))
        }
    }
}

/// Unmasked symbol with `mask` applied and matching format information.
pub fn masked_candidate(
    unmasked: &BitMatrix,
    func: &FunctionMask,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> BitMatrix {
    let mut candidate = unmasked.clone();
    apply_mask(&mut candidate, mask, func);
    write_format_info(&mut candidate, ec_level, mask);
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_apply_mask_skips_function_modules() {
        let func = FunctionMask::new(Version::MIN);
        let mut matrix = func.patterns().clone();
        apply_mask(&mut matrix, MaskPattern::Pattern0, &func);

        // Position (10,10): (10+10)%2=0, data module, toggled
        assert!(matrix.get(10, 10));
        // (11,10) is not selected by pattern 0
        assert!(!matrix.get(11, 10));
        // finder module untouched
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 1));

        apply_mask(&mut matrix, MaskPattern::Pattern0, &func);
        assert_eq!(&matrix, func.patterns());
    }

    #[test]
    fn test_run_penalty() {
        assert_eq!(run_penalty(&[true; 4]), 0);
        assert_eq!(run_penalty(&[true; 5]), 3);
        assert_eq!(run_penalty(&[false; 7]), 5);
        let mut line = vec![true; 6];
        line.extend([false; 5]);
        assert_eq!(run_penalty(&line), 4 + 3);
    }

    #[test]
    fn test_finder_penalty() {
        // pattern at the start of a line: the outside counts as light
        let mut line = FINDER_LIKE.to_vec();
        line.extend([true; 4]);
        assert_eq!(finder_penalty(&line), 40);

        // light run on the right
        let mut line = vec![true, true, true, true];
        line.extend(FINDER_LIKE);
        line.extend([false; 4]);
        assert_eq!(finder_penalty(&line), 40);

        // no light run on either side
        let mut line = vec![true; 4];
        line.extend(FINDER_LIKE);
        line.extend([true, false, true, true]);
        assert_eq!(finder_penalty(&line), 0);
    }

    #[test]
    fn test_balance_penalty() {
        // all light 21x21: 100% off balance -> k = 9
        let matrix = BitMatrix::square(21);
        let penalty = penalty_score(&matrix);
        assert_eq!(penalty.balance, 90);
        // 21 rows and 21 columns, each a run of 21
        assert_eq!(penalty.runs, 42 * (3 + 16));
        assert_eq!(penalty.blocks, 400 * 3);
        assert_eq!(penalty.finder_like, 0);
    }

    #[test]
    fn test_select_mask_is_deterministic() {
        let func = FunctionMask::new(Version::MIN);
        let unmasked = func.patterns().clone();
        let (first_mask, first) = select_mask(&unmasked, &func, ECLevel::M);
        for _ in 0..4 {
            let (mask, matrix) = select_mask(&unmasked, &func, ECLevel::M);
            assert_eq!(mask, first_mask);
            assert_eq!(matrix, first);
        }
    }

    #[test]
    fn test_selected_mask_has_lowest_penalty() {
        let func = FunctionMask::new(Version::new(3).unwrap());
        let unmasked = func.patterns().clone();
        let (mask, matrix) = select_mask(&unmasked, &func, ECLevel::L);
        let best = penalty_score(&matrix).total();
        for candidate in MaskPattern::ALL {
            let score = penalty_score(&masked_candidate(&unmasked, &func, ECLevel::L, candidate));
            assert!(score.total() >= best);
            if score.total() == best {
                assert!(candidate >= mask);
            }
        }
    }
}
