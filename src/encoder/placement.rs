/// Zigzag placement of the codeword stream into the data modules
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::function_mask::FunctionMask;
use crate::error::EncodeError;
use crate::models::BitMatrix;

/// Place `stream` into every non-function module, returning the unmasked
/// symbol (function patterns already drawn).
pub fn place_codewords(func: &FunctionMask, stream: &BitBuffer) -> Result<BitMatrix, EncodeError> {
    let order = data_module_order(func);
    if order.len() != stream.len() {
        return Err(EncodeError::InvariantViolation(format!(
            "codeword stream of {} bits does not match {} data modules",
            stream.len(),
            order.len()
        )));
    }

    let mut matrix = func.patterns().clone();
    for (&(x, y), &bit) in order.iter().zip(stream.bits()) {
        matrix.set(x, y, bit);
    }
    Ok(matrix)
}

/// Visit order of the data modules as (x, y).
///
/// Column pairs are walked right to left starting at the bottom-right
/// corner, alternating upward and downward; column 6 holds the vertical
/// timing pattern and is skipped. Within a pair the right module comes first.
pub fn data_module_order(func: &FunctionMask) -> Vec<(usize, usize)> {
    let dimension = func.size();
    let mut order = Vec::with_capacity(func.data_modules_count());
    let mut upward = true;
    let mut col = dimension as i32 - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for step in 0..dimension {
            let row = if upward { dimension - 1 - step } else { step };
            for c in [col as usize, col as usize - 1] {
                if !func.is_function(c, row) {
                    order.push((c, row));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::raw_data_modules;
    use crate::models::Version;

    fn stream_of(len: usize, value: bool) -> BitBuffer {
        let mut stream = BitBuffer::new();
        for _ in 0..len {
            stream.push(value);
        }
        stream
    }

    #[test]
    fn test_zigzag_start() {
        let func = FunctionMask::new(Version::MIN);
        let order = data_module_order(&func);
        assert_eq!(order.len(), 208);
        // bottom-right corner, then its left neighbour, then one row up
        assert_eq!(&order[..4], &[(20, 20), (19, 20), (20, 19), (19, 19)]);
        // the first column pair turns downward after reaching the format area
        assert_eq!(order[24], (18, 9));
        // column 6 is never visited
        assert!(order.iter().all(|&(x, _)| x != 6));
    }

    #[test]
    fn test_fills_every_data_module() {
        for n in [1u8, 2, 7, 14, 40] {
            let version = Version::new(n).unwrap();
            let func = FunctionMask::new(version);
            let count = raw_data_modules(version);
            let matrix = place_codewords(&func, &stream_of(count, true)).unwrap();
            let size = func.size();
            for y in 0..size {
                for x in 0..size {
                    if !func.is_function(x, y) {
                        assert!(matrix.get(x, y));
                    } else {
                        assert_eq!(matrix.get(x, y), func.patterns().get(x, y));
                    }
                }
            }
        }
    }

    #[test]
    fn test_stream_length_mismatch() {
        let func = FunctionMask::new(Version::MIN);
        assert!(place_codewords(&func, &stream_of(207, false)).is_err());
        assert!(place_codewords(&func, &stream_of(209, false)).is_err());
        assert!(place_codewords(&func, &stream_of(208, false)).is_ok());
    }
}
