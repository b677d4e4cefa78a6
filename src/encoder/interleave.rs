use crate::encoder::bitstream::BitBuffer;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{ec_block_info, remainder_bits, total_codewords};
use crate::error::EncodeError;
use crate::models::{ECLevel, Version};

/// One RS block: its data codewords and the EC codewords computed for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub data: Vec<u8>,
    pub ecc: Vec<u8>,
}

/// Split data codewords into RS blocks and compute EC codewords per block.
///
/// Short blocks come first; long blocks carry one extra data codeword.
pub fn split_blocks(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<Block>, EncodeError> {
    let info = ec_block_info(version, ec_level).ok_or_else(|| {
        EncodeError::InvariantViolation(format!(
            "no block table entry for version {} level {}",
            version, ec_level
        ))
    })?;
    let total = total_codewords(version);
    let ecc_total = info.num_blocks * info.ecc_per_block;
    if data.len() + ecc_total != total {
        return Err(EncodeError::InvariantViolation(format!(
            "{} data codewords do not fill version {} level {} ({} expected)",
            data.len(),
            version,
            ec_level,
            total.saturating_sub(ecc_total)
        )));
    }

    let num_long_blocks = total % info.num_blocks;
    let num_short_blocks = info.num_blocks - num_long_blocks;
    let short_len = total / info.num_blocks - info.ecc_per_block;

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut blocks = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for b in 0..info.num_blocks {
        let len = if b < num_short_blocks {
            short_len
        } else {
            short_len + 1
        };
        let chunk = &data[offset..offset + len];
        offset += len;
        blocks.push(Block {
            data: chunk.to_vec(),
            ecc: rs.encode(chunk),
        });
    }
    Ok(blocks)
}

/// Column-wise interleave: codeword i of every block in turn, data first,
/// then EC codewords. Blocks that run out are skipped.
pub fn interleave_blocks(blocks: &[Block]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut result = Vec::with_capacity(total);

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_data {
        for block in blocks {
            if let Some(&cw) = block.data.get(i) {
                result.push(cw);
            }
        }
    }

    let max_ecc = blocks.iter().map(|b| b.ecc.len()).max().unwrap_or(0);
    for i in 0..max_ecc {
        for block in blocks {
            if let Some(&cw) = block.ecc.get(i) {
                result.push(cw);
            }
        }
    }

    result
}

/// Final module stream: interleaved data and EC codewords, MSB first,
/// followed by the version's remainder bits (always zero).
pub fn build_codeword_stream(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> Result<BitBuffer, EncodeError> {
    let blocks = split_blocks(data, version, ec_level)?;
    let codewords = interleave_blocks(&blocks);
    if codewords.len() != total_codewords(version) {
        return Err(EncodeError::InvariantViolation(format!(
            "interleaving produced {} codewords, expected {}",
            codewords.len(),
            total_codewords(version)
        )));
    }

    let remainder = remainder_bits(version);
    let mut stream = BitBuffer::with_capacity(codewords.len() * 8 + remainder);
    for &cw in &codewords {
        stream.append_bits(cw as u32, 8);
    }
    stream.append_bits(0, remainder);
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::data_codewords;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_single_block_passthrough() {
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236];
        let blocks = split_blocks(&data, v(1), ECLevel::Q).unwrap();
        assert_eq!(blocks.len(), 1);
        let codewords = interleave_blocks(&blocks);
        assert_eq!(&codewords[..13], &data);
        assert_eq!(
            &codewords[13..],
            &[168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_short_and_long_blocks() {
        // 5-Q: two blocks of 15 data codewords then two of 16
        let n = data_codewords(v(5), ECLevel::Q).unwrap();
        assert_eq!(n, 62);
        let data: Vec<u8> = (0..n as u8).collect();
        let blocks = split_blocks(&data, v(5), ECLevel::Q).unwrap();
        let lens: Vec<usize> = blocks.iter().map(|b| b.data.len()).collect();
        assert_eq!(lens, vec![15, 15, 16, 16]);
        assert!(blocks.iter().all(|b| b.ecc.len() == 18));

        let codewords = interleave_blocks(&blocks);
        assert_eq!(codewords.len(), 134);
        // first column: first codeword of each block
        assert_eq!(&codewords[..4], &[0, 15, 30, 46]);
        // last data column only exists in the long blocks
        assert_eq!(&codewords[60..62], &[45, 61]);
        // EC codewords follow, first of each block
        assert_eq!(codewords[62], blocks[0].ecc[0]);
        assert_eq!(codewords[65], blocks[3].ecc[0]);
    }

    #[test]
    fn test_stream_includes_remainder_bits() {
        let n = data_codewords(v(2), ECLevel::M).unwrap();
        let stream = build_codeword_stream(&vec![0u8; n], v(2), ECLevel::M).unwrap();
        assert_eq!(stream.len(), 44 * 8 + 7);
    }

    #[test]
    fn test_wrong_data_length_is_error() {
        assert!(matches!(
            split_blocks(&[0u8; 5], v(1), ECLevel::L),
            Err(EncodeError::InvariantViolation(_))
        ));
    }
}
