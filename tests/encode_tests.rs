//! Integration tests for QR code encoding
//!
//! These tests build complete symbols through the public API and read them
//! back module by module: format and version information, function patterns
//! and the placed codeword stream.

use rust_qrencode::encoder::bch::BchEncoder;
use rust_qrencode::encoder::format::read_format_bits;
use rust_qrencode::encoder::function_mask::FunctionMask;
use rust_qrencode::encoder::mask::{apply_mask, penalty_score};
use rust_qrencode::encoder::placement::data_module_order;
use rust_qrencode::encoder::tables::{remainder_bits, total_codewords};
use rust_qrencode::{
    ECLevel, EncodeError, Encoder, MaskPattern, Mode, QrMatrix, Version, encode, encode_bytes,
};

/// Unmask a symbol and read its codewords back in placement order
fn read_codewords(qr: &QrMatrix) -> Vec<u8> {
    let func = FunctionMask::new(qr.version());
    let mut modules = qr.modules().clone();
    apply_mask(&mut modules, qr.mask_pattern(), &func);
    let bits: Vec<bool> = data_module_order(&func)
        .into_iter()
        .map(|(x, y)| modules.get(x, y))
        .collect();
    bits.chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

fn assert_function_patterns(qr: &QrMatrix) {
    let size = qr.size();
    // finder corners and centers
    for (cx, cy) in [(3, 3), (size - 4, 3), (3, size - 4)] {
        assert!(qr.is_dark(cx, cy));
        assert!(qr.is_dark(cx - 3, cy - 3));
        assert!(!qr.is_dark(cx - 2, cy - 2));
    }
    // separators
    assert!(!qr.is_dark(7, 7));
    assert!(!qr.is_dark(size - 8, 7));
    assert!(!qr.is_dark(7, size - 8));
    // timing
    for i in 8..size - 8 {
        assert_eq!(qr.is_dark(i, 6), i % 2 == 0, "row timing at {}", i);
        assert_eq!(qr.is_dark(6, i), i % 2 == 0, "column timing at {}", i);
    }
    // dark module
    assert!(qr.is_dark(8, size - 8));
}

#[test]
fn test_hello_world_symbol() {
    let qr = Encoder::new()
        .mask(MaskPattern::Pattern6)
        .encode_str("HELLO WORLD")
        .unwrap();
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.ec_level(), ECLevel::Q);
    assert_eq!(qr.mode(), Mode::Alphanumeric);
    assert_eq!(qr.mask_pattern(), MaskPattern::Pattern6);
    assert_eq!(
        read_format_bits(qr.modules()),
        BchEncoder::encode_format(ECLevel::Q, MaskPattern::Pattern6)
    );
    assert_eq!(read_format_bits(qr.modules()), 0b010_1110_1101_1010);

    let codewords = read_codewords(&qr);
    assert_eq!(
        codewords,
        vec![
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, // data
            168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16, // ec
        ]
    );
    assert_function_patterns(&qr);
}

/// "HELLO WORLD" at 1-Q with mask 6, row by row ('#' = dark)
const HELLO_WORLD_1Q_MASK6: [&str; 21] = [
    "#######....#..#######",
    "#.....#.##..#.#.....#",
    "#.###.#..#.##.#.###.#",
    "#.###.#.#####.#.###.#",
    "#.###.#.##.#..#.###.#",
    "#.....#..#..#.#.....#",
    "#######.#.#.#.#######",
    "........##.##........",
    ".#.####.##..###.##.#.",
    "#.####.#....####.###.",
    "..#.#.##...#..##.....",
    "#.##.#...#.##...##...",
    "##.########.###.#####",
    "........#...#..#.#...",
    "#######..##..##..####",
    "#.....#.#.#..#..#.###",
    "#.###.#.##.#..#...###",
    "#.###.#.#.###...#.#..",
    "#.###.#..#....#....##",
    "#.....#.###..###..##.",
    "#######..#.#.......#.",
];

#[test]
fn test_hello_world_matches_reference_matrix() {
    let qr = Encoder::new()
        .ec_level(ECLevel::Q)
        .mask(MaskPattern::Pattern6)
        .encode_str("HELLO WORLD")
        .unwrap();
    assert_eq!(qr.size(), HELLO_WORLD_1Q_MASK6.len());
    for (y, row) in HELLO_WORLD_1Q_MASK6.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            assert_eq!(qr.is_dark(x, y), c == '#', "module ({}, {})", x, y);
        }
    }
}

#[test]
fn test_empty_input_codewords() {
    let qr = encode("", None).unwrap();
    assert_eq!(qr.mode(), Mode::Byte);
    assert_eq!(qr.ec_level(), ECLevel::H);
    // byte indicator, zero count, terminator, then pad codewords
    assert_eq!(
        &read_codewords(&qr)[..9],
        &[0x40, 0x00, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC]
    );
}

#[test]
fn test_searched_mask_has_lowest_penalty_from_version_7() {
    for len in [150usize, 372, 631] {
        let data: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
        let chosen = Encoder::new().ec_level(ECLevel::L).encode(&data).unwrap();
        assert!(chosen.version().number() >= 7);

        let scores: Vec<u32> = MaskPattern::ALL
            .iter()
            .map(|&mask| {
                let qr = Encoder::new()
                    .ec_level(ECLevel::L)
                    .mask(mask)
                    .encode(&data)
                    .unwrap();
                penalty_score(qr.modules()).total()
            })
            .collect();
        let best = scores.iter().copied().min().unwrap();
        let first_best = scores.iter().position(|&s| s == best).unwrap();
        assert_eq!(
            chosen.mask_pattern(),
            MaskPattern::ALL[first_best],
            "len {} version {}: scores {:?}",
            len,
            chosen.version(),
            scores
        );
    }
}

#[test]
fn test_searched_mask_is_written_to_format_info() {
    for text in ["HELLO WORLD", "01234567", "hello, world", ""] {
        let qr = encode(text, None).unwrap();
        assert_eq!(
            read_format_bits(qr.modules()),
            BchEncoder::encode_format(qr.ec_level(), qr.mask_pattern()),
            "format for {:?}",
            text
        );
    }
}

#[test]
fn test_version_7_info() {
    // 150 bytes: too long for 6-L (134), fits 7-L (154)
    let data = vec![b'x'; 150];
    let qr = Encoder::new().ec_level(ECLevel::L).encode(&data).unwrap();
    assert_eq!(qr.version().number(), 7);
    assert_eq!(qr.size(), 45);

    let size = qr.size();
    let mut top_right = 0u32;
    let mut bottom_left = 0u32;
    for i in 0..18 {
        top_right |= (qr.is_dark(size - 11 + i % 3, i / 3) as u32) << i;
        bottom_left |= (qr.is_dark(i / 3, size - 11 + i % 3) as u32) << i;
    }
    assert_eq!(top_right, 0x07C94);
    assert_eq!(bottom_left, 0x07C94);
    assert_function_patterns(&qr);
}

#[test]
fn test_multi_block_data_survives_placement() {
    // 63 alphanumeric characters land in 4-Q: two blocks of 24
    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789 $%*+-./:";
    let qr = Encoder::new()
        .ec_level(ECLevel::Q)
        .mask(MaskPattern::Pattern3)
        .encode_str(text)
        .unwrap();
    let codewords = read_codewords(&qr);
    assert_eq!(codewords.len(), total_codewords(qr.version()));

    // first data codeword of block 0 starts with the alphanumeric indicator
    assert_eq!(codewords[0] >> 4, 0b0010);
}

#[test]
fn test_data_modules_match_codeword_capacity() {
    for n in [1u8, 2, 6, 7, 10, 27, 40] {
        let version = Version::new(n).unwrap();
        let func = FunctionMask::new(version);
        assert_eq!(
            func.data_modules_count(),
            total_codewords(version) * 8 + remainder_bits(version),
            "version {}",
            n
        );
    }
}

#[test]
fn test_function_patterns_across_versions() {
    for len in [1usize, 40, 300, 1000, 2000] {
        let data = vec![0xA5u8; len];
        let qr = encode_bytes(&data, Some(ECLevel::M)).unwrap();
        assert_eq!(qr.size(), 17 + 4 * qr.version().number() as usize);
        assert_function_patterns(&qr);
    }
}

#[test]
fn test_forced_mode_mismatch() {
    let err = Encoder::new().mode(Mode::Alphanumeric).encode_str("hello");
    assert_eq!(
        err.unwrap_err(),
        EncodeError::ModeMismatch {
            mode: Mode::Alphanumeric
        }
    );

    let qr = Encoder::new().mode(Mode::Byte).encode_str("HELLO").unwrap();
    assert_eq!(qr.mode(), Mode::Byte);
}

#[test]
fn test_capacity_limits_at_version_40() {
    let max_bytes = vec![b'a'; 2953];
    let qr = encode_bytes(&max_bytes, Some(ECLevel::L)).unwrap();
    assert_eq!(qr.version(), Version::MAX);
    assert_eq!(qr.size(), 177);

    let too_many = vec![b'a'; 2954];
    assert_eq!(
        encode_bytes(&too_many, Some(ECLevel::L)).unwrap_err(),
        EncodeError::CapacityExceeded {
            mode: Mode::Byte,
            length: 2954,
            ec_level: Some(ECLevel::L),
        }
    );
    assert!(matches!(
        encode_bytes(&too_many, None),
        Err(EncodeError::CapacityExceeded { ec_level: None, .. })
    ));

    let digits = "7".repeat(7089);
    let qr = encode(&digits, Some(ECLevel::L)).unwrap();
    assert_eq!(qr.mode(), Mode::Numeric);
    assert_eq!(qr.version(), Version::MAX);
    assert!(encode(&"7".repeat(7090), Some(ECLevel::L)).is_err());
}

#[test]
fn test_auto_level_prefers_strongest_in_smallest_version() {
    let qr = encode("HELLO WORLD", None).unwrap();
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.ec_level(), ECLevel::Q);
    assert_eq!(qr.ec_level().index(), 3);

    // 17 bytes fit 1-L only
    let qr = encode("abcdefghijklmnopq", None).unwrap();
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.ec_level(), ECLevel::L);
}

#[test]
fn test_encoding_is_deterministic() {
    let a = encode("determinism check", None).unwrap();
    let b = encode("determinism check", None).unwrap();
    assert_eq!(a, b);
}
