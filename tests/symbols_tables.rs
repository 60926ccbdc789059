//! Checks every built-in symbol table against the pattern bit order.
//!
//! Cell `(r, c)` of a block has weight `2^(r * cols + c)`. Each glyph is
//! decoded back into the cells it draws and compared with its index.

use glyphmap::minimap::symbols::{self, SymbolFamily};
use glyphmap::minimap::*;

fn shape(rows: usize, cols: usize) -> BlockShape {
    BlockShape::new(rows, cols).unwrap()
}

/// Set of inked cells for a pattern index.
fn cells(index: usize, s: BlockShape) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for r in 0..s.rows() {
        for c in 0..s.cols() {
            if index & (1 << (r * s.cols() + c)) != 0 {
                out.push((r, c));
            }
        }
    }
    out
}

/// Cells drawn by a braille glyph, from its dot numbering.
fn braille_cells(glyph: &str) -> Vec<(usize, usize)> {
    // Dots 1-8 in codepoint bit order
    const DOTS: [(usize, usize); 8] = [
        (0, 0),
        (1, 0),
        (2, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 0),
        (3, 1),
    ];
    let c = glyph.chars().next().unwrap() as u32;
    assert!((0x2800..=0x28FF).contains(&c), "{glyph:?} is not braille");
    let bits = c - 0x2800;
    let mut out: Vec<(usize, usize)> = DOTS
        .iter()
        .enumerate()
        .filter(|(bit, _)| bits & (1 << bit) != 0)
        .map(|(_, &cell)| cell)
        .collect();
    out.sort();
    out
}

#[test]
fn test_every_table_has_expected_length_and_blank() {
    for &(family, s) in symbols::catalog() {
        let table = symbols::get(family, s).unwrap();
        assert_eq!(table.len(), 1 << (s.rows() * s.cols()), "{family} {s}");
        assert_eq!(table.shape(), s);
        let blank = OccupancyMask::blank(s.rows(), s.cols());
        let out = encode_mask(&blank, &table, false).unwrap();
        assert_eq!(out, vec![table.blank()], "{family} {s}");
    }
}

#[test]
fn test_every_table_encodes_full_block_as_last_glyph() {
    for &(family, s) in symbols::catalog() {
        let table = symbols::get(family, s).unwrap();
        let mut full = OccupancyMask::blank(s.rows(), s.cols());
        for r in 0..s.rows() {
            for c in 0..s.cols() {
                full.set(r, c, true);
            }
        }
        let out = encode_mask(&full, &table, false).unwrap();
        assert_eq!(out, vec![table.filled()], "{family} {s}");
    }
}

#[test]
fn test_encoder_uses_row_major_lsb_first() {
    for &(family, s) in symbols::catalog() {
        let table = symbols::get(family, s).unwrap();
        for index in 0..table.len() {
            let mut mask = OccupancyMask::blank(s.rows(), s.cols());
            for (r, c) in cells(index, s) {
                mask.set(r, c, true);
            }
            let out = encode_mask(&mask, &table, false).unwrap();
            assert_eq!(out[0], table.glyph(index).unwrap(), "{family} {s} #{index}");
        }
    }
}

#[test]
fn test_block_half_tables() {
    let t = symbols::get(SymbolFamily::Block, shape(1, 2)).unwrap();
    assert_eq!(t.glyphs(), &[" ", "▌", "▐", "█"]);

    let t = symbols::get(SymbolFamily::Block, shape(2, 1)).unwrap();
    assert_eq!(t.glyphs(), &[" ", "▀", "▄", "█"]);
}

#[test]
fn test_block_quadrants_match_cells() {
    // Quadrant glyphs by the cells they fill
    let drawn: &[(&str, &[(usize, usize)])] = &[
        (" ", &[]),
        ("▘", &[(0, 0)]),
        ("▝", &[(0, 1)]),
        ("▖", &[(1, 0)]),
        ("▗", &[(1, 1)]),
        ("▀", &[(0, 0), (0, 1)]),
        ("▄", &[(1, 0), (1, 1)]),
        ("▌", &[(0, 0), (1, 0)]),
        ("▐", &[(0, 1), (1, 1)]),
        ("▚", &[(0, 0), (1, 1)]),
        ("▞", &[(0, 1), (1, 0)]),
        ("▛", &[(0, 0), (0, 1), (1, 0)]),
        ("▜", &[(0, 0), (0, 1), (1, 1)]),
        ("▙", &[(0, 0), (1, 0), (1, 1)]),
        ("▟", &[(0, 1), (1, 0), (1, 1)]),
        ("█", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    ];
    let s = shape(2, 2);
    let table = symbols::get(SymbolFamily::Block, s).unwrap();
    for index in 0..table.len() {
        let glyph = table.glyph(index).unwrap();
        let (_, expected) = drawn.iter().find(|(g, _)| *g == glyph).unwrap();
        let mut expected = expected.to_vec();
        expected.sort();
        assert_eq!(cells(index, s), expected, "quadrant #{index} {glyph:?}");
    }
}

#[test]
fn test_block_sextants_follow_unicode_order() {
    let table = symbols::get(SymbolFamily::Block, shape(3, 2)).unwrap();
    assert_eq!(table.glyph(0), Some(" "));
    assert_eq!(table.glyph(0b010101), Some("▌"));
    assert_eq!(table.glyph(0b101010), Some("▐"));
    assert_eq!(table.glyph(63), Some("█"));

    // Unicode lists sextants 1..62 in ascending pattern order, minus the two halves
    let mut next = 0x1FB00;
    for index in (1..63).filter(|&i| i != 0b010101 && i != 0b101010) {
        let expected = char::from_u32(next).unwrap().to_string();
        assert_eq!(table.glyph(index), Some(expected.as_str()), "sextant #{index}");
        next += 1;
    }
    assert_eq!(next, 0x1FB3C);
}

#[test]
fn test_dot_tables_match_cells() {
    for rows in [3, 4] {
        let s = shape(rows, 2);
        let table = symbols::get(SymbolFamily::Dot, s).unwrap();
        for index in 0..table.len() {
            let glyph = table.glyph(index).unwrap();
            assert_eq!(braille_cells(glyph), cells(index, s), "dot {s} #{index}");
        }
    }
}

#[test]
fn test_shade_tables() {
    for s in [shape(1, 2), shape(2, 1)] {
        let table = symbols::get(SymbolFamily::Shade, s).unwrap();
        assert_eq!(table.glyphs(), &[" ", "▒", "▒", "▓"]);
    }
}

#[test]
fn test_unsupported_pairs_are_configuration_errors() {
    for (family, s) in [
        (SymbolFamily::Block, shape(4, 2)),
        (SymbolFamily::Dot, shape(1, 2)),
        (SymbolFamily::Shade, shape(2, 2)),
        (SymbolFamily::Block, shape(1, 1)),
    ] {
        let err = symbols::get(family, s).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Configuration(ConfigurationError::UnsupportedShape { family, shape: s })
        );
    }
}
