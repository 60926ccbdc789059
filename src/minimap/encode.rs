//! Packing rescaled masks into glyph rows.

use super::error::EncodeError;
use super::mask::OccupancyMask;
use super::options::EncodingOptions;
use super::rescale::rescale;
use super::symbols::SymbolTable;

/// Encode text lines into minimap rows.
///
/// Builds the occupancy mask, rescales it to the table's block shape within
/// the row/column caps and packs each block into a glyph. Options are
/// validated first; any string content (including an empty slice) is valid
/// input.
///
/// # Example
/// ```
/// use glyphmap::minimap::{encode, EncodingOptions};
///
/// let rows = encode(&["aa", "aa", "aa"], &EncodingOptions::default()).unwrap();
/// assert_eq!(rows, vec!["█".to_string()]);
/// ```
pub fn encode<S: AsRef<str>>(
    lines: &[S],
    options: &EncodingOptions,
) -> Result<Vec<String>, EncodeError> {
    options.validate()?;

    let shape = options.symbols.shape();
    let mask = OccupancyMask::from_lines(lines, options.tab_width);
    let scaled = rescale(&mask, options.n_rows, options.n_cols, shape);

    log::debug!(
        "encoding {} lines: mask {}x{} -> {}x{} cells, block {}",
        lines.len(),
        mask.rows(),
        mask.cols(),
        scaled.rows(),
        scaled.cols(),
        shape
    );

    encode_mask(&scaled, &options.symbols, options.trim_trailing_blank)
}

/// Pack an already rescaled mask into one string per band.
///
/// The mask dimensions must be multiples of the table's block shape.
pub fn encode_mask(
    mask: &OccupancyMask,
    symbols: &SymbolTable,
    trim: bool,
) -> Result<Vec<String>, EncodeError> {
    symbols.validate()?;
    let shape = symbols.shape();

    if mask.rows() % shape.rows() != 0 || mask.cols() % shape.cols() != 0 {
        return Err(EncodeError::InternalInvariant(format!(
            "mask {}x{} is not a whole number of {} blocks",
            mask.rows(),
            mask.cols(),
            shape
        )));
    }

    let bands = mask.rows() / shape.rows();
    let groups = mask.cols() / shape.cols();
    let mut out = Vec::with_capacity(bands);

    for band in 0..bands {
        let mut line = String::with_capacity(groups * 4);
        for group in 0..groups {
            let index = block_index(
                mask,
                band * shape.rows(),
                group * shape.cols(),
                symbols,
            );
            let glyph = symbols.glyph(index).ok_or_else(|| {
                EncodeError::InternalInvariant(format!(
                    "block index {} outside table of {} glyphs",
                    index,
                    symbols.len()
                ))
            })?;
            line.push_str(glyph);
        }
        if trim {
            trim_trailing_blank(&mut line, symbols.blank());
        }
        out.push(line);
    }

    Ok(out)
}

/// Packed pattern of the block whose top-left cell is `(top, left)`.
///
/// Cell `(r, c)` contributes `2^(r * cols + c)`.
fn block_index(mask: &OccupancyMask, top: usize, left: usize, symbols: &SymbolTable) -> usize {
    let shape = symbols.shape();
    let mut index = 0usize;
    for r in 0..shape.rows() {
        for c in 0..shape.cols() {
            if mask.get(top + r, left + c) {
                index |= 1 << (r * shape.cols() + c);
            }
        }
    }
    index
}

/// Remove trailing whitespace and trailing copies of the blank glyph.
pub fn trim_trailing_blank(line: &mut String, blank: &str) {
    loop {
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
        if !blank.is_empty() && line.ends_with(blank) {
            let len = line.len() - blank.len();
            line.truncate(len);
        } else {
            break;
        }
    }
}
