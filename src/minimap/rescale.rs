//! Rescaling occupancy masks to whole blocks with OR-aggregation.
//!
//! Each axis is scaled on its own. Source index `i` lands on output index
//! `floor(i * out / src)`, the same linear map whether the axis shrinks or
//! grows. An output cell has ink if any source cell that lands on it has
//! ink; output cells nothing lands on stay blank.

use super::mask::OccupancyMask;
use super::BlockShape;

/// Output size along one axis.
///
/// Smallest multiple of `block` covering `src` cells, limited to `cap`
/// blocks when a cap is given. A zero `block` yields zero.
pub fn target_len(src: usize, block: usize, cap: Option<usize>) -> usize {
    if block == 0 {
        return 0;
    }
    let blocks = src.div_ceil(block);
    let blocks = match cap {
        Some(cap) => blocks.min(cap),
        None => blocks,
    };
    blocks * block
}

/// Map every source index on one axis to its output index.
///
/// Returns an empty map when either side is empty.
pub fn axis_map(src: usize, out: usize) -> Vec<usize> {
    if src == 0 || out == 0 {
        return Vec::new();
    }
    (0..src).map(|i| i * out / src).collect()
}

/// Rescale `mask` so that its dimensions are multiples of `shape`, with at
/// most `max_rows` x `max_cols` blocks.
pub fn rescale(
    mask: &OccupancyMask,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
    shape: BlockShape,
) -> OccupancyMask {
    let out_rows = target_len(mask.rows(), shape.rows(), max_rows);
    let out_cols = target_len(mask.cols(), shape.cols(), max_cols);

    log::trace!(
        "rescale {}x{} -> {}x{} (block {})",
        mask.rows(),
        mask.cols(),
        out_rows,
        out_cols,
        shape
    );

    let mut out = OccupancyMask::blank(out_rows, out_cols);
    if out.is_empty() {
        return out;
    }

    let row_map = axis_map(mask.rows(), out_rows);
    let col_map = axis_map(mask.cols(), out_cols);

    for (i, &oi) in row_map.iter().enumerate() {
        for (j, &oj) in col_map.iter().enumerate() {
            if mask.get(i, j) {
                out.set(oi, oj, true);
            }
        }
    }

    out
}
