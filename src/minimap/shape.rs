//! Block shapes: how many mask cells are packed into one glyph.

use std::fmt;
use std::str::FromStr;

use super::error::{ConfigurationError, EncodeError};

/// Largest number of cells a single glyph may encode.
///
/// A table for `n` cells holds `2^n` glyphs, so this bounds table size at 65536.
pub const MAX_BLOCK_BITS: usize = 16;

/// Rectangle of mask cells summarized by one output glyph.
///
/// `rows` is the number of mask rows per glyph and `cols` the number of mask
/// columns. The textual form is `"{rows}x{cols}"`, so the default sextant
/// shape (three rows of two cells) is `3x2`.
///
/// Both dimensions are non-zero and `rows * cols <= MAX_BLOCK_BITS`. Outside
/// this crate shapes only come from [`BlockShape::new`] or parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockShape {
    rows: usize,
    cols: usize,
}

impl BlockShape {
    /// Shape for the built-in tables. Callers pass non-zero dimensions
    /// within [`MAX_BLOCK_BITS`].
    pub(crate) const fn fixed(rows: usize, cols: usize) -> Self {
        BlockShape { rows, cols }
    }

    /// Create a shape, rejecting zero dimensions and shapes whose table would
    /// be unreasonably large.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EncodeError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::EmptyBlockShape { rows, cols }.into());
        }
        let shape = BlockShape { rows, cols };
        let bits = rows.saturating_mul(cols);
        if bits > MAX_BLOCK_BITS {
            return Err(ConfigurationError::ShapeTooLarge {
                shape,
                bits,
                max: MAX_BLOCK_BITS,
            }
            .into());
        }
        Ok(shape)
    }

    /// Mask rows per glyph.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Mask columns per glyph.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (bits) in one block.
    pub fn bits(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of glyphs a symbol table of this shape must contain.
    pub fn table_len(&self) -> usize {
        1usize << self.bits()
    }
}

impl fmt::Display for BlockShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for BlockShape {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EncodeError::from(ConfigurationError::InvalidShapeId(s.to_string()));

        let (rows, cols) = s.trim().split_once(|c: char| c == 'x' || c == 'X').ok_or_else(invalid)?;
        let rows: usize = rows.trim().parse().map_err(|_| invalid())?;
        let cols: usize = cols.trim().parse().map_err(|_| invalid())?;
        BlockShape::new(rows, cols)
    }
}
