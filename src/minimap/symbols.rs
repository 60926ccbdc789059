//! Symbol tables and the built-in table registry.
//!
//! A symbol table maps every packed block pattern to a glyph. Pattern bits
//! are numbered row by row, left to right, so the cell at local offset
//! `(r, c)` has weight `2^(r * cols + c)`. Index 0 is the blank block.

use std::fmt;
use std::str::FromStr;

use super::error::{ConfigurationError, EncodeError};
use super::BlockShape;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// First sextant character (U+1FB00, BLOCK SEXTANT-1).
pub const SEXTANT_BASE: u32 = 0x1FB00;

/// Half blocks, one row of two cells.
const BLOCK_1X2: &[&str] = &[" ", "▌", "▐", "█"];

/// Half blocks, two rows of one cell.
const BLOCK_2X1: &[&str] = &[" ", "▀", "▄", "█"];

/// Quadrants, two rows of two cells.
const BLOCK_2X2: &[&str] = &[
    " ", "▘", "▝", "▀", "▖", "▌", "▞", "▛", "▗", "▚", "▐", "▜", "▄", "▙", "▟", "█",
];

/// Shade ramp. One inked cell is medium shade, both are dark shade.
/// The blank block is a space rather than light shade `░`, so blank input
/// stays blank and trims away.
const SHADE_2: &[&str] = &[" ", "▒", "▒", "▓"];

/// Every (family, shape) pair the registry can produce.
const CATALOG: &[(SymbolFamily, BlockShape)] = &[
    (SymbolFamily::Block, BlockShape::fixed(1, 2)),
    (SymbolFamily::Block, BlockShape::fixed(2, 1)),
    (SymbolFamily::Block, BlockShape::fixed(2, 2)),
    (SymbolFamily::Block, BlockShape::fixed(3, 2)),
    (SymbolFamily::Dot, BlockShape::fixed(3, 2)),
    (SymbolFamily::Dot, BlockShape::fixed(4, 2)),
    (SymbolFamily::Shade, BlockShape::fixed(1, 2)),
    (SymbolFamily::Shade, BlockShape::fixed(2, 1)),
];

/// Glyph families shipped with the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolFamily {
    /// Filled block elements (half blocks, quadrants, sextants)
    #[default]
    Block,
    /// Braille dot patterns
    Dot,
    /// Light/medium/dark shade ramp
    Shade,
}

impl SymbolFamily {
    /// Get a human-readable name for the family.
    pub fn name(&self) -> &'static str {
        match self {
            SymbolFamily::Block => "block",
            SymbolFamily::Dot => "dot",
            SymbolFamily::Shade => "shade",
        }
    }

    /// Shapes available for this family.
    pub fn shapes(&self) -> Vec<BlockShape> {
        CATALOG
            .iter()
            .filter(|(family, _)| family == self)
            .map(|&(_, shape)| shape)
            .collect()
    }
}

impl fmt::Display for SymbolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolFamily {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(SymbolFamily::Block),
            "dot" => Ok(SymbolFamily::Dot),
            "shade" => Ok(SymbolFamily::Shade),
            _ => Err(ConfigurationError::UnknownFamily(s.to_string()).into()),
        }
    }
}

/// Glyphs indexed by packed block pattern, plus the shape they encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    shape: BlockShape,
    glyphs: Vec<String>,
}

impl SymbolTable {
    /// Create a table from caller-supplied glyphs.
    ///
    /// `glyphs` must hold exactly `2^(rows * cols)` entries, entry 0 being
    /// the glyph for a blank block. This is how an ASCII fallback set is
    /// supplied.
    pub fn new<S: Into<String>>(shape: BlockShape, glyphs: Vec<S>) -> Result<Self, EncodeError> {
        let table = SymbolTable {
            shape,
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    fn from_static(shape: BlockShape, glyphs: &[&str]) -> Self {
        SymbolTable {
            shape,
            glyphs: glyphs.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Check the shape and the table length against each other.
    pub fn validate(&self) -> Result<(), EncodeError> {
        let shape = BlockShape::new(self.shape.rows(), self.shape.cols())?;
        let expected = shape.table_len();
        if self.glyphs.len() != expected {
            return Err(ConfigurationError::TableSizeMismatch {
                shape,
                expected,
                actual: self.glyphs.len(),
            }
            .into());
        }
        Ok(())
    }

    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a packed block pattern.
    pub fn glyph(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    /// Glyph of the all-blank block.
    pub fn blank(&self) -> &str {
        self.glyphs.first().map(String::as_str).unwrap_or(" ")
    }

    /// Glyph of the all-filled block.
    pub fn filled(&self) -> &str {
        self.glyphs.last().map(String::as_str).unwrap_or(" ")
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }
}

impl Default for SymbolTable {
    /// Block sextants, three rows of two cells per glyph.
    fn default() -> Self {
        let shape = BlockShape::fixed(3, 2);
        SymbolTable {
            shape,
            glyphs: (0..shape.table_len()).map(|k| sextant_glyph(k).to_string()).collect(),
        }
    }
}

/// Every (family, shape) pair [`get`] accepts.
pub fn catalog() -> &'static [(SymbolFamily, BlockShape)] {
    CATALOG
}

/// Look up a built-in symbol table.
///
/// Returns a configuration error when the family has no table of that shape.
pub fn get(family: SymbolFamily, shape: BlockShape) -> Result<SymbolTable, EncodeError> {
    let dims = (shape.rows(), shape.cols());
    let table = match (family, dims) {
        (SymbolFamily::Block, (1, 2)) => SymbolTable::from_static(shape, BLOCK_1X2),
        (SymbolFamily::Block, (2, 1)) => SymbolTable::from_static(shape, BLOCK_2X1),
        (SymbolFamily::Block, (2, 2)) => SymbolTable::from_static(shape, BLOCK_2X2),
        (SymbolFamily::Block, (3, 2)) => SymbolTable::default(),
        (SymbolFamily::Dot, (3, 2)) | (SymbolFamily::Dot, (4, 2)) => SymbolTable {
            shape,
            glyphs: (0..shape.table_len())
                .map(|k| braille_glyph(k, shape.rows()).to_string())
                .collect(),
        },
        (SymbolFamily::Shade, (1, 2)) | (SymbolFamily::Shade, (2, 1)) => {
            SymbolTable::from_static(shape, SHADE_2)
        }
        _ => return Err(ConfigurationError::UnsupportedShape { family, shape }.into()),
    };
    Ok(table)
}

/// Sextant glyph for a 3x2 pattern.
///
/// Unicode orders the sextant block by the same bit numbering used here
/// (sextant-1 is bit 0), but leaves out the blank, full, left-half and
/// right-half patterns, which already exist as other block elements.
fn sextant_glyph(index: usize) -> char {
    const LEFT_HALF: usize = 0b01_01_01;
    const RIGHT_HALF: usize = 0b10_10_10;
    match index {
        0 => ' ',
        63 => '█',
        LEFT_HALF => '▌',
        RIGHT_HALF => '▐',
        _ => {
            let skipped = usize::from(index > LEFT_HALF) + usize::from(index > RIGHT_HALF);
            let offset = (index - 1 - skipped) as u32;
            char::from_u32(SEXTANT_BASE + offset).unwrap_or(' ')
        }
    }
}

/// Convert a pattern index to a braille character.
///
/// Braille numbers its dots column by column:
/// ```text
/// (0,0)=1   (0,1)=8
/// (1,0)=2   (1,1)=16
/// (2,0)=4   (2,1)=32
/// (3,0)=64  (3,1)=128
/// ```
/// while pattern indices number cells row by row, so the bits are remapped.
/// Six-dot tables (`rows == 3`) use only the top three rows.
fn braille_glyph(index: usize, rows: usize) -> char {
    const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

    let mut code = 0u8;
    for (r, row_bits) in DOT_BITS.iter().enumerate().take(rows) {
        for (c, &dot) in row_bits.iter().enumerate() {
            if index & (1 << (r * 2 + c)) != 0 {
                code |= dot;
            }
        }
    }
    char::from_u32(BRAILLE_BASE as u32 + code as u32).unwrap_or(BRAILLE_BASE)
}
