//! Error types for the encoding pipeline.

use super::symbols::SymbolFamily;
use super::BlockShape;

/// Errors returned by [`encode`](super::encode) and the symbol registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Caller-supplied options are structurally invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A pipeline invariant did not hold. Indicates a bug, not bad input.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// The specific way a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{axis} cap must be a positive integer or unbounded, got 0")]
    ZeroCap {
        /// Either "row" or "column"
        axis: &'static str,
    },

    #[error("tab width must be at least 1")]
    ZeroTabWidth,

    #[error("block shape {rows}x{cols} has a zero dimension")]
    EmptyBlockShape { rows: usize, cols: usize },

    #[error("block shape {shape} packs {bits} cells per glyph, more than the supported {max}")]
    ShapeTooLarge {
        shape: BlockShape,
        bits: usize,
        max: usize,
    },

    #[error("symbol table for shape {shape} needs {expected} glyphs, got {actual}")]
    TableSizeMismatch {
        shape: BlockShape,
        expected: usize,
        actual: usize,
    },

    #[error("no {family} symbol table for shape {shape}")]
    UnsupportedShape {
        family: SymbolFamily,
        shape: BlockShape,
    },

    #[error("invalid block shape '{0}', expected ROWSxCOLS (e.g. 3x2)")]
    InvalidShapeId(String),

    #[error("unknown symbol family '{0}', expected one of: block, dot, shade")]
    UnknownFamily(String),
}

impl EncodeError {
    /// True if this is a configuration error rather than an internal defect.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EncodeError::Configuration(_))
    }
}
