//! CLI enum types for symbol family and output format options.

use clap::ValueEnum;

use crate::minimap::SymbolFamily;

/// Glyph family for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Family {
    #[default]
    Block,
    Dot,
    Shade,
}

impl From<Family> for SymbolFamily {
    fn from(f: Family) -> Self {
        match f {
            Family::Block => SymbolFamily::Block,
            Family::Dot => SymbolFamily::Dot,
            Family::Shade => SymbolFamily::Shade,
        }
    }
}

/// How encoded rows are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per row
    #[default]
    Text,
    /// JSON array of strings
    Json,
}
