//! Encoding options.

use super::error::{ConfigurationError, EncodeError};
use super::mask::DEFAULT_TAB_WIDTH;
use super::symbols::SymbolTable;

/// Settings for [`encode`](super::encode).
///
/// Defaults: no row or column cap, block sextant symbols, trailing blanks
/// trimmed, tabs expanded to 8 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingOptions {
    /// Maximum number of output rows, `None` for unbounded
    pub n_rows: Option<usize>,
    /// Maximum number of glyphs per output row, `None` for unbounded
    pub n_cols: Option<usize>,
    /// Glyph table; its shape decides how many cells each glyph covers
    pub symbols: SymbolTable,
    /// Strip blank glyphs from the end of every output row
    pub trim_trailing_blank: bool,
    /// Blank cells per tab character
    pub tab_width: usize,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            n_rows: None,
            n_cols: None,
            symbols: SymbolTable::default(),
            trim_trailing_blank: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl EncodingOptions {
    pub fn with_rows(mut self, n_rows: usize) -> Self {
        self.n_rows = Some(n_rows);
        self
    }

    pub fn with_cols(mut self, n_cols: usize) -> Self {
        self.n_cols = Some(n_cols);
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim_trailing_blank = trim;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Reject structurally invalid options before any encoding work.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.n_rows == Some(0) {
            return Err(ConfigurationError::ZeroCap { axis: "row" }.into());
        }
        if self.n_cols == Some(0) {
            return Err(ConfigurationError::ZeroCap { axis: "column" }.into());
        }
        if self.tab_width == 0 {
            return Err(ConfigurationError::ZeroTabWidth.into());
        }
        self.symbols.validate()
    }
}
