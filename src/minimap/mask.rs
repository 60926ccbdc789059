//! Occupancy masks: which character cells of the source text carry ink.

/// Default number of blank cells a tab expands to.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Rectangular boolean grid, `true` where the source cell is non-blank.
///
/// Stored row-major. Every row has exactly `cols` cells; rows built from
/// shorter lines are padded with `false` when the mask is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccupancyMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyMask {
    /// An all-blank mask of the given size.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a mask from possibly ragged rows.
    ///
    /// The width is the longest row; shorter rows are right-padded with
    /// `false`. Rows are never truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let cols = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut mask = Self::blank(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            let start = i * cols;
            let row = row.as_ref();
            mask.cells[start..start + row.len()].copy_from_slice(row);
        }
        mask
    }

    /// Build a mask from text lines.
    ///
    /// Each character is one cell no matter how many bytes it takes. A tab
    /// becomes `tab_width` blank cells. See [`is_blank`] for what counts as
    /// blank. `tab_width` is expected to be at least 1; option validation
    /// rejects 0 before this is reached.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], tab_width: usize) -> Self {
        let rows: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| line_cells(line.as_ref(), tab_width))
            .collect();
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the mask has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value. Panics if `(row, col)` is outside the mask.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} mask",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} mask",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = value;
    }

    /// One row of the mask.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Count of `true` cells.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Whether a character renders as blank.
///
/// Blank characters are space, tab and the ASCII control whitespace
/// `\n`, `\r`, vertical tab and form feed. Other Unicode whitespace
/// (no-break space, ideographic space, ...) is treated as ink.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn line_cells(line: &str, tab_width: usize) -> Vec<bool> {
    let mut cells = Vec::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            cells.extend(std::iter::repeat(false).take(tab_width));
        } else {
            cells.push(!is_blank(c));
        }
    }
    cells
}
