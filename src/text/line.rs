//! A rendered row of cells.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Cell, Rgba, Style};

use super::measure::grapheme_width;

/// One row of terminal cells, the unit controls render into.
///
/// `width()` counts terminal columns: a wide grapheme is stored as its own
/// cell followed by a continuation cell. Combining marks stay in the cell of
/// their base character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Build a line from text painted with `style`.
    ///
    /// Control characters and clusters with no visible width are dropped.
    pub fn styled(text: &str, style: Style) -> Self {
        let mut cells = Vec::with_capacity(text.len());
        for grapheme in text.graphemes(true) {
            match grapheme_width(grapheme) {
                0 => {}
                1 => cells.push(Cell::new(grapheme.to_owned(), style)),
                _ => {
                    cells.push(Cell::new(grapheme.to_owned(), style));
                    cells.push(Cell::continuation(style));
                }
            }
        }
        Self { cells }
    }

    /// `width` blank cells painted with the given colors.
    pub fn filler(width: usize, fg: Option<Rgba>, bg: Option<Rgba>) -> Self {
        Self {
            cells: vec![Cell::filler(fg, bg); width],
        }
    }

    /// Width in terminal columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Append `count` filler cells.
    pub fn push_filler(&mut self, count: usize, fg: Option<Rgba>, bg: Option<Rgba>) {
        self.cells
            .extend(std::iter::repeat_n(Cell::filler(fg, bg), count));
    }

    /// Append another line's cells.
    pub fn append(&mut self, other: Line) {
        self.cells.extend(other.cells);
    }

    /// Cut the line to at most `width` columns.
    ///
    /// A wide grapheme whose continuation would be cut off is replaced by a
    /// blank with the same colors.
    pub fn truncate(&mut self, width: usize) {
        if self.cells.len() <= width {
            return;
        }
        let split_wide = self.cells[width].is_continuation();
        self.cells.truncate(width);
        if split_wide {
            if let Some(last) = self.cells.last_mut() {
                last.symbol = Cow::Borrowed(" ");
            }
        }
    }

    /// Fill in missing colors on every cell.
    pub fn inherit(self, fg: Option<Rgba>, bg: Option<Rgba>) -> Self {
        self.cells
            .into_iter()
            .map(|cell| cell.inherit(fg, bg))
            .collect()
    }

    /// The visible text, continuation cells skipped.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.symbol.as_ref()).collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::styled(text, Style::INHERIT)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::styled(&text, Style::INHERIT)
    }
}

impl FromIterator<Cell> for Line {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Line {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
