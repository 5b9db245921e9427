use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::packer::{Layout, Token};

/// Stagger between two consecutive cells of the reveal animation.
pub const DEFAULT_DELAY_STEP: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCell {
    /// 1-based, row-major. Blank runs consume an index too.
    pub index: usize,
    /// The word, or `len` spaces for a blank run.
    pub text: String,
    pub len: usize,
    pub delay: Duration,
    pub empty: bool,
    pub row: usize,
    /// 0-based offset of the first character inside its row.
    pub column: usize,
}

impl WordCell {
    /// CSS-style placement: 1-based start line and span.
    pub fn grid_column(&self) -> (usize, usize) {
        (self.column + 1, self.len)
    }

    pub fn end_column(&self) -> usize {
        self.column + self.len
    }

    pub fn chars(&self) -> impl Iterator<Item = &str> {
        self.text.graphemes(true)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGrid {
    columns: usize,
    rows: Vec<Vec<WordCell>>,
}

impl CellGrid {
    pub fn from_layout(layout: &Layout, delay_step: Duration) -> Self {
        let mut index = 0usize;
        let rows = layout
            .rows()
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let mut column = 0usize;
                row.tokens()
                    .iter()
                    .map(|token| {
                        index += 1;
                        let len = token.len();
                        let text = match token {
                            Token::Word(word) => word.clone(),
                            Token::Blank(n) => " ".repeat(*n),
                        };
                        let cell = WordCell {
                            index,
                            empty: text.trim().is_empty(),
                            text,
                            len,
                            delay: delay_for(index, delay_step),
                            row: row_idx,
                            column,
                        };
                        column += len;
                        cell
                    })
                    .collect()
            })
            .collect();

        Self {
            columns: layout.columns(),
            rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Widest row, at least `columns`.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.last().map(WordCell::end_column))
            .max()
            .unwrap_or(0)
            .max(self.columns)
    }

    pub fn rows(&self) -> &[Vec<WordCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCell> {
        self.rows.iter().flatten()
    }

    pub fn get(&self, index: usize) -> Option<&WordCell> {
        self.iter().find(|cell| cell.index == index)
    }

    /// Cell covering `column` of `row`, using actual word lengths so cells of
    /// an over-wide row are still reachable.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&WordCell> {
        self.rows
            .get(row)?
            .iter()
            .find(|cell| column >= cell.column && column < cell.end_column())
    }

    pub fn last_delay(&self) -> Duration {
        self.iter().map(|c| c.delay).max().unwrap_or_default()
    }
}

fn delay_for(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/cells.rs"]
mod tests;
