//! Renders a [`CellGrid`] as evenly sized character tracks.
//!
//! The area is split into `columns` tracks horizontally and one track per
//! row vertically, each character centered in its own track. Every cell,
//! blank runs included, registers a hover node so the pointer entering a gap
//! is seen as leaving the previous word.

use crate::kernel::cells::{CellGrid, WordCell};
use crate::kernel::highlight::{CellState, Controller};
use crate::kernel::reveal::Reveal;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug)]
pub struct WordGridStyles {
    pub word: Style,
    pub idle: Style,
    pub matched: Style,
    pub hovered: Style,
}

impl WordGridStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            word: theme.word(),
            idle: theme.idle(),
            matched: theme.matched(),
            hovered: theme.hovered(),
        }
    }

    pub fn for_state(&self, state: CellState) -> Style {
        if state.matched {
            self.matched
        } else if state.hovered {
            self.hovered
        } else if state.idle {
            self.idle
        } else {
            self.word
        }
    }
}

/// Track boundaries of a grid laid over `area`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tracks {
    pub area: Rect,
    pub columns: usize,
    pub rows: usize,
}

impl Tracks {
    /// Left edge of column track `i`. Tracks past `columns` keep the same
    /// pitch so over-wide rows run off to the right.
    pub fn column_x(&self, i: usize) -> u16 {
        let offset = i * self.area.w as usize / self.columns.max(1);
        clamp_u16(self.area.x as usize + offset)
    }

    pub fn row_y(&self, i: usize) -> u16 {
        let offset = i * self.area.h as usize / self.rows.max(1);
        clamp_u16(self.area.y as usize + offset)
    }

    pub fn cell_rect(&self, cell: &WordCell) -> Rect {
        let x0 = self.column_x(cell.column);
        let x1 = self.column_x(cell.end_column());
        let y0 = self.row_y(cell.row);
        let y1 = self.row_y(cell.row + 1).max(y0.saturating_add(1));
        Rect::new(x0, y0, x1.saturating_sub(x0), y1 - y0)
    }
}

fn clamp_u16(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}

pub struct WordGrid<'a> {
    pub cells: &'a CellGrid,
    pub controller: &'a Controller,
    pub reveal: &'a Reveal,
    /// Row tracks to reserve; more are used when packing produced extra rows.
    pub rows: usize,
    pub uppercase: bool,
    pub styles: WordGridStyles,
}

impl WordGrid<'_> {
    pub fn tracks(&self, area: Rect) -> Tracks {
        Tracks {
            area,
            columns: self.cells.columns(),
            rows: self.rows.max(self.cells.row_count()),
        }
    }
}

impl Widget for WordGrid<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() || self.cells.is_empty() || self.cells.columns() == 0 {
            return;
        }
        let tracks = self.tracks(area);

        for cell in self.cells.iter() {
            let rect = tracks.cell_rect(cell);
            if rect.is_empty() {
                continue;
            }
            ui.tree.push(Node::new(
                rect,
                Sense::HOVER,
                NodeKind::GridCell { index: cell.index },
            ));

            if cell.empty || !self.reveal.is_visible(cell) {
                continue;
            }
            let style = self.styles.for_state(self.controller.cell_state(cell));
            let text_y = rect.y + rect.h.saturating_sub(1) / 2;

            for (i, ch) in cell.chars().enumerate() {
                let glyph = if self.uppercase {
                    ch.to_uppercase()
                } else {
                    ch.to_string()
                };
                let x0 = tracks.column_x(cell.column + i);
                let x1 = tracks.column_x(cell.column + i + 1);
                let slot = x1.saturating_sub(x0);
                let w = glyph.width() as u16;
                let x = x0 + slot.saturating_sub(w) / 2;
                ui.painter
                    .text_clipped(Pos::new(x, text_y), glyph, style, area);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/word_grid.rs"]
mod tests;
