//! Application state behind the terminal frontend.

mod input;
mod render;
pub mod theme;

use std::time::Duration;

use crate::core::event::InputEvent;
use crate::kernel::cells::CellGrid;
use crate::kernel::highlight::Controller;
use crate::kernel::packer::{pack_vocabulary, Layout};
use crate::kernel::reveal::Reveal;
use crate::kernel::settings::Settings;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::UiTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

pub struct App {
    rows: usize,
    uppercase: bool,
    layout: Layout,
    cells: CellGrid,
    controller: Controller,
    reveal: Reveal,
    theme: Theme,
    ui_tree: UiTree,
    dirty: bool,
}

impl App {
    /// Packs the configured vocabulary once; the layout is fixed afterwards.
    pub fn new(settings: &Settings) -> Self {
        let vocabulary = settings.vocabulary();
        let layout = pack_vocabulary(&vocabulary, settings.rows);
        let cells = CellGrid::from_layout(&layout, settings.delay_step());
        tracing::info!(
            words = vocabulary.len(),
            columns = layout.columns(),
            rows = layout.rows().len(),
            cells = cells.len(),
            "grid packed"
        );

        Self {
            rows: settings.rows.max(1),
            uppercase: settings.uppercase,
            layout,
            cells,
            controller: Controller::new(settings.search),
            reveal: Reveal::new(settings.animate),
            theme: theme::theme_from_settings(&settings.theme),
            ui_tree: UiTree::new(),
            dirty: true,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cells(&self) -> &CellGrid {
        &self.cells
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// True while cells are still fading in.
    pub fn animating(&self) -> bool {
        !self.reveal.is_done(&self.cells)
    }

    /// Advances the reveal clock. Returns true when a redraw is due.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let changed = self.reveal.advance(dt, &self.cells);
        if self.reveal.is_done(&self.cells) {
            self.reveal.finish();
        }
        self.dirty |= changed;
        changed
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        render::render(self, backend, area);
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
