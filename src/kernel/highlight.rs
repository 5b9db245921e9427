//! Hover and search highlighting keyed by cell index.

use super::cells::{CellGrid, WordCell};
use super::search;

/// How a single cell should be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    pub hovered: bool,
    /// De-emphasized because another cell is hovered or a search is active.
    pub idle: bool,
    pub matched: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    hovered: Option<usize>,
    /// Ascending cell indices.
    matches: Vec<usize>,
}

impl HighlightState {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn is_match(&self, index: usize) -> bool {
        self.matches.binary_search(&index).is_ok()
    }
}

#[derive(Clone, Debug)]
pub struct Controller {
    state: HighlightState,
    query: String,
    search_enabled: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Controller {
    pub fn new(search_enabled: bool) -> Self {
        Self {
            state: HighlightState::default(),
            query: String::new(),
            search_enabled,
        }
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered
    }

    pub fn matches(&self) -> &[usize] {
        &self.state.matches
    }

    pub fn has_matches(&self) -> bool {
        !self.state.matches.is_empty()
    }

    /// Text currently shown in the search input.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// Pointer entered `cell`. Blank cells reset the hover.
    pub fn on_enter(&mut self, cell: &WordCell) -> bool {
        let next = (!cell.empty).then_some(cell.index);
        self.set_hovered(next)
    }

    pub fn on_leave(&mut self) -> bool {
        self.set_hovered(None)
    }

    fn set_hovered(&mut self, next: Option<usize>) -> bool {
        if self.state.hovered == next {
            return false;
        }
        self.state.hovered = next;
        true
    }

    /// The search input changed to `text`.
    pub fn on_query(&mut self, cells: &CellGrid, text: &str) -> bool {
        if !self.search_enabled {
            return false;
        }
        let query_changed = self.query != text;
        if query_changed {
            self.query.clear();
            self.query.push_str(text);
        }

        let matches = search::find_matches(cells, text);
        tracing::trace!(query = text, matches = matches.len(), "search");
        let matches_changed = matches != self.state.matches;
        self.state.matches = matches;
        query_changed || matches_changed
    }

    /// Drops every match and empties the search input.
    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() && self.state.matches.is_empty() {
            return false;
        }
        self.query.clear();
        self.state.matches.clear();
        true
    }

    pub fn cell_state(&self, cell: &WordCell) -> CellState {
        if cell.empty {
            return CellState::default();
        }
        let hovered = self.state.hovered == Some(cell.index);
        let other_hovered = self.state.hovered.is_some() && !hovered;
        CellState {
            hovered,
            idle: other_hovered || self.has_matches(),
            matched: self.state.is_match(cell.index),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/highlight.rs"]
mod tests;
