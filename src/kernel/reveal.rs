use std::time::Duration;

use super::cells::{CellGrid, WordCell};

/// Staggered fade-in: a cell shows up once `elapsed >= cell.delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    elapsed: Duration,
    enabled: bool,
}

impl Reveal {
    pub fn new(enabled: bool) -> Self {
        Self {
            elapsed: Duration::ZERO,
            enabled,
        }
    }

    pub fn is_visible(&self, cell: &WordCell) -> bool {
        !self.enabled || self.elapsed >= cell.delay
    }

    /// Returns true when at least one more cell became visible.
    pub fn advance(&mut self, dt: Duration, cells: &CellGrid) -> bool {
        if !self.enabled || dt.is_zero() {
            return false;
        }
        let before = self.elapsed;
        self.elapsed = self.elapsed.saturating_add(dt);
        cells
            .iter()
            .any(|cell| cell.delay > before && cell.delay <= self.elapsed)
    }

    pub fn finish(&mut self) {
        self.enabled = false;
    }

    pub fn is_done(&self, cells: &CellGrid) -> bool {
        !self.enabled || self.elapsed >= cells.last_delay()
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/reveal.rs"]
mod tests;
