//! wordgrid - word cloud grid packer with hover and search highlighting.
//!
//! Modules:
//! - kernel: vocabulary, greedy packing, cell indexing, highlight controller
//! - core: backend-neutral input events
//! - ui: geometry, painter, hit-test tree, widgets and backends
//! - app: application state driving the terminal frontend
//! - tui: crossterm conversion and terminal guard (feature `tui`)

pub mod app;
pub mod core;
pub mod kernel;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
