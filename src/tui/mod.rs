//! Terminal frontend glue (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the packing core builds without terminal crates.

pub mod crossterm;
pub mod terminal_guard;
