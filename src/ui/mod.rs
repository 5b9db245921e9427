//! UI layer over a backend-neutral paint list.
//!
//! Widgets emit [`core::painter::PaintCmd`]s and hit-test nodes; a backend
//! (`ratatui` in the terminal build, a headless buffer in tests) executes the
//! commands.

pub mod backend;
pub mod core;
pub mod widgets;
