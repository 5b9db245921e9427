//! Rendering backends.
//!
//! The trait keeps the rest of the crate away from `ratatui` types.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

// The concrete terminal backend lives in `ratatui.rs`; the module name stays generic so callers do
// not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
