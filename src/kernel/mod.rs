//! Frontend independent core: packing, cell indexing and highlighting.
//!
//! Nothing in here depends on terminal crates, so the same layout can drive
//! any grid-capable surface.

pub mod cells;
pub mod highlight;
pub mod packer;
pub mod reveal;
pub mod search;
pub mod settings;
pub mod vocabulary;

pub use cells::{CellGrid, WordCell, DEFAULT_DELAY_STEP};
pub use highlight::{CellState, Controller, HighlightState};
pub use packer::{pack, pack_vocabulary, Layout, Row, Token};
pub use reveal::Reveal;
pub use settings::Settings;
pub use vocabulary::{Vocabulary, DEFAULT_WORDS};
