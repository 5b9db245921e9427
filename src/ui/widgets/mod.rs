pub mod search_box;
pub mod word_grid;

pub use search_box::{SearchBox, SearchBoxStyles};
pub use word_grid::{Tracks, WordGrid, WordGridStyles};
