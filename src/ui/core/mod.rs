pub mod geom;
pub mod painter;
pub mod style;
pub mod theme;
pub mod tree;
pub mod widget;
