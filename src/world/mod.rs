pub mod cell;
pub mod grid;

pub use cell::{Cell, Color};
pub use grid::Grid;
