pub mod colors;
pub mod frames;
pub mod grid;

pub use colors::*;
pub use frames::*;
pub use grid::*;
