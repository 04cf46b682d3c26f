mod cell;
mod grid;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
