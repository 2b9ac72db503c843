// Terrain grid and segment validity module

pub mod grid;
pub mod validity;

pub use grid::*;
pub use validity::*;
