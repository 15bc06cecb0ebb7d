//! Raster data structures and operations

mod element;
mod grid;
mod lattice;
mod neighborhood;

pub use element::RasterElement;
pub use grid::{checked_cell_count, Raster, MAX_CELLS};
pub use lattice::{remap_axis, GridLattice};
pub use neighborhood::Neighborhood;
