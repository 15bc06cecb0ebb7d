//! # Topogra Core
//!
//! Core types, traits and I/O for the topogra terrain renderer.
//!
//! This crate provides:
//! - `Raster<T>`: Generic raster grid type with an "empty" cell sentinel
//! - `GridLattice`: Remapping of offset grid coordinates onto pixel indices
//! - `SampleRow`: One elevation sample, plus dataset summaries
//! - Delimited sample reading

pub mod error;
pub mod io;
pub mod raster;
pub mod sample;

pub use error::{Error, Result};
pub use raster::{GridLattice, Neighborhood, Raster, RasterElement};
pub use sample::{summarize, SampleRow, SampleSummary};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{GridLattice, Neighborhood, Raster, RasterElement};
    pub use crate::sample::SampleRow;
}
