//! # Topogra Algorithms
//!
//! Raster algorithms for topogra.
//!
//! ## Available Algorithm Categories
//!
//! - **morphology**: Outlining filled regions with a border color

mod maybe_rayon;
pub mod morphology;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::morphology::{outline, OutlineParams};
    pub use topogra_core::prelude::*;
}
