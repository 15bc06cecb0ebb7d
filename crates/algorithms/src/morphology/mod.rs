//! Mathematical morphology algorithms for raster processing
//!
//! - **Outline**: repeated single-cell dilation of filled regions into
//!   empty space, painting the grown ring in a border color

mod outline;

pub use outline::{outline, OutlineParams};
