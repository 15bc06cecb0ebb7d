//! # Topogra Colormap
//!
//! Elevation coloring and raster rendering for topogra.
//!
//! Heights are mapped through a fixed six-segment hue ramp running from
//! blue (low) through cyan, green, yellow and red to violet (high), 1530
//! steps in all. [`build_raster`] turns elevation samples into a
//! `Raster<Rgb>` and [`save_image`] persists one as BMP, PNG, ...
//!
//! ## Usage
//!
//! ```ignore
//! use topogra_colormap::{build_raster, save_image, ColorRamp};
//! use topogra_core::GridLattice;
//!
//! let ramp = ColorRamp::new(1.8)?;
//! let raster = build_raster(&samples, &GridLattice::default(), &ramp)?;
//! save_image(&raster, "output.bmp")?;
//! ```

mod ramp;
mod render;

pub use ramp::{ColorRamp, OverflowPolicy, Rgb, RAMP_STEPS, SEGMENT_STEPS};
pub use render::{build_raster, paint_cells, raster_to_rgb, save_image};
