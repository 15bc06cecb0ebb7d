//! Sample-to-raster rendering and image output.

use crate::ramp::{ColorRamp, Rgb};
use std::path::Path;
use topogra_core::raster::{GridLattice, Raster};
use topogra_core::{Error, Result, SampleRow};

/// Paint colored cells at already-remapped pixel coordinates.
///
/// `xs`, `ys` and `heights` are index aligned. The raster is sized to
/// `(max(ys) + 1) x (max(xs) + 1)` and starts out black. When two samples
/// share a cell the later one wins. Extents whose cell count exceeds
/// [`MAX_CELLS`](topogra_core::raster::MAX_CELLS) are rejected before allocation.
pub fn paint_cells(
    xs: &[usize],
    ys: &[usize],
    heights: &[u32],
    ramp: &ColorRamp,
) -> Result<Raster<Rgb>> {
    if ys.len() != xs.len() {
        return Err(Error::SizeMismatch {
            what: "y coordinates",
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    if heights.len() != xs.len() {
        return Err(Error::SizeMismatch {
            what: "heights",
            expected: xs.len(),
            actual: heights.len(),
        });
    }

    let span = |v: &[usize]| -> Result<usize> {
        let max = v.iter().max().ok_or(Error::EmptyDataset)?;
        max.checked_add(1).ok_or_else(|| Error::InvalidParameter {
            name: "extent",
            value: max.to_string(),
            reason: "pixel index too large".to_string(),
        })
    };
    let cols = span(xs)?;
    let rows = span(ys)?;
    let mut raster = Raster::try_new(rows, cols)?;

    for ((&x, &y), &height) in xs.iter().zip(ys).zip(heights) {
        raster.set(y, x, ramp.color_for(height)?)?;
    }

    Ok(raster)
}

/// Remap sample coordinates onto `lattice` and paint them with `ramp`.
pub fn build_raster(
    samples: &[SampleRow],
    lattice: &GridLattice,
    ramp: &ColorRamp,
) -> Result<Raster<Rgb>> {
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let xs: Vec<i64> = samples.iter().map(|s| s.x).collect();
    let ys: Vec<i64> = samples.iter().map(|s| s.y).collect();
    let heights: Vec<u32> = samples.iter().map(SampleRow::clamped_height).collect();

    let xs = lattice.remap(&xs)?;
    let ys = lattice.remap(&ys)?;

    paint_cells(&xs, &ys, &heights, ramp)
}

/// Convert a raster to a tightly packed RGB8 buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 3` in row-major order.
pub fn raster_to_rgb(raster: &Raster<Rgb>) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(raster.len() * 3);
    for px in raster.data().iter() {
        rgb.extend_from_slice(&[px.r, px.g, px.b]);
    }
    rgb
}

/// Write a raster to an image file; the format follows the path's extension.
pub fn save_image<P: AsRef<Path>>(raster: &Raster<Rgb>, path: P) -> Result<()> {
    let path = path.as_ref();
    let encode_err = |reason: String| Error::Encode {
        path: path.to_path_buf(),
        reason,
    };

    let (rows, cols) = raster.shape();
    let width = u32::try_from(cols).map_err(|_| encode_err(format!("width {cols} too large")))?;
    let height = u32::try_from(rows).map_err(|_| encode_err(format!("height {rows} too large")))?;

    let image = image::RgbImage::from_raw(width, height, raster_to_rgb(raster))
        .ok_or_else(|| encode_err("pixel buffer does not match dimensions".to_string()))?;

    image.save(path).map_err(|e| match e {
        image::ImageError::IoError(source) => Error::file(path, source),
        other => encode_err(other.to_string()),
    })
}
