//! Elevation samples and dataset summaries

use crate::error::{Error, Result};
use crate::raster::{checked_cell_count, GridLattice};

/// One elevation sample: grid coordinates plus height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub x: i64,
    pub y: i64,
    pub height: f64,
}

impl SampleRow {
    pub fn new(x: i64, y: i64, height: f64) -> Self {
        Self { x, y, height }
    }

    /// Height as a non-negative whole number.
    ///
    /// Slightly submerged samples clamp to 0; the fraction is dropped.
    #[inline]
    pub fn clamped_height(&self) -> u32 {
        if self.height <= 0.0 {
            0
        } else {
            // `as` saturates at u32::MAX
            self.height.trunc() as u32
        }
    }
}

/// Extents and height range of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub count: usize,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    /// Smallest clamped height
    pub min_height: u32,
    /// Largest clamped height
    pub max_height: u32,
    /// Number of samples whose raw height was below zero
    pub submerged: usize,
}

impl SampleSummary {
    /// Raster size (rows, cols) the samples occupy on `lattice`
    pub fn raster_shape(&self, lattice: &GridLattice) -> Result<(usize, usize)> {
        let rows = lattice.extent(self.min_y, self.max_y)?;
        let cols = lattice.extent(self.min_x, self.max_x)?;
        Ok((rows, cols))
    }

    /// Cell count of [`raster_shape`](Self::raster_shape), rejecting
    /// extents too large to allocate
    pub fn raster_cells(&self, lattice: &GridLattice) -> Result<usize> {
        let (rows, cols) = self.raster_shape(lattice)?;
        checked_cell_count(rows, cols)
    }
}

/// Summarize a dataset in a single pass
pub fn summarize(samples: &[SampleRow]) -> Result<SampleSummary> {
    let first = samples.first().ok_or(Error::EmptyDataset)?;
    let first_height = first.clamped_height();

    let mut summary = SampleSummary {
        count: samples.len(),
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
        min_height: first_height,
        max_height: first_height,
        submerged: 0,
    };

    for s in samples {
        summary.min_x = summary.min_x.min(s.x);
        summary.max_x = summary.max_x.max(s.x);
        summary.min_y = summary.min_y.min(s.y);
        summary.max_y = summary.max_y.max(s.y);

        let h = s.clamped_height();
        summary.min_height = summary.min_height.min(h);
        summary.max_height = summary.max_height.max(h);
        if s.height < 0.0 {
            summary.submerged += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_height() {
        assert_eq!(SampleRow::new(0, 0, -1.4).clamped_height(), 0);
        assert_eq!(SampleRow::new(0, 0, 0.0).clamped_height(), 0);
        assert_eq!(SampleRow::new(0, 0, 12.9).clamped_height(), 12);
        assert_eq!(SampleRow::new(0, 0, 1e12).clamped_height(), u32::MAX);
    }

    #[test]
    fn test_summarize() {
        let samples = [
            SampleRow::new(25, 75, 10.5),
            SampleRow::new(125, 25, -0.7),
            SampleRow::new(75, 25, 850.2),
        ];
        let s = summarize(&samples).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!((s.min_x, s.max_x), (25, 125));
        assert_eq!((s.min_y, s.max_y), (25, 75));
        assert_eq!((s.min_height, s.max_height), (0, 850));
        assert_eq!(s.submerged, 1);
        assert_eq!(s.raster_shape(&GridLattice::default()).unwrap(), (2, 3));
        assert_eq!(s.raster_cells(&GridLattice::default()).unwrap(), 6);
    }

    #[test]
    fn test_raster_cells_huge_extent() {
        let samples = [
            SampleRow::new(0, 0, 10.0),
            SampleRow::new(4611686018427387903, 4611686018427387903, 20.0),
        ];
        let s = summarize(&samples).unwrap();
        let lattice = GridLattice::new(1, 0);
        assert!(s.raster_shape(&lattice).is_ok());
        assert!(matches!(
            s.raster_cells(&lattice),
            Err(Error::InvalidParameter { name: "extent", .. })
        ));
    }

    #[test]
    fn test_summarize_empty() {
        assert!(matches!(summarize(&[]), Err(Error::EmptyDataset)));
    }
}
