//! Remapping of grid coordinates onto a dense pixel lattice

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Spacing and origin shift of a sampled grid axis.
///
/// Terrain datasets rarely start at zero or step by one: a 50m grid whose
/// samples sit at cell centres runs 25, 75, 125, ... A lattice maps those
/// raw coordinates onto contiguous pixel indices:
/// ```text
/// cell(v)  = (v - offset) / resolution        (truncating division)
/// index(v) = cell(v) - cell(min(values))
/// ```
///
/// The transform is affine and order preserving; values that fall into the
/// same cell collapse onto the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLattice {
    /// Grid spacing in native units
    pub resolution: i64,
    /// Origin shift subtracted before dividing by the spacing
    pub offset: i64,
}

impl GridLattice {
    /// Create a new lattice
    pub fn new(resolution: i64, offset: i64) -> Self {
        Self { resolution, offset }
    }

    /// A lattice that leaves already-dense indices untouched
    pub fn identity() -> Self {
        Self::new(1, 0)
    }

    /// Reject a lattice that cannot divide, or would reverse the axis
    pub fn validate(&self) -> Result<()> {
        if self.resolution <= 0 {
            return Err(Error::InvalidParameter {
                name: "resolution",
                value: self.resolution.to_string(),
                reason: "grid spacing must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Cell number of a raw coordinate, before zero-basing.
    ///
    /// Rust's integer `/` truncates toward zero, which is the rounding this
    /// lattice is defined with: `-25 / 50 == 0`, not `-1`. Coordinates whose
    /// shift overflows `i64` are an error.
    pub fn cell_index(&self, value: i64) -> Result<i64> {
        value
            .checked_sub(self.offset)
            .and_then(|shifted| shifted.checked_div(self.resolution))
            .ok_or_else(|| coordinate_overflow(value))
    }

    /// Remap one axis of raw coordinates to zero-based pixel indices.
    ///
    /// The output keeps the input order and length, and its minimum is 0.
    pub fn remap(&self, values: &[i64]) -> Result<Vec<usize>> {
        self.validate()?;
        let min = values.iter().copied().min().ok_or(Error::EmptyDataset)?;
        let base = self.cell_index(min)?;

        values
            .iter()
            .map(|&v| {
                // Truncation is monotonic, so nothing lands below `base`
                let index = self
                    .cell_index(v)?
                    .checked_sub(base)
                    .ok_or_else(|| coordinate_overflow(v))?;
                usize::try_from(index).map_err(|_| coordinate_overflow(v))
            })
            .collect()
    }

    /// Number of pixels needed to hold every remapped value of an axis
    pub fn extent(&self, min: i64, max: i64) -> Result<usize> {
        self.validate()?;
        let out_of_range = || Error::InvalidParameter {
            name: "extent",
            value: format!("{min}..{max}"),
            reason: "span is negative or does not fit a pixel count".to_string(),
        };
        let span = self
            .cell_index(max)?
            .checked_sub(self.cell_index(min)?)
            .ok_or_else(out_of_range)?;
        usize::try_from(span)
            .ok()
            .and_then(|s| s.checked_add(1))
            .ok_or_else(out_of_range)
    }
}

fn coordinate_overflow(value: i64) -> Error {
    Error::InvalidParameter {
        name: "coordinate",
        value: value.to_string(),
        reason: "does not fit a pixel index".to_string(),
    }
}

impl Default for GridLattice {
    /// OSNI 50m DTM: 50m spacing, samples at cell centres
    fn default() -> Self {
        Self::new(50, 25)
    }
}

/// Remap one axis with an explicit resolution and offset
pub fn remap_axis(values: &[i64], resolution: i64, offset: i64) -> Result<Vec<usize>> {
    GridLattice::new(resolution, offset).remap(values)
}
