//! Border outline by repeated dilation
//!
//! Every empty cell touching a filled cell is painted with the border
//! color. Each round grows the border by one cell.

use crate::maybe_rayon::*;
use ndarray::Array2;
use topogra_core::raster::{Neighborhood, Raster, RasterElement};
use topogra_core::{Error, Result};
use tracing::debug;

/// Parameters for outlining
#[derive(Debug, Clone)]
pub struct OutlineParams<T> {
    /// Number of dilation rounds, i.e. border thickness in cells
    pub rounds: usize,
    /// Value painted into the border
    pub color: T,
    /// Which cells count as touching
    pub neighborhood: Neighborhood,
}

impl<T: RasterElement> OutlineParams<T> {
    pub fn new(rounds: usize, color: T) -> Self {
        Self {
            rounds,
            color,
            neighborhood: Neighborhood::Rook,
        }
    }
}

/// Grow a border around the filled regions of a raster
///
/// Each round reads only the raster as it stood when the round began, so
/// border cells painted during a round never seed more border in that same
/// round. Cells outside the raster count as empty. Filled cells are never
/// changed. Zero rounds returns an unchanged copy.
///
/// # Arguments
/// * `raster` - Input raster
/// * `params` - Round count, border color and neighborhood
pub fn outline<T: RasterElement>(raster: &Raster<T>, params: &OutlineParams<T>) -> Result<Raster<T>> {
    let mut reference = raster.clone();
    if params.rounds > 0 && params.color.is_empty() {
        return Err(Error::InvalidParameter {
            name: "color",
            value: format!("{:?}", params.color),
            reason: "border color must differ from the empty value".to_string(),
        });
    }

    let offsets = params.neighborhood.offsets();
    for round in 0..params.rounds {
        debug!("Applying border, round {}", round + 1);
        reference = outline_pass(&reference, &offsets, params.color)?;
    }

    Ok(reference)
}

/// One round: read `reference`, return a freshly built raster
fn outline_pass<T: RasterElement>(
    reference: &Raster<T>,
    offsets: &[(isize, isize)],
    color: T,
) -> Result<Raster<T>> {
    let (rows, cols) = reference.shape();

    let output_data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = Vec::with_capacity(cols);

            for col in 0..cols {
                let center = unsafe { reference.get_unchecked(row, col) };
                let touches_fill = center.is_empty()
                    && offsets.iter().any(|&(dr, dc)| {
                        reference
                            .neighbor(row, col, dr, dc)
                            .is_some_and(|v| !v.is_empty())
                    });

                row_data.push(if touches_fill { color } else { center });
            }

            row_data
        })
        .collect();

    let data = Array2::from_shape_vec((rows, cols), output_data)
        .map_err(|e| Error::Other(e.to_string()))?;
    Ok(Raster::from_array(data))
}
