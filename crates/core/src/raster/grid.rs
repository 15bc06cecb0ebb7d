//! Main Raster type

use crate::error::{Error, Result};
use crate::raster::RasterElement;
use ndarray::Array2;

/// Largest raster, in cells, that will be allocated
pub const MAX_CELLS: usize = 1 << 31;

/// Number of cells in a `rows x cols` raster, or an error past [`MAX_CELLS`]
pub fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or_else(|| Error::InvalidParameter {
            name: "extent",
            value: format!("{cols}x{rows}"),
            reason: format!("raster would exceed {MAX_CELLS} cells"),
        })
}

/// A 2D raster grid.
///
/// `Raster<T>` stores values of type `T` in row-major order. Row 0 is the
/// top of the image; a pixel at image coordinates `(x, y)` lives at
/// `(row = y, col = x)`.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`RasterElement`]
///
/// # Example
///
/// ```ignore
/// use topogra_core::Raster;
///
/// // Create a 100x100 raster of empty cells
/// let mut raster: Raster<u8> = Raster::new(100, 100);
///
/// // Set a value
/// raster.set(10, 20, 42)?;
///
/// // Get a value
/// let value = raster.get(10, 20)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: RasterElement> {
    /// Raster data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: RasterElement> Raster<T> {
    /// Create a new raster with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::empty())
    }

    /// Create a new raster of empty cells, refusing oversized shapes
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        checked_cell_count(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a raster from existing data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::SizeMismatch {
                what: "raster data",
                expected: rows * cols,
                actual: data.len(),
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster has no cells at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Value of the cell offset by `(dr, dc)` from `(row, col)`, or `None`
    /// when that cell falls outside the raster
    pub fn neighbor(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<T> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.data.get((r, c)).copied()
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    // Transforms

    /// Mirror the raster top to bottom
    pub fn flip_vertical(&mut self) {
        let rows = self.rows();
        let source = &self.data;
        let flipped = Array2::from_shape_fn(source.dim(), |(r, c)| source[(rows - 1 - r, c)]);
        self.data = flipped;
    }

    /// Number of cells holding data
    pub fn filled_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_empty()).count()
    }
}
