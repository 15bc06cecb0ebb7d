//! Raster element trait for generic cell values

use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Every element type designates one value as "empty", the sentinel for a
/// cell that carries no data. Fresh rasters are filled with it and the
/// outline pass grows non-empty regions into it.
pub trait RasterElement: Copy + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The sentinel value for a cell without data
    fn empty() -> Self;

    /// Check if this value is the empty sentinel
    fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

macro_rules! impl_raster_element_int {
    ($t:ty) => {
        impl RasterElement for $t {
            fn empty() -> Self {
                0
            }
        }
    };
}

macro_rules! impl_raster_element_float {
    ($t:ty) => {
        impl RasterElement for $t {
            fn empty() -> Self {
                <$t>::NAN
            }

            fn is_empty(&self) -> bool {
                self.is_nan()
            }
        }
    };
}

impl_raster_element_int!(i8);
impl_raster_element_int!(i16);
impl_raster_element_int!(i32);
impl_raster_element_int!(i64);
impl_raster_element_int!(u8);
impl_raster_element_int!(u16);
impl_raster_element_int!(u32);
impl_raster_element_int!(u64);
impl_raster_element_float!(f32);
impl_raster_element_float!(f64);
