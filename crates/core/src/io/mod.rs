//! I/O operations for reading terrain samples

mod delimited;

pub use delimited::{parse_row, parse_samples, read_samples};
