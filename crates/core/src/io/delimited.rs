//! Comma-separated `x,y,height` sample files
//!
//! The first line is a header and is discarded. Every following non-blank
//! line must hold exactly three fields: integer x, integer y, and a finite
//! height.

use crate::error::{Error, Result};
use crate::sample::SampleRow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a sample file from disk
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<SampleRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    parse_samples(BufReader::new(file)).map_err(|e| match e {
        Error::Io(source) => Error::file(path, source),
        other => other,
    })
}

/// Parse samples from any buffered reader
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<SampleRow>> {
    let mut samples = Vec::new();

    // Line 1 is the header
    for (i, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        samples.push(parse_row(line, i + 1)?);
    }

    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    Ok(samples)
}

/// Parse a single `x,y,height` row; `line` is the 1-based line number used in errors
pub fn parse_row(text: &str, line: usize) -> Result<SampleRow> {
    let malformed = |reason: String| Error::MalformedRow { line, reason };

    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 fields, got {}",
            fields.len()
        )));
    }

    let x: i64 = fields[0]
        .parse()
        .map_err(|_| malformed(format!("invalid x coordinate '{}'", fields[0])))?;
    let y: i64 = fields[1]
        .parse()
        .map_err(|_| malformed(format!("invalid y coordinate '{}'", fields[1])))?;
    let height: f64 = fields[2]
        .parse()
        .map_err(|_| malformed(format!("invalid height '{}'", fields[2])))?;

    if !height.is_finite() {
        return Err(malformed(format!("height '{}' is not finite", fields[2])));
    }

    Ok(SampleRow::new(x, y, height))
}
