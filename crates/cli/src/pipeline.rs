//! The render pipeline: samples -> colored raster -> flip -> outline -> image

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use topogra_algorithms::morphology::{outline, OutlineParams};
use topogra_colormap::{build_raster, save_image, Rgb};
use topogra_core::io::read_samples;
use topogra_core::{summarize, Raster, SampleRow};
use tracing::{debug, info};

use crate::config::RenderConfig;

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub samples: usize,
    pub rows: usize,
    pub cols: usize,
    /// Cells holding elevation data
    pub data_cells: usize,
    /// Cells painted by the outline
    pub border_cells: usize,
    pub scale: f64,
    pub elapsed: Duration,
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A rendered map before it is written out
#[derive(Debug, Clone)]
pub struct RenderedMap {
    pub raster: Raster<Rgb>,
    /// Height scale the ramp used
    pub scale: f64,
    /// Cells painted from samples, counted before the outline
    pub data_cells: usize,
}

/// Turn samples into the finished map raster
pub fn render_samples(samples: &[SampleRow], config: &RenderConfig) -> Result<RenderedMap> {
    let summary = summarize(samples)?;
    let ramp = config.ramp(summary.max_height)?;
    debug!(
        "Height range {}..{}, scale {:.4}",
        summary.min_height,
        summary.max_height,
        ramp.scale()
    );

    let pb = spinner("Drawing the map...");
    let mut raster = build_raster(samples, &config.lattice(), &ramp)
        .context("Failed to draw the map")?;
    pb.finish_and_clear();
    let data_cells = raster.filled_count();
    info!("Map: {} x {}, {} data cells", raster.cols(), raster.rows(), data_cells);

    if config.flip_vertical {
        raster.flip_vertical();
    }

    let pb = spinner("Applying border...");
    let params = OutlineParams::new(config.border_thickness, config.border_color);
    let raster = outline(&raster, &params).context("Failed to apply border")?;
    pb.finish_and_clear();

    Ok(RenderedMap {
        raster,
        scale: ramp.scale(),
        data_cells,
    })
}

/// Read, render and save according to `config`
pub fn run(config: &RenderConfig) -> Result<RenderReport> {
    config.validate()?;

    let pb = spinner("Reading samples...");
    let samples = read_samples(&config.input_file)
        .with_context(|| format!("Failed to read {}", config.input_file.display()))?;
    pb.finish_and_clear();
    info!("Input: {} samples", samples.len());

    let start = Instant::now();
    let RenderedMap {
        raster,
        scale,
        data_cells,
    } = render_samples(&samples, config)?;
    let elapsed = start.elapsed();
    let border_cells = raster.filled_count().saturating_sub(data_cells);

    let pb = spinner("Writing output...");
    save_image(&raster, &config.save_location).context("Failed to write output")?;
    pb.finish_and_clear();

    Ok(RenderReport {
        samples: samples.len(),
        rows: raster.rows(),
        cols: raster.cols(),
        data_cells,
        border_cells,
        scale,
        elapsed,
    })
}
