//! Topogra CLI - false-color maps from digital terrain models

mod config;
mod pipeline;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use topogra_colormap::{ColorRamp, OverflowPolicy, Rgb};
use topogra_core::io::read_samples;
use topogra_core::{summarize, GridLattice};

use config::RenderConfig;
use pipeline::spinner;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "topogra")]
#[command(author, version, about = "False-color maps from digital terrain models", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a DTM sample file to an image
    Render(RenderArgs),
    /// Show extents and height range of a DTM sample file
    Info {
        /// Input CSV file (x,y,height with a header line)
        input: PathBuf,
        /// Grid spacing in native units
        #[arg(short, long, default_value = "50")]
        resolution: i64,
        /// Origin shift subtracted from coordinates
        #[arg(long, default_value = "25")]
        offset: i64,
    },
}

/// Flags left unset fall back to the config file, then to built-in defaults
#[derive(Args)]
struct RenderArgs {
    /// Input CSV file (x,y,height with a header line)
    input: Option<PathBuf>,
    /// Output image; the extension picks the format (bmp, png)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// JSON file with base settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Grid spacing in native units
    #[arg(short, long)]
    resolution: Option<i64>,
    /// Origin shift subtracted from coordinates
    #[arg(long)]
    offset: Option<i64>,
    /// Border thickness in pixels
    #[arg(short, long)]
    border: Option<usize>,
    /// Border color as r,g,b or #rrggbb
    #[arg(long)]
    border_color: Option<Rgb>,
    /// Height multiplier applied before coloring
    #[arg(short, long)]
    scale: Option<f64>,
    /// Stretch the tallest sample to the top of the color ramp
    #[arg(long)]
    auto_scale: bool,
    /// Minimum channel sum for data pixels
    #[arg(long)]
    floor: Option<u8>,
    /// Heights past the ramp: clamp or reject
    #[arg(long)]
    overflow: Option<OverflowPolicy>,
    /// Keep the source row order instead of flipping the map vertically
    #[arg(long)]
    no_flip: bool,
}

impl RenderArgs {
    fn into_config(self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(v) = self.input {
            config.input_file = v;
        }
        if let Some(v) = self.output {
            config.save_location = v;
        }
        if let Some(v) = self.resolution {
            config.resolution = v;
        }
        if let Some(v) = self.offset {
            config.coordinate_offset = v;
        }
        if let Some(v) = self.border {
            config.border_thickness = v;
        }
        if let Some(v) = self.border_color {
            config.border_color = v;
        }
        if let Some(v) = self.scale {
            config.height_scale = v;
        }
        if let Some(v) = self.floor {
            config.height_floor = v;
        }
        if let Some(v) = self.overflow {
            config.overflow = v;
        }
        config.auto_scale |= self.auto_scale;
        if self.no_flip {
            config.flip_vertical = false;
        }

        Ok(config)
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn info_command(input: &Path, lattice: GridLattice) -> Result<()> {
    let pb = spinner("Reading samples...");
    let samples = read_samples(input).context("Failed to read samples")?;
    pb.finish_and_clear();

    let summary = summarize(&samples)?;
    let (rows, cols) = summary.raster_shape(&lattice)?;
    let cells = summary.raster_cells(&lattice)?;

    println!("File: {}", input.display());
    println!("Samples: {}", summary.count);
    println!("X range: {} - {}", summary.min_x, summary.max_x);
    println!("Y range: {} - {}", summary.min_y, summary.max_y);
    println!(
        "Raster: {} x {} ({} cells, {:.1}% sampled)",
        cols,
        rows,
        cells,
        100.0 * summary.count as f64 / cells as f64
    );
    println!("\nHeights:");
    println!("  Min: {}", summary.min_height);
    println!("  Max: {}", summary.max_height);
    if summary.submerged > 0 {
        println!("  Below zero (clamped): {}", summary.submerged);
    }
    println!(
        "  Scale to span the ramp: {:.4}",
        ColorRamp::fit_scale(summary.max_height)
    );
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Render(args) => {
            let config = args.into_config()?;
            let report = pipeline::run(&config)?;
            info!(
                "Rendered {} samples onto {} x {} (scale {:.4})",
                report.samples, report.cols, report.rows, report.scale
            );
            println!("Map saved to: {}", config.save_location.display());
            println!(
                "  Data cells: {}, border cells: {}",
                report.data_cells, report.border_cells
            );
            println!("  Processing time: {:.2?}", report.elapsed);
        }
        Commands::Info {
            input,
            resolution,
            offset,
        } => {
            info_command(&input, GridLattice::new(resolution, offset))?;
        }
    }

    Ok(())
}
