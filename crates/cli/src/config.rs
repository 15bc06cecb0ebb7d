//! Render configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use topogra_colormap::{ColorRamp, OverflowPolicy, Rgb};
use topogra_core::GridLattice;

/// Every knob of a render run.
///
/// Defaults match the OSNI 50m DTM: 50m spacing with samples at cell
/// centres, a three-cell white border, and a 1.8 height stretch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Comma-separated `x,y,height` dataset
    pub input_file: PathBuf,
    /// Grid spacing in native units
    pub resolution: i64,
    /// Origin shift subtracted from raw coordinates
    pub coordinate_offset: i64,
    /// Border rounds around the landmass
    pub border_thickness: usize,
    /// Output image; the extension picks the format
    pub save_location: PathBuf,
    /// Height multiplier applied before the color ramp
    pub height_scale: f64,
    pub border_color: Rgb,
    /// Minimum channel sum for any data pixel
    pub height_floor: u8,
    pub overflow: OverflowPolicy,
    /// Derive the height scale from the dataset's maximum height
    pub auto_scale: bool,
    /// Mirror the map top to bottom before outlining
    pub flip_vertical: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("50m_DTM.csv"),
            resolution: 50,
            coordinate_offset: 25,
            border_thickness: 3,
            save_location: PathBuf::from("output.bmp"),
            height_scale: 1.8,
            border_color: Rgb::WHITE,
            height_floor: 1,
            overflow: OverflowPolicy::Clamp,
            auto_scale: false,
            flip_vertical: true,
        }
    }
}

impl RenderConfig {
    /// Load a configuration from JSON; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn lattice(&self) -> GridLattice {
        GridLattice::new(self.resolution, self.coordinate_offset)
    }

    /// Color ramp for a dataset whose tallest sample is `max_height`
    pub fn ramp(&self, max_height: u32) -> Result<ColorRamp> {
        let scale = if self.auto_scale {
            ColorRamp::fit_scale(max_height)
        } else {
            self.height_scale
        };
        let ramp = ColorRamp::new(scale)?
            .with_floor(self.height_floor)
            .with_overflow(self.overflow);
        Ok(ramp)
    }

    /// Check parameters before touching any file
    pub fn validate(&self) -> Result<()> {
        self.lattice().validate()?;
        if !self.auto_scale {
            ColorRamp::new(self.height_scale)?;
        }
        if self.border_thickness > 0 && self.border_color == Rgb::BLACK {
            anyhow::bail!("Border color must not be black, the no-data color");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RenderConfig::default();
        assert_eq!(c.lattice(), GridLattice::new(50, 25));
        assert_eq!(c.border_thickness, 3);
        assert_eq!(c.border_color, Rgb::WHITE);
        assert!((c.height_scale - 1.8).abs() < f64::EPSILON);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.json");
        std::fs::write(
            &path,
            r#"{ "resolution": 10, "overflow": "reject", "border_color": { "r": 255, "g": 0, "b": 0 } }"#,
        )
        .unwrap();

        let c = RenderConfig::from_json_file(&path).unwrap();
        assert_eq!(c.resolution, 10);
        assert_eq!(c.coordinate_offset, 25);
        assert_eq!(c.overflow, OverflowPolicy::Reject);
        assert_eq!(c.border_color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let c = RenderConfig {
            resolution: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = RenderConfig {
            height_scale: -1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());

        let c = RenderConfig {
            border_color: Rgb::BLACK,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn auto_scale_ignores_fixed_scale() {
        let c = RenderConfig {
            auto_scale: true,
            height_scale: 0.0,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
        let ramp = c.ramp(1529).unwrap();
        assert!((ramp.scale() - 1.0).abs() < f64::EPSILON);
    }
}
