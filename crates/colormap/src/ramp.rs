//! The six-segment elevation color ramp.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use topogra_core::{Error, RasterElement, Result};

/// Steps in one ramp segment
pub const SEGMENT_STEPS: u64 = 255;

/// Total steps across the six segments
pub const RAMP_STEPS: u64 = SEGMENT_STEPS * 6;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, the "no data" pixel.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Channel sum, used for the visibility floor
    fn intensity(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl RasterElement for Rgb {
    fn empty() -> Self {
        Rgb::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts `r,g,b` or `#rrggbb`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidParameter {
            name: "color",
            value: s.to_string(),
            reason: "expected 'r,g,b' or '#rrggbb'".to_string(),
        };

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        Ok(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
    }
}

/// What to do with a height whose ramp index runs past the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Pin to the last step of the ramp
    #[default]
    Clamp,
    /// Fail with [`Error::OutOfRangeHeight`]
    Reject,
}

impl FromStr for OverflowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(OverflowPolicy::Clamp),
            "reject" | "error" => Ok(OverflowPolicy::Reject),
            _ => Err(Error::InvalidParameter {
                name: "overflow",
                value: s.to_string(),
                reason: "use clamp or reject".to_string(),
            }),
        }
    }
}

/// Maps heights to colors along a fixed hue cycle.
///
/// The ramp index is `floor(height * scale)`. Each of the six segments
/// moves one channel by one step per index:
///
/// | segment | r | g | b |
/// |---|---|---|---|
/// | 0 | 0 | 0 | rem |
/// | 1 | 0 | rem | 255 |
/// | 2 | 0 | 255 | 255-rem |
/// | 3 | rem | 255 | 0 |
/// | 4 | 255 | 255-rem | 0 |
/// | 5 | 255 | 0 | rem |
///
/// Colors whose channel sum falls below `floor` get `b = floor`, so the
/// lowest ground never renders as the black "no data" pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    scale: f64,
    floor: u8,
    overflow: OverflowPolicy,
}

impl ColorRamp {
    /// Create a ramp with floor 1 and clamping overflow
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "height_scale",
                value: scale.to_string(),
                reason: "scale must be a finite number above zero".to_string(),
            });
        }
        Ok(Self {
            scale,
            floor: 1,
            overflow: OverflowPolicy::default(),
        })
    }

    /// Set the visibility floor
    pub fn with_floor(mut self, floor: u8) -> Self {
        self.floor = floor;
        self
    }

    /// Set the overflow policy
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Scale that stretches heights up to `max_height` across the whole ramp
    pub fn fit_scale(max_height: u32) -> f64 {
        if max_height == 0 {
            return 1.0;
        }
        (RAMP_STEPS - 1) as f64 / max_height as f64
    }

    /// Unclamped ramp index of a height
    pub fn index_for(&self, height: u32) -> u64 {
        // Saturating float-to-int cast
        (height as f64 * self.scale).floor() as u64
    }

    /// Color of a height
    pub fn color_for(&self, height: u32) -> Result<Rgb> {
        let mut index = self.index_for(height);
        if index >= RAMP_STEPS {
            match self.overflow {
                OverflowPolicy::Clamp => index = RAMP_STEPS - 1,
                OverflowPolicy::Reject => {
                    return Err(Error::OutOfRangeHeight { height, index });
                }
            }
        }

        let mut rgb = segment_color(index);
        if rgb.intensity() < self.floor as u16 {
            rgb.b = self.floor;
        }
        Ok(rgb)
    }
}

/// Color at an index below `RAMP_STEPS`
fn segment_color(index: u64) -> Rgb {
    let rem = (index % SEGMENT_STEPS) as u8;
    match index / SEGMENT_STEPS {
        0 => Rgb::new(0, 0, rem),
        1 => Rgb::new(0, rem, 255),
        2 => Rgb::new(0, 255, 255 - rem),
        3 => Rgb::new(rem, 255, 0),
        4 => Rgb::new(255, 255 - rem, 0),
        _ => Rgb::new(255, 0, rem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_ramp() -> ColorRamp {
        ColorRamp::new(1.0).unwrap()
    }

    #[test]
    fn zero_height_gets_floor() {
        for scale in [0.01, 1.0, 1.8, 250.0] {
            let ramp = ColorRamp::new(scale).unwrap();
            assert_eq!(ramp.color_for(0).unwrap(), Rgb::new(0, 0, 1));
        }
        let ramp = unit_ramp().with_floor(40);
        assert_eq!(ramp.color_for(0).unwrap(), Rgb::new(0, 0, 40));
        // Floor only lifts dim colors
        assert_eq!(ramp.color_for(100).unwrap(), Rgb::new(0, 0, 100));
    }

    #[test]
    fn segment_table() {
        let ramp = unit_ramp();
        assert_eq!(ramp.color_for(100).unwrap(), Rgb::new(0, 0, 100));
        assert_eq!(ramp.color_for(255 + 100).unwrap(), Rgb::new(0, 100, 255));
        assert_eq!(ramp.color_for(510 + 100).unwrap(), Rgb::new(0, 255, 155));
        assert_eq!(ramp.color_for(765 + 100).unwrap(), Rgb::new(100, 255, 0));
        assert_eq!(ramp.color_for(1020 + 100).unwrap(), Rgb::new(255, 155, 0));
        assert_eq!(ramp.color_for(1275 + 100).unwrap(), Rgb::new(255, 0, 100));
    }

    #[test]
    fn continuous_across_block_boundary() {
        let ramp = unit_ramp();
        assert_eq!(ramp.color_for(254).unwrap(), Rgb::new(0, 0, 254));
        assert_eq!(ramp.color_for(255).unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn every_step_moves_one_channel_by_one() {
        let ramp = unit_ramp();
        let mut prev = ramp.color_for(1).unwrap();
        for h in 2..RAMP_STEPS as u32 {
            let c = ramp.color_for(h).unwrap();
            let dist = (c.r as i32 - prev.r as i32).abs()
                + (c.g as i32 - prev.g as i32).abs()
                + (c.b as i32 - prev.b as i32).abs();
            assert_eq!(dist, 1, "jump between {} and {}", h - 1, h);
            prev = c;
        }
    }

    #[test]
    fn scale_is_applied_before_flooring() {
        let ramp = ColorRamp::new(1.8).unwrap();
        assert_eq!(ramp.index_for(10), 18);
        assert_eq!(ramp.color_for(10).unwrap(), Rgb::new(0, 0, 18));
        assert_eq!(ramp.color_for(20).unwrap(), Rgb::new(0, 0, 36));
        // 200 * 1.8 = 360 -> segment 1, rem 105
        assert_eq!(ramp.color_for(200).unwrap(), Rgb::new(0, 105, 255));
    }

    #[test]
    fn overflow_clamps_to_top_color() {
        let ramp = unit_ramp();
        assert_eq!(ramp.color_for(1529).unwrap(), Rgb::new(255, 0, 254));
        assert_eq!(ramp.color_for(1530).unwrap(), Rgb::new(255, 0, 254));
        assert_eq!(ramp.color_for(u32::MAX).unwrap(), Rgb::new(255, 0, 254));
    }

    #[test]
    fn overflow_rejects_when_asked() {
        let ramp = unit_ramp().with_overflow(OverflowPolicy::Reject);
        assert!(ramp.color_for(1529).is_ok());
        match ramp.color_for(1530) {
            Err(Error::OutOfRangeHeight { height, index }) => {
                assert_eq!(height, 1530);
                assert_eq!(index, 1530);
            }
            other => panic!("expected OutOfRangeHeight, got {other:?}"),
        }
    }

    #[test]
    fn invalid_scale() {
        assert!(ColorRamp::new(0.0).is_err());
        assert!(ColorRamp::new(-1.8).is_err());
        assert!(ColorRamp::new(f64::NAN).is_err());
        assert!(ColorRamp::new(f64::INFINITY).is_err());
    }

    #[test]
    fn fit_scale_reaches_last_step() {
        let scale = ColorRamp::fit_scale(850);
        let ramp = ColorRamp::new(scale)
            .unwrap()
            .with_overflow(OverflowPolicy::Reject);
        assert!(ramp.index_for(850) >= RAMP_STEPS - 2);
        assert!(ramp.color_for(850).is_ok());
        assert_eq!(ColorRamp::fit_scale(0), 1.0);
    }

    #[test]
    fn parse_rgb() {
        assert_eq!("255,255,255".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!(" 12, 0 ,200 ".parse::<Rgb>().unwrap(), Rgb::new(12, 0, 200));
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert!("256,0,0".parse::<Rgb>().is_err());
        assert!("#ff80".parse::<Rgb>().is_err());
        assert!("1,2".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "1,2,3");
    }

    #[test]
    fn parse_overflow_policy() {
        assert_eq!("clamp".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Clamp);
        assert_eq!("Reject".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Reject);
        assert!("wrap".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn black_is_empty() {
        assert!(Rgb::BLACK.is_empty());
        assert!(!Rgb::new(0, 0, 1).is_empty());
    }
}
