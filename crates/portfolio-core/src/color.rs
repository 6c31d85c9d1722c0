//! Particle color model and the small slice of CSS color handling the
//! console's `color` command needs. Arbitrary CSS color expressions are
//! resolved by the web layer; this module only understands hex literals.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("malformed hex color: {0}")]
    MalformedHex(String),
}

/// Free-floating RGB channels. Kept as `f32` so per-frame exponential
/// blending accumulates fractionally; flooring happens at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Exponential step toward `target`: `c += (target - c) * rate`.
    pub fn blend_toward(&mut self, target: Rgb, rate: f32) {
        self.r += (target.r - self.r) * rate;
        self.g += (target.g - self.g) * rate;
        self.b += (target.b - self.b) * rate;
    }

    /// Opaque CSS color with floored channels, e.g. `rgb(255, 96, 0)`.
    pub fn css(&self) -> String {
        format!(
            "rgb({}, {}, {})",
            self.r.floor() as i32,
            self.g.floor() as i32,
            self.b.floor() as i32
        )
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn parse_hex(value: &str) -> Result<Rgb, ColorParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MalformedHex(trimmed.to_owned()))?;
        let malformed = || ColorParseError::MalformedHex(trimmed.to_owned());
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| malformed());
        match digits.len() {
            3 => {
                let mut out = [0f32; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    out[i] = (v * 16 + v) as f32;
                }
                Ok(Rgb::new(out[0], out[1], out[2]))
            }
            6 => Ok(Rgb::new(
                channel(&digits[0..2])? as f32,
                channel(&digits[2..4])? as f32,
                channel(&digits[4..6])? as f32,
            )),
            _ => Err(malformed()),
        }
    }
}

/// Site accent color as shipped; the `color` command replaces the palette
/// base derived from it.
pub const DEFAULT_PRIMARY_HEX: &str = "#FF6000";

pub const BASE_COLOR: Rgb = Rgb::new(255.0, 96.0, 0.0);
pub const REPEL_COLOR: Rgb = Rgb::new(0.0, 209.0, 255.0);
pub const ATTRACT_COLOR: Rgb = Rgb::new(255.0, 255.0, 255.0);

/// The three color targets particles blend between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Resting color; follows the theme's `--primary`.
    pub base: Rgb,
    pub repel: Rgb,
    pub attract: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: BASE_COLOR,
            repel: REPEL_COLOR,
            attract: ATTRACT_COLOR,
        }
    }
}
