//! RGB colors parsed from hex strings or names, with linear-light conversion

use std::fmt;
use std::str::FromStr;

use crate::io::error::{PatternError, Result, invalid_parameter};

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

const NAMED_COLORS: [(&str, Rgb); 20] = [
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("silver", Rgb::new(192, 192, 192)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("olive", Rgb::new(128, 128, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("purple", Rgb::new(128, 0, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("brown", Rgb::new(165, 42, 42)),
];

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb` or a basic color name
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the text is not a recognised color
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = text.trim().to_ascii_lowercase();

        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| unknown_color(text));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|&(_, color)| color)
            .ok_or_else(|| unknown_color(text))
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels converted to linear light in `[0, 1]`
    pub fn to_linear(&self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|channel| srgb_to_linear(f64::from(channel) / 255.0))
    }

    /// Color from linear-light channels, clamped to `[0, 1]`
    pub fn from_linear(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(|channel| {
            (linear_to_srgb(channel.clamp(0.0, 1.0)) * 255.0).round() as u8
        });
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;

    match digits.as_slice() {
        &[r, g, b] => Some(Rgb::new(r * 17, g * 17, b * 17)),
        &[r1, r0, g1, g0, b1, b0] => Some(Rgb::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        _ => None,
    }
}

fn unknown_color(text: &str) -> PatternError {
    invalid_parameter(
        "color",
        &text,
        &"expected #rrggbb, #rgb or a basic color name",
    )
}

fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055_f64.mul_add(value.powf(1.0 / 2.4), -0.055)
    }
}
