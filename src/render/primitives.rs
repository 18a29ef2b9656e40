use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string (`rgba(0,0,255,0.1)`), which is the form
/// charting front-ends accept for dataset styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses `rgba(r,g,b,a)`, `rgb(r,g,b)`, `#rrggbb` or
    /// `color(srgb r g b / a)` with normalized channels.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(input.to_owned());
        let trimmed = input.trim();

        if let Some(body) = trimmed.strip_prefix("color(") {
            let body = body.strip_suffix(')').ok_or_else(invalid)?;
            let mut parts = body.split_whitespace();
            if parts.next() != Some("srgb") {
                return Err(invalid());
            }
            let parts: Vec<&str> = parts.collect();
            let (rgb, alpha) = match parts.as_slice() {
                [r, g, b] => ([*r, *g, *b], "1"),
                [r, g, b, "/", a] => ([*r, *g, *b], *a),
                _ => return Err(invalid()),
            };
            let mut channels = [0.0; 4];
            for (slot, part) in channels.iter_mut().zip(rgb.iter().chain([&alpha])) {
                *slot = part.parse::<f64>().map_err(|_| invalid())?;
            }
            let color = Self::rgba(channels[0], channels[1], channels[2], channels[3]);
            color.validate().map_err(|_| invalid())?;
            return Ok(color);
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
            };
            return Ok(Self::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0));
        }

        let (body, expects_alpha) = if let Some(body) = trimmed.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = trimmed.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        let alpha = if expects_alpha {
            parts[3].parse::<f64>().map_err(|_| invalid())?
        } else {
            1.0
        };

        let color = Self::from_rgba8(rgb[0], rgb[1], rgb[2], alpha);
        color.validate().map_err(|_| invalid())?;
        Ok(color)
    }

    /// Formats as `rgba(r,g,b,a)` when every channel is an exact 8-bit value,
    /// otherwise as `color(srgb r g b / a)` so parsing it back is lossless.
    #[must_use]
    pub fn to_css(self) -> String {
        match (
            exact_rgb8(self.red),
            exact_rgb8(self.green),
            exact_rgb8(self.blue),
        ) {
            (Some(red), Some(green), Some(blue)) => {
                format!("rgba({red},{green},{blue},{})", self.alpha)
            }
            _ => format!(
                "color(srgb {} {} {} / {})",
                self.red, self.green, self.blue, self.alpha
            ),
        }
    }
}

/// 8-bit channel whose `/ 255` reproduces `value` exactly.
fn exact_rgb8(value: f64) -> Option<u8> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return None;
    }
    let scaled = (value * 255.0).round() as u8;
    (f64::from(scaled) / 255.0 == value).then_some(scaled)
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::parse_css(input)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(input: String) -> ChartResult<Self> {
        Self::parse_css(&input)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
