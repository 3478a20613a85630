//! Colors and categorical palettes
//!
//! Colors are parsed from the strings found in configuration (`#RRGGBB`,
//! `#RGB` or a handful of CSS names) and written back out as hex.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create a color from hex string (e.g., "#FF5733", "FF5733" or "#F53")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

        match hex.len() {
            6 => Some(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let double = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Some(Self::rgb(double(0)?, double(1)?, double(2)?))
            }
            _ => None,
        }
    }

    /// Parse a hex string or a supported CSS color name
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        let hex = match value.to_ascii_lowercase().as_str() {
            "black" => "#000000",
            "white" => "#ffffff",
            "gray" | "grey" => "#808080",
            "steelblue" => "#4682b4",
            "red" => "#ff0000",
            "green" => "#008000",
            "blue" => "#0000ff",
            "orange" => "#ffa500",
            _ => return None,
        };
        Self::from_hex(hex)
    }

    /// Convert to lowercase hex string, as written into SVG attributes
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// The ten-color categorical palette used for series colors
pub fn category10() -> Vec<Color> {
    [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
        "#bcbd22", "#17becf",
    ]
    .iter()
    .filter_map(|hex| Color::from_hex(hex))
    .collect()
}

/// Parse a list of color strings, reporting the first one that fails
pub fn parse_palette(values: &[String]) -> Result<Vec<Color>, String> {
    values
        .iter()
        .map(|v| Color::parse(v).ok_or_else(|| v.clone()))
        .collect()
}
