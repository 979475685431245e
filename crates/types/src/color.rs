//! Color types used by styled output and the color scheme.
//!
//! Colors serialize as hex strings (`#rgb`, `#rrggbb` or `#rrggbbaa`) so the
//! scheme can be written by hand in the config file.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

use crate::tier::SeverityTier;

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(hex.to_string()));
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ParseColorError(hex.to_string()));
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let nibble = byte(&c.to_string())?;
                    channels[i] = nibble * 17;
                }
                Ok(Self::from_rgba8(channels[0], channels[1], channels[2], 255))
            }
            6 => Ok(Self::from_rgba8(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                255,
            )),
            8 => Ok(Self::from_rgba8(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])?,
            )),
            _ => Err(ParseColorError(hex.to_string())),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0:?}")]
pub struct ParseColorError(pub String);

/// Named colors, loaded once at startup and shared by every formatter.
///
/// Formatters refer to colors by name ("good", "degraded", "bad"), never
/// by value, so swapping the scheme restyles the whole bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScheme(HashMap<String, Color>);

impl ColorScheme {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Look up a color by name
    pub fn get(&self, name: &str) -> Option<Color> {
        self.0.get(name).copied()
    }

    /// Color for a severity tier, if the tier maps to a scheme entry
    pub fn tier(&self, tier: SeverityTier) -> Option<Color> {
        tier.scheme_key().and_then(|key| self.get(key))
    }

    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.0.insert(name.into(), color);
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::empty()
            .with("good", Color::from_rgba8(0x00, 0xff, 0x00, 0xff))
            .with("bad", Color::from_rgba8(0xff, 0x00, 0x00, 0xff))
            .with("degraded", Color::from_rgba8(0xff, 0xff, 0x00, 0xff))
    }
}
