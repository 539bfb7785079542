//! Bar colors stored as `#rrggbb` hex values.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color: {0:?}")]
pub struct ColorParseError(pub String);

/// An opaque sRGB color as entered through the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

/// Color given to every freshly added data point.
pub const DEFAULT_BAR_COLOR: HexColor = HexColor([0x3b, 0x82, 0xf6]);

/// Palette cycled through for imported rows.
pub const PALETTE: [HexColor; 10] = [
    HexColor([59, 130, 246]),  // Blue
    HexColor([231, 76, 60]),   // Red
    HexColor([46, 204, 113]),  // Green
    HexColor([155, 89, 182]),  // Purple
    HexColor([243, 156, 18]),  // Orange
    HexColor([26, 188, 156]),  // Teal
    HexColor([233, 30, 99]),   // Pink
    HexColor([0, 188, 212]),   // Cyan
    HexColor([121, 85, 72]),   // Brown
    HexColor([96, 125, 139]),  // Blue Grey
];

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    /// Palette entry for the n-th imported row.
    pub fn palette(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

impl Default for HexColor {
    fn default() -> Self {
        DEFAULT_BAR_COLOR
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
            }
            // #rgb shorthand: each nibble is doubled
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Self([channel(0)?, channel(1)?, channel(2)?]))
            }
            _ => Err(err()),
        }
    }
}
