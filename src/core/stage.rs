//=========================================================================
// Stage
//=========================================================================
//
// Root display settings shared by every state.
//
// The stage outlives state switches: a background color set during one
// state's preload stays in effect until another state changes it.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Color ===============================================================

/// Straight-alpha sRGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {input:?}")]
pub struct ParseColorError {
    pub input: String,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    ///
    /// Short forms expand each digit (`#7cf` is `#77ccff`).
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError { input: input.to_string() };

        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(err()),
        }
    }

    /// Formats as lowercase `#rrggbb` (alpha is dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

//=== Stage ===============================================================

/// Display-level settings of the running game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage {
    pub background_color: Color,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background from a hex string.
    ///
    /// On a parse failure the previous color is kept.
    pub fn set_background_color(&mut self, hex: &str) -> Result<(), ParseColorError> {
        self.background_color = Color::from_hex(hex)?;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
