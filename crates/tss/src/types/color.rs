//! Packed RGBA colors.
//!
//! Colors are stored as a single `u32` laid out `0xRRGGBBAA`, the form the
//! stylesheet writes them in (`0xCC0000FF`).
//!
//! ## Supported Color Formats
//!
//! - **Packed**: `0xRRGGBBAA`, `0xRRGGBB` (alpha `ff`)
//! - **Hex**: `#RGB` (each digit doubled), `#RRGGBB` (alpha `ff`)
//! - **RGB**: `rgb(r, g, b)` with channels clamped to 255 (alpha `ff`)
//!
//! There are no named colors; palettes are expressed with variables.

use std::fmt;

use crate::error::ColorParseError;

/// A packed `0xRRGGBBAA` color.
///
/// # Examples
///
/// ```
/// use tss::types::Rgba;
///
/// let red = Rgba::parse("#f00").unwrap();
/// assert_eq!(red, Rgba(0xFF0000FF));
/// assert_eq!(red.r(), 255);
/// assert_eq!(red.a(), 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const WHITE: Rgba = Rgba(0xFFFF_FFFF);
    pub const BLACK: Rgba = Rgba(0x0000_00FF);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Channels scaled to `[0, 1]`, in `[r, g, b, a]` order.
    pub fn normalized(self) -> [f32; 4] {
        [self.r(), self.g(), self.b(), self.a()].map(|c| f32::from(c) / 255.0)
    }

    /// Adds `delta` to each color channel, clamping to `[0, 255]`. Alpha is kept.
    ///
    /// ```
    /// use tss::types::Rgba;
    ///
    /// let base = Rgba::rgb(100, 230, 20);
    /// assert_eq!(base.shifted(40), Rgba::rgb(140, 255, 60));
    /// assert_eq!(base.shifted(-50), Rgba::rgb(50, 180, 0));
    /// ```
    pub fn shifted(self, delta: i16) -> Self {
        let shift = |c: u8| (i16::from(c) + delta).clamp(0, 255) as u8;
        Self::from_rgba(shift(self.r()), shift(self.g()), shift(self.b()), self.a())
    }

    /// Parses a color in one of the supported formats.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim();

        if let Some(hex) = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            return match hex.len() {
                8 => Ok(Rgba(parse_hex(input, hex)?)),
                6 => Ok(Rgba(parse_hex(input, hex)? << 8 | 0xFF)),
                _ => Err(ColorParseError::new(input, "expected 6 or 8 hex digits after 0x")),
            };
        }

        if let Some(hex) = value.strip_prefix('#') {
            return match hex.len() {
                3 => {
                    let short = parse_hex(input, hex)?;
                    let expand = |nibble: u32| (nibble & 0xF) as u8 * 17;
                    Ok(Self::rgb(expand(short >> 8), expand(short >> 4), expand(short)))
                }
                6 => Ok(Rgba(parse_hex(input, hex)? << 8 | 0xFF)),
                _ => Err(ColorParseError::new(input, "expected 3 or 6 hex digits after #")),
            };
        }

        if value.starts_with("rgb(") {
            return parse_rgb_func(input, value);
        }

        Err(ColorParseError::new(input, "unsupported color format"))
    }

    /// Like [`Rgba::parse`], logging a warning and returning opaque white on failure.
    pub fn parse_or_white(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            log::warn!("TSS: {err}; expected a hex color or variable reference");
            Self::WHITE
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<u32, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(input, "invalid hex digit"));
    }
    u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::new(input, "invalid hex digit"))
}

fn parse_rgb_func(input: &str, value: &str) -> Result<Rgba, ColorParseError> {
    let content = value
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorParseError::new(input, "missing ')' in rgb function"))?;

    let channels: Vec<&str> = content.split(',').map(str::trim).collect();
    let [r, g, b] = channels.as_slice() else {
        return Err(ColorParseError::new(input, "rgb requires exactly 3 components"));
    };

    let channel = |s: &str| -> Result<u8, ColorParseError> {
        s.parse::<u32>()
            .map(|v| v.min(255) as u8)
            .map_err(|_| ColorParseError::new(input, "rgb components must be integers"))
    };
    Ok(Rgba::rgb(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_packed_forms() {
        assert_eq!(Rgba::parse("0xFF0000FF"), Ok(Rgba(0xFF00_00FF)));
        assert_eq!(Rgba::parse("0x336699"), Ok(Rgba(0x3366_99FF)));
        assert_eq!(Rgba::parse("0x11223344").unwrap().a(), 0x44);
    }

    #[test]
    fn parses_hash_forms() {
        assert_eq!(Rgba::parse("#f00"), Ok(Rgba::rgb(255, 0, 0)));
        assert_eq!(Rgba::parse("#0a0B0c"), Ok(Rgba::rgb(10, 11, 12)));
    }

    #[test]
    fn parses_rgb_function_with_clamping() {
        assert_eq!(Rgba::parse("rgb(10, 20, 30)"), Ok(Rgba::rgb(10, 20, 30)));
        assert_eq!(Rgba::parse("rgb(300,0,0)"), Ok(Rgba::rgb(255, 0, 0)));
        assert!(Rgba::parse("rgb(1,2)").is_err());
    }

    #[test]
    fn rejects_unsupported_formats() {
        assert!(Rgba::parse("red").is_err());
        assert!(Rgba::parse("#ff00").is_err());
        assert!(Rgba::parse("0xGG0000FF").is_err());
        assert!(Rgba::parse("0x+F0000FF").is_err());
    }

    #[test]
    fn fallback_is_opaque_white() {
        assert_eq!(Rgba::parse_or_white("bogus"), Rgba::WHITE);
    }

    #[test]
    fn normalized_channels() {
        assert_eq!(Rgba(0xFF00_00FF).normalized(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn display_is_packed_hex() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_string(), "0x010203FF");
    }
}
