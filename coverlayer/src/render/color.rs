//! RGBA color values.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{0}' (expected #rgb, #rrggbb or #rrggbbaa)")]
pub struct ParseColorError(pub String);

/// A straight-alpha 8-bit RGBA color.
///
/// # Examples
///
/// ```
/// use coverlayer::render::Rgba;
///
/// let color: Rgba = "#f55".parse().unwrap();
/// assert_eq!(color, Rgba::new(255, 85, 85, 255));
/// assert_eq!(color.with_opacity(0.5).a, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scale the alpha channel by `opacity` (clamped to `0.0..=1.0`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        Self {
            a: (self.a as f32 * opacity).round() as u8,
            ..self
        }
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(err)?;

        // #rgb is shorthand for #rrggbb
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        match hex::decode(&expanded).map_err(|_| err())?.as_slice() {
            &[r, g, b] => Ok(Rgba::rgb(r, g, b)),
            &[r, g, b, a] => Ok(Rgba::new(r, g, b, a)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_hex() {
        assert_eq!("#000".parse::<Rgba>().unwrap(), Rgba::BLACK);
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("#3a9".parse::<Rgba>().unwrap(), Rgba::rgb(0x33, 0xaa, 0x99));
    }

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(
            "#3388ff".parse::<Rgba>().unwrap(),
            Rgba::new(0x33, 0x88, 0xff, 255)
        );
        assert_eq!(
            "#3388ff80".parse::<Rgba>().unwrap(),
            Rgba::new(0x33, 0x88, 0xff, 0x80)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("000".parse::<Rgba>().is_err());
        assert!("#12".parse::<Rgba>().is_err());
        assert!("#1234".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#gggggg".parse::<Rgba>().is_err());
        assert!("#ффф".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["#000000", "#ff5555", "#3388ff80"] {
            let color: Rgba = s.parse().unwrap();
            assert_eq!(color.to_string(), s);
        }
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(Rgba::BLACK.with_opacity(1.0).a, 255);
        assert_eq!(Rgba::BLACK.with_opacity(0.5).a, 128);
        assert_eq!(Rgba::BLACK.with_opacity(0.0).a, 0);
        assert_eq!(Rgba::BLACK.with_opacity(2.0).a, 255);
        assert_eq!(Rgba::BLACK.with_opacity(f32::NAN).a, 0);
        assert_eq!(Rgba::new(0, 0, 0, 128).with_opacity(0.5).a, 64);
    }
}
