//! Hex colour parameters.

use image::Rgba;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    /// Parses `rgb` or `rrggbb`, with or without a leading `#`, in any case.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Canonical lowercase `rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_forms_are_equal() {
        assert_eq!(Color::parse("000"), Some(Color::BLACK));
        assert_eq!(Color::parse("#FFF"), Color::parse("ffffff"));
        assert_eq!(Color::parse("Ff0000").map(Color::to_hex).as_deref(), Some("ff0000"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Color::parse("").is_none());
        assert!(Color::parse("12345").is_none());
        assert!(Color::parse("zzz").is_none());
        assert!(Color::parse("ééé").is_none());
    }
}
