//! Color representation with packed ARGB conversion.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Unpack a `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Pack into a `0xAARRGGBB` value, rounding each channel.
    #[must_use]
    pub fn to_argb(&self) -> u32 {
        u32::from_be_bytes([
            channel(self.a),
            channel(self.r),
            channel(self.g),
            channel(self.b),
        ])
    }

    /// Parse a hex color string in ARGB order.
    ///
    /// Accepts `#RRGGBB` (opaque) and `#AARRGGBB`; the leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_argb_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }
        let value = match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(|rgb| 0xFF00_0000 | rgb),
            8 => u32::from_str_radix(hex, 16),
            _ => return Err(ColorParseError::InvalidLength),
        }
        .map_err(|_| ColorParseError::InvalidHex)?;
        Ok(Self::from_argb(value))
    }

    /// Format as `#AARRGGBB`.
    #[must_use]
    pub fn to_argb_hex(&self) -> String {
        format!("#{:08X}", self.to_argb())
    }

    /// Linear interpolation between two colors, channel by channel.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Serde adapter reading a [`Color`] from a packed ARGB value.
///
/// Accepts `"#AARRGGBB"` / `"#RRGGBB"` strings or a plain integer such as
/// `0xFF00FF00`, and writes `"#AARRGGBB"`.
///
/// ```
/// use flipbadge_core::Color;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Swatch {
///     #[serde(with = "flipbadge_core::color::argb")]
///     fill: Color,
/// }
///
/// let swatch: Swatch = serde_json::from_str(r##"{"fill": "#FF00FF00"}"##).unwrap();
/// assert_eq!(swatch.fill.to_argb(), 0xFF00_FF00);
/// ```
pub mod argb {
    use super::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Packed {
        Int(u32),
        Hex(String),
    }

    /// Serialize as `"#AARRGGBB"`.
    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_argb_hex())
    }

    /// Deserialize from a hex string or a packed integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        match Packed::deserialize(deserializer)? {
            Packed::Int(value) => Ok(Color::from_argb(value)),
            Packed::Hex(hex) => Color::from_argb_hex(&hex)
                .map_err(|e| de::Error::custom(format!("color {hex:?}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_argb_green() {
        let c = Color::from_argb(0xFF00_FF00);
        assert_eq!(c, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_color_from_argb_alpha_first() {
        let c = Color::from_argb(0x80FF_0000);
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_argb_hex() {
        assert_eq!(
            Color::from_argb_hex("#FFFF0000").unwrap(),
            Color::from_argb(0xFFFF_0000)
        );
        assert_eq!(
            Color::from_argb_hex("00ff00").unwrap(),
            Color::from_argb(0xFF00_FF00)
        );
    }

    #[test]
    fn test_color_from_argb_hex_invalid() {
        assert_eq!(
            Color::from_argb_hex("#gg0000"),
            Err(ColorParseError::InvalidHex)
        );
        assert_eq!(
            Color::from_argb_hex("#+f0000"),
            Err(ColorParseError::InvalidHex)
        );
        assert_eq!(
            Color::from_argb_hex("#ff"),
            Err(ColorParseError::InvalidLength)
        );
    }

    #[test]
    fn test_color_to_argb_hex() {
        assert_eq!(Color::from_argb(0xFF12_34AB).to_argb_hex(), "#FF1234AB");
    }

    #[test]
    fn test_color_lerp_midpoint() {
        let red = Color::from_argb(0xFFFF_0000);
        let green = Color::from_argb(0xFF00_FF00);
        let mid = red.lerp(&green, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert!((mid.g - 0.5).abs() < 0.001);
        assert_eq!(mid.b, 0.0);
        assert_eq!(mid.a, 1.0);
    }

    #[test]
    fn test_color_lerp_clamps_t() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(&b, -1.0), a);
        assert_eq!(a.lerp(&b, 2.0), b);
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidHex.to_string(),
            "invalid hex characters"
        );
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }

    #[test]
    fn test_argb_serde_accepts_integer_and_string() {
        #[derive(Deserialize, Serialize)]
        struct Swatch {
            #[serde(with = "argb")]
            fill: Color,
        }

        let from_int: Swatch = serde_json::from_str(r#"{"fill": 4278255360}"#).unwrap();
        assert_eq!(from_int.fill.to_argb(), 0xFF00_FF00);

        let from_str: Swatch = serde_json::from_str(r##"{"fill": "#FFFF0000"}"##).unwrap();
        assert_eq!(from_str.fill.to_argb(), 0xFFFF_0000);

        let json = serde_json::to_string(&from_str).unwrap();
        assert_eq!(json, r##"{"fill":"#FFFF0000"}"##);

        assert!(serde_json::from_str::<Swatch>(r#"{"fill": "nope"}"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_argb_roundtrip(value in any::<u32>()) {
            prop_assert_eq!(Color::from_argb(value).to_argb(), value);
        }

        #[test]
        fn prop_lerp_stays_between_endpoints(from in any::<u32>(), to in any::<u32>(), t in 0.0f32..=1.0) {
            let a = Color::from_argb(from);
            let b = Color::from_argb(to);
            let c = a.lerp(&b, t);
            for (x, lo, hi) in [(c.r, a.r, b.r), (c.g, a.g, b.g), (c.b, a.b, b.b), (c.a, a.a, b.a)] {
                prop_assert!(x >= lo.min(hi) - 1e-5 && x <= lo.max(hi) + 1e-5);
            }
        }
    }
}
