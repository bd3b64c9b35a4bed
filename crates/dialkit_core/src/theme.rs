//! Face colors
//!
//! Three colors drive the whole face: primary (dial border, hands, center
//! dot, numerals), secondary (background), tertiary (tick marks). Each has
//! a hard-coded default; malformed configuration strings fall back to the
//! default for that slot.

/// An RGBA color with components in 0.0-1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit components
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => {
                let mut color = Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?);
                color.a = byte(6)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Components as an RGBA array (for GPU upload)
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Default primary color: dark grey
pub const DEFAULT_PRIMARY: Color = Color::from_rgb8(0x44, 0x44, 0x44);
/// Default secondary color: white
pub const DEFAULT_SECONDARY: Color = Color::WHITE;
/// Default tertiary color: grey
pub const DEFAULT_TERTIARY: Color = Color::from_rgb8(0x88, 0x88, 0x88);

/// The three customizable face colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Dial border, hands, center dot, and numerals
    pub primary: Color,
    /// Background
    pub secondary: Color,
    /// Tick marks
    pub tertiary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY,
            secondary: DEFAULT_SECONDARY,
            tertiary: DEFAULT_TERTIARY,
        }
    }
}

impl Theme {
    /// Build a theme from configured hex strings
    ///
    /// A string that fails to parse leaves that slot at its default and
    /// logs a warning; rendering always proceeds.
    pub fn from_strings(primary: &str, secondary: &str, tertiary: &str) -> Self {
        let parse = |name: &str, value: &str, default: Color| {
            Color::from_hex(value).unwrap_or_else(|| {
                log::warn!("Invalid {} color {:?}, using default", name, value);
                default
            })
        };
        Self {
            primary: parse("primary", primary, DEFAULT_PRIMARY),
            secondary: parse("secondary", secondary, DEFAULT_SECONDARY),
            tertiary: parse("tertiary", tertiary, DEFAULT_TERTIARY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_rgba() {
        let c = Color::from_hex("#00000080").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("ff8000"), None); // missing '#'
        assert_eq!(Color::from_hex("#ff80"), None); // wrong length
        assert_eq!(Color::from_hex("#gg8000"), None); // not hex
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
        assert_eq!(theme.secondary, Color::WHITE);
        assert_eq!(theme.tertiary, DEFAULT_TERTIARY);
    }

    #[test]
    fn test_from_strings_valid() {
        let theme = Theme::from_strings("#102030", "#ffffff", "#808080");
        assert_eq!(theme.primary, Color::from_rgb8(0x10, 0x20, 0x30));
        assert_eq!(theme.secondary, Color::WHITE);
        assert_eq!(theme.tertiary, Color::from_rgb8(0x80, 0x80, 0x80));
    }

    #[test]
    fn test_from_strings_malformed_falls_back_per_slot() {
        let theme = Theme::from_strings("nonsense", "#112233", "");
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
        assert_eq!(theme.secondary, Color::from_rgb8(0x11, 0x22, 0x33));
        assert_eq!(theme.tertiary, DEFAULT_TERTIARY);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::BLACK.with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.r, 0.0);
    }

    #[test]
    fn test_to_array() {
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
    }
}
