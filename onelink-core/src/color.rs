//! Hex color parsing for the brand colors carried in static content.

/// An sRGB color with alpha, as parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct Color {
    /// Alpha channel, `0` transparent to `255` opaque.
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// Extracts a nibble at `shift` and expands it to a full byte (`0xF` → `0xFF`).
#[allow(clippy::cast_possible_truncation)]
const fn nibble(value: u64, shift: u32) -> u8 {
    ((value >> shift) & 0xF) as u8 * 17
}

/// Extracts the byte at `shift`.
#[allow(clippy::cast_possible_truncation)]
const fn byte(value: u64, shift: u32) -> u8 {
    ((value >> shift) & 0xFF) as u8
}

impl Color {
    /// Parses a hex color string.
    ///
    /// Accepts 3-digit RGB (`"#F80"`), 6-digit RGB (`"#2E69FB"`) and 8-digit
    /// ARGB (`"802E69FB"`). Non-alphanumeric characters (`#`, whitespace)
    /// are stripped first, then the longest leading run of hex digits is
    /// scanned while the *stripped* length picks the format, so trailing
    /// garbage reads as zero digits. Any other length yields opaque black.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let cleaned: String = hex
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();

        let mut value: u64 = 0;
        for c in cleaned
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .take(16)
        {
            value = (value << 4) | u64::from(c.to_digit(16).unwrap_or(0));
        }

        match cleaned.len() {
            3 => Self {
                alpha: 0xFF,
                red: nibble(value, 8),
                green: nibble(value, 4),
                blue: nibble(value, 0),
            },
            6 => Self {
                alpha: 0xFF,
                red: byte(value, 16),
                green: byte(value, 8),
                blue: byte(value, 0),
            },
            8 => Self {
                alpha: byte(value, 24),
                red: byte(value, 16),
                green: byte(value, 8),
                blue: byte(value, 0),
            },
            _ => Self {
                alpha: 0xFF,
                red: 0,
                green: 0,
                blue: 0,
            },
        }
    }
}

/// Parses a hex color string. See [`Color::from_hex`].
#[uniffi::export]
#[must_use]
pub fn color_from_hex(hex: String) -> Color {
    Color::from_hex(&hex)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("#2E69FB", (255, 0x2E, 0x69, 0xFB) ; "six digit with hash")]
    #[test_case("2E69FB", (255, 0x2E, 0x69, 0xFB) ; "six digit bare")]
    #[test_case(" 2E69FB ", (255, 0x2E, 0x69, 0xFB) ; "six digit padded")]
    #[test_case("#141F9D", (255, 0x14, 0x1F, 0x9D) ; "brand end color")]
    #[test_case("#50CEC3", (255, 0x50, 0xCE, 0xC3) ; "brand accent color")]
    #[test_case("#FFF", (255, 255, 255, 255) ; "three digit white")]
    #[test_case("F80", (255, 255, 0x88, 0) ; "three digit expands nibbles")]
    #[test_case("80FF0000", (0x80, 255, 0, 0) ; "eight digit argb")]
    #[test_case("", (255, 0, 0, 0) ; "empty falls back to black")]
    #[test_case("#12345", (255, 0, 0, 0) ; "five digits fall back to black")]
    #[test_case("nothex", (255, 0, 0, 0) ; "six non digits read as zero")]
    fn test_from_hex(hex: &str, argb: (u8, u8, u8, u8)) {
        let (alpha, red, green, blue) = argb;
        assert_eq!(
            Color::from_hex(hex),
            Color {
                alpha,
                red,
                green,
                blue
            }
        );
    }

    #[test]
    fn test_from_hex_scan_stops_at_first_non_digit() {
        // Eight alphanumerics, but only the first six are hex digits: the
        // scanned value stays 0x2E69FB while the length selects ARGB form.
        let color = Color::from_hex("2E69FBzz");
        assert_eq!(
            color,
            Color {
                alpha: 0x00,
                red: 0x2E,
                green: 0x69,
                blue: 0xFB
            }
        );
    }
}
