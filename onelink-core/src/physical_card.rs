//! The static physical-card descriptor shown above the digital list.

/// Display content for the user's physical One-Link card.
///
/// Purely decorative: the wallet tab renders it above the digital cards, and
/// nothing in the card store references it. Colors are hex strings the host
/// feeds through [`crate::Color::from_hex`] or its own color type.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PhysicalCard {
    /// Brand name printed on the card.
    pub brand: String,
    /// Masked card number.
    pub number: String,
    /// Cardholder name.
    pub cardholder: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Gradient start color, hex.
    pub gradient_start_hex: String,
    /// Gradient end color, hex.
    pub gradient_end_hex: String,
    /// Accent color for the contactless glyphs, hex.
    pub accent_hex: String,
}

/// Returns the physical-card descriptor the wallet tab renders.
#[uniffi::export]
#[must_use]
pub fn physical_card() -> PhysicalCard {
    PhysicalCard {
        brand: "One-Link".to_string(),
        number: "**** **** **** 1234".to_string(),
        cardholder: "John Doe".to_string(),
        expiry: "12/25".to_string(),
        gradient_start_hex: "#2E69FB".to_string(),
        gradient_end_hex: "#141F9D".to_string(),
        accent_hex: "#50CEC3".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::Color;

    use super::*;

    #[test]
    fn test_physical_card_content() {
        let card = physical_card();
        assert_eq!(card.brand, "One-Link");
        assert_eq!(card.number, "**** **** **** 1234");
        assert_eq!(card.cardholder, "John Doe");
        assert_eq!(card.expiry, "12/25");
    }

    #[test]
    fn test_physical_card_colors_parse() {
        let card = physical_card();
        let opaque_black = Color::from_hex("");
        for hex in [
            &card.gradient_start_hex,
            &card.gradient_end_hex,
            &card.accent_hex,
        ] {
            assert_ne!(Color::from_hex(hex), opaque_black, "{hex} should parse");
        }
    }
}
