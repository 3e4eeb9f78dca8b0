use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kind of a digital card. Fixed, closed set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Hash,
    Display,
    Serialize,
    Deserialize,
    uniffi::Enum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A payment card issued by a bank.
    Bank,
    /// A rewards / loyalty program card.
    Loyalty,
    /// Anything else the user wants to keep in the wallet.
    Other,
}

impl CardKind {
    /// Returns the human-readable form shown by the add/edit pickers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bank => "Bank Card",
            Self::Loyalty => "Loyalty Card",
            Self::Other => "Other",
        }
    }
}

/// A digital card in the user's wallet.
///
/// The `id` is assigned once at creation and never changes afterwards;
/// add/edit operations on [`crate::CardStore`] preserve it. All other fields
/// are replaced wholesale by an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Card {
    /// Opaque unique identifier (UUID string). Immutable, never reused.
    pub id: String,
    /// What kind of card this is.
    pub kind: CardKind,
    /// Display title. Non-empty for every card created through the store.
    pub title: String,
    /// Free-form details line shown under the title.
    pub details: String,
}

/// Well-known id of the seeded bank card.
///
/// Seed ids are fixed so that a default persisted in one launch still
/// resolves against the seeded collection of the next launch.
pub(crate) const SEED_BANK_CARD_ID: &str = "c5a4e2de-8d4f-4b1a-9f63-0d6f4f9b3a10";

/// Well-known id of the seeded loyalty card.
pub(crate) const SEED_LOYALTY_CARD_ID: &str = "7e9b1d6a-52c3-4f0e-8a4d-2b8c6d1e5f20";

/// The two built-in example cards every store starts with.
pub(crate) fn seed_cards() -> Vec<Card> {
    vec![
        Card {
            id: SEED_BANK_CARD_ID.to_string(),
            kind: CardKind::Bank,
            title: "Bank Card".to_string(),
            details: "Visa **** 1234".to_string(),
        },
        Card {
            id: SEED_LOYALTY_CARD_ID.to_string(),
            kind: CardKind::Loyalty,
            title: "Loyalty Card".to_string(),
            details: "Rewards: 150 points".to_string(),
        },
    ]
}
