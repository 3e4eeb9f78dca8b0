//! Static map content for the "Where is?" tab.
//!
//! The prototype shows two hardcoded pins near Leipzig: where the user is
//! and where the physical card is. This is dummy display data, not a live
//! tracking feed, and it has no coupling to the card store.

/// What a map pin marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PinKind {
    /// The user's own position.
    User,
    /// The physical card's position.
    Card,
}

impl PinKind {
    /// Caption shown under the pin's glyph.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Card => "Card",
        }
    }
}

/// A single annotation on the tracking map.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct MapPin {
    /// What this pin marks.
    pub kind: PinKind,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// The region the tracking map initially frames.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct MapRegion {
    /// Center latitude in degrees.
    pub center_latitude: f64,
    /// Center longitude in degrees.
    pub center_longitude: f64,
    /// North-south span in degrees.
    pub latitude_span: f64,
    /// East-west span in degrees.
    pub longitude_span: f64,
}

/// Returns the two dummy pins the tracking map renders.
#[uniffi::export]
#[must_use]
pub fn tracking_pins() -> Vec<MapPin> {
    vec![
        MapPin {
            kind: PinKind::User,
            latitude: 51.345_042,
            longitude: 12.391_421,
        },
        MapPin {
            kind: PinKind::Card,
            latitude: 51.345_556,
            longitude: 12.391_296,
        },
    ]
}

/// Returns a region that approximately fits both pins.
#[uniffi::export]
#[must_use]
pub fn tracking_region() -> MapRegion {
    MapRegion {
        center_latitude: 51.345_299,
        center_longitude: 12.391_359,
        latitude_span: 0.005,
        longitude_span: 0.005,
    }
}
