//! Core state model for the One Link digital wallet.
//!
//! The host app (SwiftUI / Jetpack Compose) owns all rendering; this crate
//! owns the state behind it: the ordered collection of digital cards, the
//! session selection, the persisted default card, and the static content the
//! wallet and tracking tabs display. Everything is exposed to the hosts over
//! `UniFFI`.
//!
//! Platform capabilities are injected as foreign traits: [`SettingsStore`]
//! for the single persisted scalar (backed by `UserDefaults` on iOS,
//! `SharedPreferences` on Android) and [`WalletObserver`] for change
//! notification, the explicit analogue of declarative-UI invalidation.

mod card;
pub use card::*;

mod color;
pub use color::*;

mod error;
pub use error::*;

pub mod logger;

mod observer;
pub use observer::*;

mod physical_card;
pub use physical_card::*;

mod storage;
pub use storage::*;

mod store;
pub use store::*;

mod tracking;
pub use tracking::*;

uniffi::setup_scaffolding!("onelink_core");
