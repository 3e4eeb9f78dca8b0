//! Distribution crate for One Link.
//!
//! Re-exports the full `onelink-core` surface and builds as a static and
//! dynamic library for embedding into the iOS and Android host apps. Swift
//! and Kotlin bindings are generated from this crate by the workspace's
//! `uniffi-bindgen` binary.

pub use onelink_core::*;
