//! Settings persistence behind the single durable scalar.
//!
//! The only thing One Link persists is the default-card id. It lives behind
//! the narrow [`SettingsStore`] trait so the host app can plug in its
//! platform preference store (`UserDefaults`, `SharedPreferences`) while
//! tests and the developer CLI use the Rust-side implementations below.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Settings key under which the default card id is persisted.
///
/// Kept byte-identical to the key the original prototype stored under, so a
/// migrating host keeps its value.
pub const DEFAULT_CARD_ID_KEY: &str = "defaultCardId";

/// Key-value settings store for small scalar values.
///
/// Implementations are infallible by contract: they absorb and log their own
/// failures, and an unreadable value is reported as absent. This matches the
/// platform preference stores the hosts bridge in, which have no meaningful
/// error surface either.
#[uniffi::export(with_foreign)]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: String) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: String, value: String);
}

/// In-memory [`SettingsStore`].
///
/// Values live for the lifetime of the instance, so sharing one store across
/// two [`crate::CardStore`] instances simulates an app restart in tests.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    /// Creates an empty in-memory settings store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, key: String) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn set(&self, key: String, value: String) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }
}

/// File-backed [`SettingsStore`] holding a single JSON object.
///
/// Used by the developer CLI and any pure-Rust host. The file is read once
/// at open; every `set` rewrites it in full. Read, parse, and write failures
/// degrade to warnings and defaults, matching the trait's infallible
/// contract.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSettingsStore {
    /// Opens the settings file at `path`, loading any existing values.
    ///
    /// A missing file is an empty store; an unparseable one is discarded
    /// with a warning and overwritten on the next `set`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::load(&path);
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("discarding unparseable settings file {path:?}: {e}");
                    HashMap::new()
                }
            },
            Err(e) => {
                log::warn!("failed to read settings file {path:?}: {e}");
                HashMap::new()
            }
        }
    }

    fn persist(&self, values: &HashMap<String, String>) {
        if let Some(dir) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                log::warn!("failed to create settings directory {dir:?}: {e}");
                return;
            }
        }

        match serde_json::to_string_pretty(values) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("failed to write settings file {:?}: {e}", self.path);
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: String) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn set(&self, key: String, value: String) {
        let mut values = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        values.insert(key, value);
        self.persist(&values);
    }
}
