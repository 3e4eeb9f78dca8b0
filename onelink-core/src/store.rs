//! The card-collection state model.
//!
//! [`CardStore`] is the main entry point for the host app. It owns the
//! ordered card collection, the transient session selection and the
//! persisted default-card id, and it is the only writer of either.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::{
    card::seed_cards, Card, CardKind, OneLinkError, SettingsStore, WalletObserver,
    DEFAULT_CARD_ID_KEY,
};

/// Mutable wallet state guarded by the store's lock.
struct WalletState {
    /// Insertion order is display order.
    cards: Vec<Card>,
    /// The currently activated card, if any. A weak reference: the id is
    /// looked up on read and a stale value degrades to "no card".
    selected_id: Option<String>,
}

/// The card collection, its session selection, and the persisted default.
///
/// Every operation runs to completion synchronously on the caller's thread
/// and either fully applies or leaves the store untouched. The interior lock
/// exists because `UniFFI` objects cross threads, not because any two
/// operations are expected to contend; the host drives the store from its
/// UI thread.
///
/// # Example (Swift)
///
/// ```swift
/// let store = CardStore(settings: UserDefaultsSettingsStore())
/// store.registerObserver(observer: walletModel)
/// store.resolveDefaultCard()
/// let cards = store.cards()
/// ```
#[derive(uniffi::Object)]
pub struct CardStore {
    state: Mutex<WalletState>,
    settings: Arc<dyn SettingsStore>,
    observers: Mutex<Vec<Arc<dyn WalletObserver>>>,
}

#[uniffi::export]
impl CardStore {
    /// Creates a store seeded with the two built-in example cards.
    ///
    /// `settings` is the platform preference store holding the persisted
    /// default-card id. Call [`Self::resolve_default_card`] once the host is
    /// ready to apply it.
    #[uniffi::constructor]
    pub fn new(settings: Arc<dyn SettingsStore>) -> Arc<Self> {
        log::debug!("initializing card store with seeded collection");
        Arc::new(Self {
            state: Mutex::new(WalletState {
                cards: seed_cards(),
                selected_id: None,
            }),
            settings,
            observers: Mutex::new(Vec::new()),
        })
    }

    /// Registers an observer notified after every successful mutation.
    pub fn register_observer(&self, observer: Arc<dyn WalletObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Returns a snapshot of the collection in display order.
    pub fn cards(&self) -> Vec<Card> {
        self.state().cards.clone()
    }

    /// Returns the id of the currently activated card, if any.
    pub fn selected_card_id(&self) -> Option<String> {
        self.state().selected_id.clone()
    }

    /// Returns the currently activated card, if any.
    ///
    /// A selection whose id no longer resolves yields `None`, not an error.
    pub fn selected_card(&self) -> Option<Card> {
        let state = self.state();
        let selected_id = state.selected_id.as_ref()?;
        state.cards.iter().find(|c| &c.id == selected_id).cloned()
    }

    /// Looks up a card by id.
    pub fn get_card(&self, card_id: String) -> Option<Card> {
        self.state().cards.iter().find(|c| c.id == card_id).cloned()
    }

    /// Returns the persisted default-card id, if any.
    pub fn default_card_id(&self) -> Option<String> {
        self.settings.get(DEFAULT_CARD_ID_KEY.to_string())
    }

    /// Adds a new card to the end of the collection.
    ///
    /// Allocates a fresh unique id and returns the created card so the
    /// caller can reference it.
    ///
    /// # Errors
    ///
    /// Returns [`OneLinkError::InvalidInput`] if `title` is empty. The host
    /// form disables its Add button on an empty title, but the store
    /// enforces the contract itself.
    pub fn add_card(
        &self,
        kind: CardKind,
        title: String,
        details: String,
    ) -> Result<Card, OneLinkError> {
        if title.is_empty() {
            return Err(OneLinkError::InvalidInput {
                attribute: "title".to_string(),
                reason: "title must not be empty".to_string(),
            });
        }

        let card = Card {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            details,
        };

        {
            let mut state = self.state();
            state.cards.push(card.clone());
        }

        log::info!("added card {}", card.id);
        self.notify_observers();
        Ok(card)
    }

    /// Replaces a card's kind, title and details in place.
    ///
    /// Identity and position are preserved; no other entry changes.
    ///
    /// # Errors
    ///
    /// Returns [`OneLinkError::CardNotFound`] if `card_id` is not in the
    /// collection. Nothing is mutated in that case.
    pub fn update_card(
        &self,
        card_id: String,
        kind: CardKind,
        title: String,
        details: String,
    ) -> Result<(), OneLinkError> {
        {
            let mut state = self.state();
            let Some(card) = state.cards.iter_mut().find(|c| c.id == card_id) else {
                return Err(OneLinkError::CardNotFound { card_id });
            };
            card.kind = kind;
            card.title = title;
            card.details = details;
        }

        log::info!("updated card {card_id}");
        self.notify_observers();
        Ok(())
    }

    /// Activates a card for the current session.
    ///
    /// Pure state transition; nothing is persisted. The activation alert the
    /// host shows afterwards is a UI concern.
    ///
    /// # Errors
    ///
    /// Returns [`OneLinkError::CardNotFound`] if `card_id` is not in the
    /// collection; the current selection is left unchanged.
    pub fn select_card(&self, card_id: String) -> Result<(), OneLinkError> {
        {
            let mut state = self.state();
            if !state.cards.iter().any(|c| c.id == card_id) {
                return Err(OneLinkError::CardNotFound { card_id });
            }
            state.selected_id = Some(card_id.clone());
        }

        log::info!("activated card {card_id}");
        self.notify_observers();
        Ok(())
    }

    /// Makes a card the default for future launches.
    ///
    /// Persists the id under [`DEFAULT_CARD_ID_KEY`] and also activates the
    /// card for the current session.
    ///
    /// # Errors
    ///
    /// Returns [`OneLinkError::CardNotFound`] if `card_id` is not in the
    /// collection; nothing is persisted or selected in that case.
    pub fn set_default_card(&self, card_id: String) -> Result<(), OneLinkError> {
        {
            let mut state = self.state();
            if !state.cards.iter().any(|c| c.id == card_id) {
                return Err(OneLinkError::CardNotFound { card_id });
            }
            state.selected_id = Some(card_id.clone());
        }

        self.settings
            .set(DEFAULT_CARD_ID_KEY.to_string(), card_id.clone());

        log::info!("set default card {card_id}");
        self.notify_observers();
        Ok(())
    }

    /// Applies the persisted default card to the session selection.
    ///
    /// No-op when a selection is already set. An absent persisted value, or
    /// one naming a card no longer in the collection, leaves the selection
    /// unset; neither is an error. Intended to run once at startup, mirroring
    /// the prototype's on-appear hook; the unset-selection guard makes
    /// repeat invocation harmless.
    pub fn resolve_default_card(&self) {
        if self.state().selected_id.is_some() {
            log::debug!("selection already set, skipping default resolution");
            return;
        }

        let Some(stored) = self.settings.get(DEFAULT_CARD_ID_KEY.to_string()) else {
            log::debug!("no persisted default card");
            return;
        };

        let resolved = {
            let mut state = self.state();
            if state.selected_id.is_none() && state.cards.iter().any(|c| c.id == stored) {
                state.selected_id = Some(stored.clone());
                true
            } else {
                false
            }
        };

        if resolved {
            log::info!("resolved default card {stored}");
            self.notify_observers();
        } else {
            log::warn!("persisted default card {stored} no longer exists");
        }
    }
}

impl CardStore {
    /// Acquires the state lock, absorbing poisoning.
    ///
    /// The host drives the store from a single thread, so a poisoned lock
    /// can only come from a panicking observer test double; the state itself
    /// is always consistent because mutations are applied atomically under
    /// the guard.
    fn state(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Notifies all registered observers, outside the state lock.
    fn notify_observers(&self) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in &observers {
            observer.wallet_changed();
        }
    }
}
