/// Observer for wallet state changes.
///
/// The original prototype relied on declarative-UI bindings to refresh views
/// when state mutated. Across the FFI boundary that becomes an explicit
/// subscription: the host registers an observer with
/// [`crate::CardStore::register_observer`] and re-reads the store whenever
/// [`WalletObserver::wallet_changed`] fires.
///
/// Notification is deliberately coarse. Every successful mutation produces
/// exactly one callback; failed operations and no-op resolves produce none.
///
/// # Example (Swift)
///
/// ```swift
/// class WalletModel: ObservableObject, WalletObserver {
///     func walletChanged() {
///         DispatchQueue.main.async { self.objectWillChange.send() }
///     }
/// }
/// ```
#[uniffi::export(with_foreign)]
pub trait WalletObserver: Send + Sync {
    /// Called after any successful mutation of the card store.
    fn wallet_changed(&self);
}
