use thiserror::Error;

/// Error outputs from One Link.
///
/// Every variant is local and recoverable: operations either fully apply or
/// leave the store untouched, and nothing here should terminate the host app.
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum OneLinkError {
    /// The presented input is not valid for the requested operation.
    #[error("invalid_input: {attribute} - {reason}")]
    InvalidInput {
        /// Name of the offending attribute.
        attribute: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// The referenced card id is not present in the collection.
    #[error("card_not_found: {card_id}")]
    CardNotFound {
        /// The id that failed to resolve.
        card_id: String,
    },
}
