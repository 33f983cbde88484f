//! Input configuration errors.

/// Errors raised while building input adapters from configuration.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A binding names a key missing from the key-code table.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// A binding names an action that does not exist.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
