//! Error types for the Mana bot.

use thiserror::Error;

/// A shared error type for the non-conversational failure modes.
///
/// Validation feedback shown to the user is not an error: it is modelled as
/// reply flows in the dialogue layer. This enum covers configuration and
/// outbound delivery problems.
#[derive(Error, Debug, Clone)]
pub enum ManaError {
    /// Configuration error (bad config file, missing credential)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Outbound delivery error (form backend or chat transport)
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ManaError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Delivery error
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a delivery error
    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}

impl From<std::io::Error> for ManaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, ManaError>`.
pub type Result<T> = std::result::Result<T, ManaError>;
