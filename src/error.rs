//! Error types for the PlayZone application.

use thiserror::Error;

/// The main error type for PlayZone.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Wallet/signing errors
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// An action that needs a connected wallet was attempted without one.
    #[error("{0}")]
    Unauthenticated(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The UI is complete but the collaborator behind it is not wired yet.
    #[error("{0} is not yet supported")]
    NotYetSupported(String),

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new wallet error.
    pub fn wallet(msg: impl Into<String>) -> Self {
        Self::Wallet(msg.into())
    }

    /// Create a new unauthenticated error carrying the user-facing prompt.
    pub fn unauthenticated(prompt: impl Into<String>) -> Self {
        Self::Unauthenticated(prompt.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a new not-yet-supported error for the named operation.
    pub fn not_yet_supported(operation: impl Into<String>) -> Self {
        Self::NotYetSupported(operation.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated(_) | Self::InvalidInput(_) | Self::Channel(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_yet_supported_message() {
        let err = Error::not_yet_supported("Voting");
        assert_eq!(err.to_string(), "Voting is not yet supported");
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found("market 404");
        assert_eq!(err.to_string(), "Not found: market 404");
    }

    #[test]
    fn test_unauthenticated_is_recoverable() {
        assert!(Error::unauthenticated("Please connect your wallet to vote").is_recoverable());
        assert!(!Error::not_found("market 9").is_recoverable());
    }
}
