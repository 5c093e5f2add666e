use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// Bad user input: blank username, malformed address, unusable amount.
    #[error("{0}")]
    Validation(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("No wallet connected")]
    NoSession,

    #[error("Failed to create wallet: {0}")]
    WalletCreation(String),

    #[error("Airdrop failed: {0}")]
    Airdrop(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<crypto_utils::CryptoError> for WalletError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        WalletError::WalletCreation(e.to_string())
    }
}

impl From<std::io::Error> for WalletError {
    fn from(e: std::io::Error) -> Self {
        WalletError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Storage(format!("malformed wallet record: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_verbatim() {
        let err = WalletError::Validation("Please enter a valid amount".into());
        assert_eq!(err.to_string(), "Please enter a valid amount");
    }

    #[test]
    fn display_not_found_and_no_session() {
        assert_eq!(
            WalletError::WalletNotFound("alice".into()).to_string(),
            "Wallet not found: alice"
        );
        assert_eq!(WalletError::NoSession.to_string(), "No wallet connected");
    }

    #[test]
    fn io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: WalletError = io.into();
        assert!(matches!(err, WalletError::Storage(_)));
    }

    #[test]
    fn entropy_failure_becomes_creation_error() {
        let err: WalletError =
            crypto_utils::CryptoError::RandomUnavailable("no entropy".into()).into();
        assert!(matches!(err, WalletError::WalletCreation(_)));
    }
}
