use thiserror::Error;

/// Solana chain operation errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("signature {signature} not confirmed after {waited_ms} ms")]
    ConfirmationTimeout { signature: String, waited_ms: u128 },
}

impl From<crypto_utils::CryptoError> for SolError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        SolError::KeyGeneration(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = SolError::InvalidAddress("bad decode".into());
        assert_eq!(err.to_string(), "invalid address: bad decode");
    }

    #[test]
    fn display_rpc_error() {
        let err = SolError::Rpc {
            code: 429,
            message: "airdrop limit reached".into(),
        };
        assert_eq!(err.to_string(), "rpc error 429: airdrop limit reached");
    }

    #[test]
    fn display_confirmation_timeout() {
        let err = SolError::ConfirmationTimeout {
            signature: "5abc".into(),
            waited_ms: 30_000,
        };
        assert_eq!(
            err.to_string(),
            "signature 5abc not confirmed after 30000 ms"
        );
    }

    #[test]
    fn crypto_error_maps_to_key_generation() {
        let err: SolError =
            crypto_utils::CryptoError::RandomUnavailable("no entropy".into()).into();
        assert!(matches!(err, SolError::KeyGeneration(_)));
        assert!(err.to_string().contains("no entropy"));
    }

    #[test]
    fn debug_format_works() {
        let err = SolError::Transport("connection reset".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Transport"));
    }
}
