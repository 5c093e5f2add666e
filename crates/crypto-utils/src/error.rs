use thiserror::Error;

/// Random generation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("random source unavailable: {0}")]
    RandomUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_random_unavailable() {
        let err = CryptoError::RandomUnavailable("getrandom failed".into());
        assert_eq!(err.to_string(), "random source unavailable: getrandom failed");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(CryptoError::RandomUnavailable("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
