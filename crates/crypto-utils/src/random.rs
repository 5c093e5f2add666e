use rand::RngCore;
use rand_core::OsRng;

use crate::error::CryptoError;

/// Fills a fixed-size array from the OS entropy source, reporting an
/// unavailable source instead of panicking.
pub fn try_random_bytes_fixed<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut buf = [0u8; N];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::RandomUnavailable(e.to_string()))?;
    Ok(buf)
}

/// Lowercase hex encoding of `len` random bytes (`2 * len` characters).
///
/// Credential ids use 16 bytes, stand-in transfer signatures use 64.
pub fn try_random_hex(len: usize) -> Result<String, CryptoError> {
    let mut buf = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::RandomUnavailable(e.to_string()))?;
    Ok(hex::encode(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_random_bytes_fixed_differ_between_calls() {
        let a: [u8; 32] = try_random_bytes_fixed().unwrap();
        let b: [u8; 32] = try_random_bytes_fixed().unwrap();
        assert_ne!(a, b, "two random 32-byte outputs should differ");
    }

    #[test]
    fn try_random_bytes_fixed_not_all_zero() {
        let buf: [u8; 32] = try_random_bytes_fixed().unwrap();
        // 2^-256 chance of a false failure.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn random_hex_is_lowercase_hex_of_double_length() {
        let token = try_random_hex(64).unwrap();
        assert_eq!(token.len(), 128);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn random_hex_credential_id_length() {
        assert_eq!(try_random_hex(16).unwrap().len(), 32);
    }

    #[test]
    fn random_hex_differs_between_calls() {
        assert_ne!(try_random_hex(16).unwrap(), try_random_hex(16).unwrap());
    }

    #[test]
    fn random_hex_zero_length_is_empty() {
        assert!(try_random_hex(0).unwrap().is_empty());
    }
}
