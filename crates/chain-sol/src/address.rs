//! Solana keypairs and addresses.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key, with no hashing step in between. Wallets created by the demo get a
//! fresh random keypair whose public half becomes the wallet identity.

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use crate::error::SolError;

/// Length in bytes of a decoded Solana public key.
pub const PUBKEY_LEN: usize = 32;

/// Generate a fresh Ed25519 signing key from the OS entropy source.
///
/// The 32-byte secret seed is wiped as soon as the key is built; the
/// returned `SigningKey` zeroizes itself on drop.
pub fn generate_signing_key() -> Result<SigningKey, SolError> {
    let seed = Zeroizing::new(crypto_utils::try_random_bytes_fixed::<PUBKEY_LEN>()?);
    Ok(SigningKey::from_bytes(&seed))
}

/// Address of the public half of `key`.
pub fn signing_key_address(key: &SigningKey) -> String {
    keypair_to_address(&key.verifying_key().to_bytes())
}

/// Convert a 32-byte Ed25519 public key to a Solana address string.
pub fn keypair_to_address(ed25519_pubkey: &[u8; PUBKEY_LEN]) -> String {
    bs58::encode(ed25519_pubkey).into_string()
}

/// Validate a Solana address string.
///
/// Returns `Ok(true)` when `address` is Base58 that decodes to exactly
/// 32 bytes, and an error describing the problem otherwise.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_bytes(address).map(|_| true)
}

/// Infallible form of [`validate_address`] for form checks.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

/// Decode a Solana address string to its 32-byte representation.
pub fn address_to_bytes(address: &str) -> Result<[u8; PUBKEY_LEN], SolError> {
    if address.is_empty() {
        return Err(SolError::InvalidAddress("empty string".into()));
    }

    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected {PUBKEY_LEN} bytes, got {}", v.len()))
    })
}
