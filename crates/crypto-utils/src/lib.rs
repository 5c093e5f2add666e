//! # crypto-utils
//!
//! Secure random generation for the passkey wallet demo: raw bytes for key
//! material and hex tokens for credential ids and stand-in signatures.

pub mod error;
pub mod random;

pub use error::CryptoError;
pub use random::{try_random_bytes_fixed, try_random_hex};
