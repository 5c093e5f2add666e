//! Solana chain support for the passkey wallet demo.
//!
//! This crate covers the pieces of Solana the demo touches: Ed25519 keypair
//! generation and Base58 address handling, lamport/SOL unit conversion,
//! block-explorer links, and a small JSON-RPC client for balance queries and
//! devnet airdrops.
//!
//! The RPC layer speaks JSON-RPC 2.0 over `reqwest` directly instead of
//! pulling in `solana-client`; the demo only needs three methods.

pub mod address;
pub mod error;
pub mod explorer;
pub mod rpc;
pub mod units;

// Re-export key public types for ergonomic imports.
pub use address::{
    address_to_bytes, generate_signing_key, is_valid_address,
    keypair_to_address, signing_key_address, validate_address,
};
pub use error::SolError;
pub use explorer::Cluster;
pub use rpc::{
    confirm_signature, Commitment, RpcConnection, SignatureStatus, SolConnection,
    DEFAULT_REQUEST_TIMEOUT, DEVNET_RPC_URL,
};
pub use units::{format_sol, lamports_to_sol, sol_to_lamports, LAMPORTS_PER_SOL};
