//! # wallet-core
//!
//! Session client for the passkey wallet demo: named wallets persisted in a
//! key-value store, one current wallet per session, balance and airdrop
//! calls against a Solana cluster, and a simulated gasless transfer.
//!
//! ```no_run
//! use chain_sol::RpcConnection;
//! use wallet_core::{FileWalletStore, WalletSession};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileWalletStore::open("./.lazorkit")?;
//! let mut session = WalletSession::new(store, RpcConnection::devnet()?);
//! let wallet = session.create_wallet("SwiftWhale42")?;
//! println!("{} holds {} SOL", wallet.public_address, session.balance().await);
//! # Ok(())
//! # }
//! ```

pub mod clipboard;
pub mod config;
pub mod connect;
pub mod display;
pub mod error;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

pub use clipboard::copy_to_clipboard;
pub use config::SessionConfig;
pub use connect::{qr_image_url, ConnectLink};
pub use display::{format_amount, generate_display_name, shorten_address};
pub use error::WalletError;
pub use session::WalletSession;
pub use store::{storage_key, FileWalletStore, MemoryWalletStore, WalletStore};
pub use types::{BalanceReading, TransferOutcome, WalletRecord};
pub use validation::{parse_amount, parse_transfer, validate_login_username, validate_username};

/// Address helpers re-exported for front ends that only depend on this crate.
pub use chain_sol::{is_valid_address, Cluster, Commitment};
