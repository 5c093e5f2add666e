//! The wallet session client.
//!
//! A `WalletSession` owns a record store and a ledger connection and tracks
//! at most one "current" wallet. It is built explicitly by whoever needs it;
//! there is no process-wide instance.
//!
//! "Passkey" sign-in is simulated. Creating a wallet generates a keypair,
//! keeps only its public address and throws the secret away, so a session
//! can read balances and receive airdrops but cannot sign anything.

use std::time::{SystemTime, UNIX_EPOCH};

use chain_sol::{confirm_signature, SolConnection, SolError};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::WalletError;
use crate::store::WalletStore;
use crate::types::{BalanceReading, TransferOutcome, WalletRecord};
use crate::validation::{validate_login_username, validate_username};

/// Bytes of randomness in a credential id (32 hex chars).
const CREDENTIAL_ID_BYTES: usize = 16;
/// Bytes of randomness in a stand-in transfer signature (128 hex chars).
const MOCK_SIGNATURE_BYTES: usize = 64;

pub struct WalletSession<S, C> {
    store: S,
    connection: C,
    config: SessionConfig,
    current: Option<WalletRecord>,
}

impl<S, C> WalletSession<S, C>
where
    S: WalletStore,
    C: SolConnection,
{
    pub fn new(store: S, connection: C) -> Self {
        Self::with_config(store, connection, SessionConfig::default())
    }

    pub fn with_config(store: S, connection: C, config: SessionConfig) -> Self {
        Self {
            store,
            connection,
            config,
            current: None,
        }
    }

    /// Register a new wallet under `username` and make it current.
    ///
    /// Any existing record for the same username is replaced. On failure the
    /// current wallet is left as it was.
    pub fn create_wallet(&mut self, username: &str) -> Result<WalletRecord, WalletError> {
        let username = validate_username(username)?;

        let signing_key = chain_sol::generate_signing_key()
            .map_err(|e| WalletError::WalletCreation(e.to_string()))?;
        let public_address = chain_sol::signing_key_address(&signing_key);
        drop(signing_key);

        let record = WalletRecord {
            username,
            public_address,
            credential_id: crypto_utils::try_random_hex(CREDENTIAL_ID_BYTES)?,
            created_at: now_millis()?,
        };

        self.store
            .put(&record)
            .map_err(|e| WalletError::WalletCreation(e.to_string()))?;

        info!(
            username = %record.username,
            address = %record.public_address,
            "wallet created"
        );
        self.current = Some(record.clone());
        Ok(record)
    }

    /// Sign in as an existing wallet. Only the stored record is consulted;
    /// nothing proves the caller owns it.
    pub fn authenticate(&mut self, username: &str) -> Result<WalletRecord, WalletError> {
        let username = validate_login_username(username)?;

        let record = self
            .store
            .get(&username)?
            .ok_or(WalletError::WalletNotFound(username))?;

        info!(
            username = %record.username,
            address = %record.public_address,
            "wallet authenticated"
        );
        self.current = Some(record.clone());
        Ok(record)
    }

    pub fn current(&self) -> Option<&WalletRecord> {
        self.current.as_ref()
    }

    /// Forget the current wallet. Its stored record is kept.
    pub fn disconnect(&mut self) {
        if let Some(record) = self.current.take() {
            info!(username = %record.username, "wallet disconnected");
        }
    }

    /// Balance of the current wallet, saying why when there is no number.
    pub async fn balance_reading(&self) -> BalanceReading {
        let Some(record) = &self.current else {
            return BalanceReading::NoSession;
        };

        match self.connection.get_balance(&record.public_address).await {
            Ok(lamports) => BalanceReading::Available { lamports },
            Err(e) => {
                warn!(address = %record.public_address, error = %e, "balance query failed");
                BalanceReading::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Balance in whole SOL. No session and failed queries both read as
    /// `0.0`; use [`Self::balance_reading`] to tell them apart.
    pub async fn balance(&self) -> f64 {
        self.balance_reading().await.as_sol()
    }

    /// Request `amount` SOL from the faucet for the current wallet and wait
    /// until the airdrop reaches the configured commitment.
    pub async fn request_airdrop(&self, amount: f64) -> Result<String, WalletError> {
        let record = self.current.as_ref().ok_or(WalletError::NoSession)?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(WalletError::Validation(format!(
                "Airdrop amount must be a positive number, got {amount}"
            )));
        }
        let lamports = chain_sol::sol_to_lamports(amount)
            .map_err(|e| WalletError::Validation(e.to_string()))?;
        if lamports == 0 {
            return Err(WalletError::Validation(format!(
                "Airdrop amount {amount} is below one lamport"
            )));
        }

        let signature = self
            .connection
            .request_airdrop(&record.public_address, lamports)
            .await
            .map_err(|e| WalletError::Airdrop(e.to_string()))?;

        confirm_signature(
            &self.connection,
            &signature,
            self.config.commitment,
            self.config.airdrop_poll_interval,
            self.config.airdrop_timeout,
        )
        .await
        .map_err(|e| WalletError::Airdrop(e.to_string()))?;

        info!(
            address = %record.public_address,
            lamports,
            %signature,
            "airdrop confirmed"
        );
        Ok(signature)
    }

    /// Simulated gasless transfer.
    ///
    /// No transaction is built, signed or submitted and no balance changes:
    /// after the configured delay a random 64-byte signature is returned.
    /// Callers are expected to have validated `amount`; only the recipient
    /// address is re-checked here. Never fails with `Err`.
    pub async fn send_transfer(&self, to_address: &str, amount: f64) -> TransferOutcome {
        let Some(record) = &self.current else {
            return TransferOutcome::Failed {
                error: WalletError::NoSession.to_string(),
            };
        };

        match chain_sol::validate_address(to_address) {
            Ok(_) => {}
            Err(SolError::InvalidAddress(detail)) => {
                return TransferOutcome::Failed {
                    error: format!("Invalid address: {detail}"),
                }
            }
            Err(other) => {
                return TransferOutcome::Failed {
                    error: other.to_string(),
                }
            }
        }

        tokio::time::sleep(self.config.transfer_delay).await;

        let signature = match crypto_utils::try_random_hex(MOCK_SIGNATURE_BYTES) {
            Ok(signature) => signature,
            Err(e) => {
                warn!(error = %e, "could not draw a transfer signature");
                return TransferOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };
        info!(
            from = %record.public_address,
            to = %to_address,
            amount,
            "simulated gasless transfer"
        );
        TransferOutcome::Sent { signature }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

fn now_millis() -> Result<u64, WalletError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .map_err(|e| WalletError::WalletCreation(format!("system clock before epoch: {e}")))
}
