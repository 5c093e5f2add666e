//! Front-end configuration: global flags with environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use chain_sol::{Cluster, Commitment, RpcConnection, DEVNET_RPC_URL};
use clap::Args;
use wallet_core::{FileWalletStore, SessionConfig, WalletSession};

/// Session type every command runs against.
pub type DemoSession = WalletSession<FileWalletStore, RpcConnection>;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// JSON-RPC endpoint of the cluster
    #[arg(long, global = true, env = "LAZORKIT_RPC_URL", default_value = DEVNET_RPC_URL)]
    pub rpc_url: String,

    /// Commitment level for queries and airdrop confirmation
    #[arg(long, global = true, env = "LAZORKIT_COMMITMENT", default_value = "confirmed")]
    pub commitment: Commitment,

    /// Cluster used for explorer links
    #[arg(long, global = true, env = "LAZORKIT_CLUSTER", default_value = "devnet")]
    pub cluster: Cluster,

    /// Directory holding wallet records
    #[arg(long, global = true, env = "LAZORKIT_DATA_DIR", default_value = ".lazorkit")]
    pub data_dir: PathBuf,

    /// Seconds to wait for an RPC response before giving up
    #[arg(long, global = true, env = "LAZORKIT_RPC_TIMEOUT_SECS", default_value_t = 30)]
    pub rpc_timeout_secs: u64,

    /// Latency of the simulated gasless transfer, in milliseconds
    #[arg(long, global = true, env = "LAZORKIT_TRANSFER_DELAY_MS", default_value_t = 2_000)]
    pub transfer_delay_ms: u64,
}

impl DemoArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_transfer_delay(Duration::from_millis(self.transfer_delay_ms))
            .with_commitment(self.commitment)
    }

    /// Open the record store and connect a fresh, signed-out session.
    pub fn open_session(&self) -> anyhow::Result<DemoSession> {
        let store = FileWalletStore::open(&self.data_dir)?;
        let connection = RpcConnection::with_timeout(
            self.rpc_url.clone(),
            self.commitment,
            Duration::from_secs(self.rpc_timeout_secs),
        )?;
        tracing::debug!(
            rpc_url = %self.rpc_url,
            rpc_timeout_secs = self.rpc_timeout_secs,
            commitment = %self.commitment,
            data_dir = %self.data_dir.display(),
            "session opened"
        );
        Ok(WalletSession::with_config(
            store,
            connection,
            self.session_config(),
        ))
    }
}
