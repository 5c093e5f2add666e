//! JSON-RPC boundary to a Solana cluster.
//!
//! [`SolConnection`] is the seam the wallet session talks through; tests
//! substitute an in-process fake. [`RpcConnection`] is the real
//! implementation: JSON-RPC 2.0 over HTTPS against a single endpoint, with
//! every request carrying the configured commitment level.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::SolError;

/// Public devnet endpoint used by the demo.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Upper bound on a single HTTP round trip to the RPC endpoint.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Confirmation depth requested for queries and awaited for airdrops.
///
/// Variants are ordered from least to most final.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            other => Err(format!("unknown commitment level: {other}")),
        }
    }
}

/// One entry of a `getSignatureStatuses` response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    #[serde(default)]
    pub slot: u64,
    /// `None` once the transaction is rooted.
    #[serde(default)]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub confirmation_status: Option<Commitment>,
}

impl SignatureStatus {
    /// Whether the transaction has reached at least `commitment`.
    pub fn satisfies(&self, commitment: Commitment) -> bool {
        let reached = match (self.confirmation_status, self.confirmations) {
            (Some(status), _) => status,
            (None, None) => Commitment::Finalized,
            (None, Some(_)) => Commitment::Processed,
        };
        reached >= commitment
    }
}

/// Ledger operations the wallet session needs from the network.
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64, SolError>;

    /// Ask the cluster faucet for `lamports`; returns the airdrop signature.
    async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<String, SolError>;

    /// Current status of `signature`, or `None` if the cluster has not seen it.
    async fn get_signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, SolError>;
}

/// Poll until `signature` reaches `commitment`.
///
/// Fails with [`SolError::TransactionFailed`] if the cluster reports an
/// execution error for it, or [`SolError::ConfirmationTimeout`] once
/// `timeout` has elapsed. Errors from the status query itself are returned
/// as-is; nothing is re-submitted.
pub async fn confirm_signature<C>(
    connection: &C,
    signature: &str,
    commitment: Commitment,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<(), SolError>
where
    C: SolConnection + ?Sized,
{
    let started = tokio::time::Instant::now();
    loop {
        if let Some(status) = connection.get_signature_status(signature).await? {
            if let Some(err) = status.err {
                return Err(SolError::TransactionFailed(format!("{signature}: {err}")));
            }
            if status.satisfies(commitment) {
                debug!(%signature, %commitment, slot = status.slot, "signature confirmed");
                return Ok(());
            }
        }

        let waited = started.elapsed();
        if waited >= timeout {
            return Err(SolError::ConfirmationTimeout {
                signature: signature.to_string(),
                waited_ms: waited.as_millis(),
            });
        }
        tokio::time::sleep(poll_interval).await;
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

/// Decode a JSON-RPC 2.0 response body into its `result`.
fn decode_response<T: DeserializeOwned>(method: &str, body: &str) -> Result<T, SolError> {
    let response: RpcResponse<T> = serde_json::from_str(body)
        .map_err(|e| SolError::Serialization(format!("{method}: {e}")))?;

    if let Some(err) = response.error {
        return Err(SolError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    response.result.ok_or_else(|| {
        SolError::Serialization(format!("{method}: response has neither result nor error"))
    })
}

/// HTTP JSON-RPC connection to one Solana endpoint.
pub struct RpcConnection {
    http: reqwest::Client,
    url: String,
    commitment: Commitment,
    next_id: AtomicU64,
}

impl RpcConnection {
    pub fn new(url: impl Into<String>, commitment: Commitment) -> Result<Self, SolError> {
        Self::with_timeout(url, commitment, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Connection whose requests give up after `timeout` instead of hanging
    /// on an endpoint that accepts the socket but never answers.
    pub fn with_timeout(
        url: impl Into<String>,
        commitment: Commitment,
        timeout: Duration,
    ) -> Result<Self, SolError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SolError::Transport(format!("cannot build http client: {e}")))?;

        Ok(Self {
            http,
            url: url.into(),
            commitment,
            next_id: AtomicU64::new(1),
        })
    }

    /// Public devnet at `confirmed` commitment.
    pub fn devnet() -> Result<Self, SolError> {
        Self::new(DEVNET_RPC_URL, Commitment::Confirmed)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, SolError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, url = %self.url, "rpc request");

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SolError::Transport(format!("{method}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SolError::Transport(format!("{method}: {e}")))?;

        debug!(method, id, %status, bytes = body.len(), "rpc response");

        // Error statuses still carry a JSON-RPC error object worth surfacing.
        match decode_response(method, &body) {
            Err(SolError::Serialization(_)) if !status.is_success() => {
                Err(SolError::Transport(format!("{method}: http status {status}")))
            }
            other => other,
        }
    }
}

impl fmt::Debug for RpcConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConnection")
            .field("url", &self.url)
            .field("commitment", &self.commitment)
            .finish()
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn get_balance(&self, address: &str) -> Result<u64, SolError> {
        let balance: WithContext<u64> = self
            .call(
                "getBalance",
                json!([address, { "commitment": self.commitment }]),
            )
            .await?;
        Ok(balance.value)
    }

    async fn request_airdrop(&self, address: &str, lamports: u64) -> Result<String, SolError> {
        self.call(
            "requestAirdrop",
            json!([address, lamports, { "commitment": self.commitment }]),
        )
        .await
    }

    async fn get_signature_status(
        &self,
        signature: &str,
    ) -> Result<Option<SignatureStatus>, SolError> {
        let statuses: WithContext<Vec<Option<SignatureStatus>>> = self
            .call(
                "getSignatureStatuses",
                json!([[signature], { "searchTransactionHistory": false }]),
            )
            .await?;
        Ok(statuses.value.into_iter().next().flatten())
    }
}
