use serde::{Deserialize, Serialize};

/// A locally registered demo wallet.
///
/// The JSON field names match the records the browser demo kept in local
/// storage, so existing exports load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub username: String,
    /// Base58 public key of the keypair generated at creation. The secret
    /// half is discarded, so this identity can receive but never sign.
    #[serde(rename = "publicKey")]
    pub public_address: String,
    /// Random hex token standing in for a passkey credential id.
    pub credential_id: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// Result of a transfer attempt. Exactly one of signature / error exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Sent { signature: String },
    Failed { error: String },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Sent { .. })
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            TransferOutcome::Sent { signature } => Some(signature),
            TransferOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TransferOutcome::Sent { .. } => None,
            TransferOutcome::Failed { error } => Some(error),
        }
    }
}

/// Balance of the current wallet, keeping apart "zero" and "could not ask".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceReading {
    Available { lamports: u64 },
    NoSession,
    Unavailable { reason: String },
}

impl BalanceReading {
    pub fn lamports(&self) -> Option<u64> {
        match self {
            BalanceReading::Available { lamports } => Some(*lamports),
            _ => None,
        }
    }

    /// Whole SOL, with every non-available reading collapsed to `0.0`.
    pub fn as_sol(&self) -> f64 {
        self.lamports().map(chain_sol::lamports_to_sol).unwrap_or(0.0)
    }
}
