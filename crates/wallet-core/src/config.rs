use std::time::Duration;

use chain_sol::Commitment;

/// Tunables for a [`crate::WalletSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Artificial latency of the simulated gasless transfer.
    pub transfer_delay: Duration,
    /// Gap between signature-status polls while confirming an airdrop.
    pub airdrop_poll_interval: Duration,
    /// Give up confirming an airdrop after this long.
    pub airdrop_timeout: Duration,
    /// Level an airdrop must reach before `request_airdrop` returns.
    pub commitment: Commitment,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transfer_delay: Duration::from_millis(2_000),
            airdrop_poll_interval: Duration::from_millis(500),
            airdrop_timeout: Duration::from_secs(60),
            commitment: Commitment::Confirmed,
        }
    }
}

impl SessionConfig {
    pub fn with_transfer_delay(mut self, delay: Duration) -> Self {
        self.transfer_delay = delay;
        self
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.transfer_delay, Duration::from_secs(2));
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert!(config.airdrop_poll_interval < config.airdrop_timeout);
    }

    #[test]
    fn builders_override_fields() {
        let config = SessionConfig::default()
            .with_transfer_delay(Duration::ZERO)
            .with_commitment(Commitment::Finalized);
        assert_eq!(config.transfer_delay, Duration::ZERO);
        assert_eq!(config.commitment, Commitment::Finalized);
    }
}
