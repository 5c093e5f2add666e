//! Links into the public Solana block explorer.

use std::fmt;
use std::str::FromStr;

const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Solana cluster an explorer link should point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cluster {
    Mainnet,
    #[default]
    Devnet,
    Testnet,
}

impl Cluster {
    /// Value of the explorer's `cluster` query parameter, if any.
    /// Mainnet is the explorer default and takes no parameter.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Cluster::Mainnet => None,
            Cluster::Devnet => Some("devnet"),
            Cluster::Testnet => Some("testnet"),
        }
    }

    /// Explorer page for a transaction signature.
    pub fn tx_url(&self, signature: &str) -> String {
        self.page_url("tx", signature)
    }

    /// Explorer page for an account address.
    pub fn address_url(&self, address: &str) -> String {
        self.page_url("address", address)
    }

    fn page_url(&self, kind: &str, id: &str) -> String {
        match self.query_value() {
            Some(cluster) => format!("{EXPLORER_BASE}/{kind}/{id}?cluster={cluster}"),
            None => format!("{EXPLORER_BASE}/{kind}/{id}"),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cluster::Mainnet => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        })
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(format!("unknown cluster: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devnet_tx_url() {
        assert_eq!(
            Cluster::Devnet.tx_url("5sig"),
            "https://explorer.solana.com/tx/5sig?cluster=devnet"
        );
    }

    #[test]
    fn mainnet_omits_cluster_param() {
        assert_eq!(
            Cluster::Mainnet.address_url("11111111111111111111111111111111"),
            "https://explorer.solana.com/address/11111111111111111111111111111111"
        );
    }

    #[test]
    fn parse_and_display_agree() {
        for cluster in [Cluster::Mainnet, Cluster::Devnet, Cluster::Testnet] {
            assert_eq!(cluster.to_string().parse::<Cluster>().unwrap(), cluster);
        }
        assert!("localnet".parse::<Cluster>().is_err());
    }
}
