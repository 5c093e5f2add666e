//! Deep links for the mobile "connect" QR code.
//!
//! The link only carries the wallet's public identity. Nothing listens for
//! it; scanning it does not hand over a session.

use std::fmt;

use url::form_urlencoded::byte_serialize;

use crate::types::WalletRecord;

const CONNECT_BASE: &str = "lazorkit://connect";
const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";
const QR_SIZE: &str = "300x300";

/// `lazorkit://connect?address=..&username=..[&t=..]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectLink {
    pub address: String,
    pub username: String,
    /// Set when the link is regenerated so the QR image changes.
    pub timestamp: Option<u64>,
}

impl ConnectLink {
    pub fn for_wallet(wallet: &WalletRecord) -> Self {
        Self {
            address: wallet.public_address.clone(),
            username: wallet.username.clone(),
            timestamp: None,
        }
    }

    pub fn regenerated(wallet: &WalletRecord, now_ms: u64) -> Self {
        Self {
            timestamp: Some(now_ms),
            ..Self::for_wallet(wallet)
        }
    }

    pub fn to_uri(&self) -> String {
        let mut uri = format!(
            "{CONNECT_BASE}?address={}&username={}",
            encode(&self.address),
            encode(&self.username)
        );
        if let Some(t) = self.timestamp {
            uri.push_str(&format!("&t={t}"));
        }
        uri
    }

    /// Image URL rendering this link as a QR code.
    pub fn qr_image_url(&self) -> String {
        qr_image_url(&self.to_uri())
    }
}

impl fmt::Display for ConnectLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// URL of a 300x300 QR code image encoding `data`.
pub fn qr_image_url(data: &str) -> String {
    format!("{QR_SERVICE}?size={QR_SIZE}&data={}", encode(data))
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> WalletRecord {
        WalletRecord {
            username: "SwiftWhale42".into(),
            public_address: "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA".into(),
            credential_id: "ab".into(),
            created_at: 0,
        }
    }

    #[test]
    fn plain_link() {
        assert_eq!(
            ConnectLink::for_wallet(&wallet()).to_uri(),
            "lazorkit://connect?address=TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA&username=SwiftWhale42"
        );
    }

    #[test]
    fn regenerated_link_carries_timestamp() {
        let link = ConnectLink::regenerated(&wallet(), 1_700_000_000_123);
        assert!(link.to_uri().ends_with("&username=SwiftWhale42&t=1700000000123"));
        assert_ne!(link, ConnectLink::for_wallet(&wallet()));
    }

    #[test]
    fn username_is_escaped() {
        let mut w = wallet();
        w.username = "a&b=c".into();
        let uri = ConnectLink::for_wallet(&w).to_uri();
        assert!(uri.ends_with("&username=a%26b%3Dc"), "{uri}");
    }

    #[test]
    fn qr_url_encodes_whole_link() {
        let url = qr_image_url("lazorkit://connect?address=x&username=y");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=lazorkit%3A%2F%2Fconnect%3Faddress%3Dx%26username%3Dy"
        );
    }
}
