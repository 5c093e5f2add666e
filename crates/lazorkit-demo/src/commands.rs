//! One function per screen of the demo flow.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use chain_sol::Cluster;
use wallet_core::{
    copy_to_clipboard, format_amount, generate_display_name, parse_transfer, shorten_address,
    BalanceReading, ConnectLink, TransferOutcome, WalletError, WalletRecord,
};

use crate::config::DemoSession;

/// Auth screen, create mode.
pub fn create(
    session: &mut DemoSession,
    username: Option<&str>,
    random_name: bool,
    cluster: Cluster,
) -> Result<WalletRecord> {
    let username = if random_name {
        generate_display_name()
    } else {
        username.unwrap_or_default().to_string()
    };

    let wallet = session.create_wallet(&username)?;
    println!("Wallet created for {}", wallet.username);
    print_wallet(&wallet, cluster);
    Ok(wallet)
}

/// Auth screen, sign-in mode.
pub fn login(session: &mut DemoSession, username: &str) -> Result<WalletRecord> {
    match session.authenticate(username) {
        Ok(wallet) => Ok(wallet),
        Err(WalletError::WalletNotFound(_)) => {
            bail!("Wallet not found. Please create a new wallet.")
        }
        Err(e) => Err(e.into()),
    }
}

/// Dashboard: address and balance, with the address copy button.
pub async fn balance(
    session: &mut DemoSession,
    username: &str,
    copy: bool,
    cluster: Cluster,
) -> Result<()> {
    let wallet = login(session, username)?;
    print_wallet(&wallet, cluster);
    if copy {
        copy_and_report(&wallet.public_address, "address");
    }

    match session.balance_reading().await {
        BalanceReading::Available { lamports } => {
            println!("  Balance:  {} SOL", format_amount(lamports))
        }
        BalanceReading::Unavailable { reason } => {
            println!("  Balance:  unknown ({reason})")
        }
        BalanceReading::NoSession => println!("  Balance:  {} SOL", format_amount(0)),
    }
    Ok(())
}

/// Dashboard airdrop button.
pub async fn airdrop(
    session: &mut DemoSession,
    username: &str,
    amount: f64,
    cluster: Cluster,
) -> Result<()> {
    login(session, username)?;
    println!("Requesting {amount} SOL airdrop...");

    let signature = session.request_airdrop(amount).await?;
    println!("Airdrop confirmed: {signature}");
    println!("  {}", cluster.tx_url(&signature));
    println!("  New balance: {:.4} SOL", session.balance().await);
    Ok(())
}

/// Transfer tab. Form input is checked before the session is asked to send.
pub async fn transfer(
    session: &mut DemoSession,
    username: &str,
    to: &str,
    amount: &str,
    cluster: Cluster,
) -> Result<String> {
    login(session, username)?;
    let (to, amount) = parse_transfer(to, amount)?;

    println!("Sending {amount} SOL to {} (gasless)...", shorten_address(&to, 4));
    match session.send_transfer(&to, amount).await {
        TransferOutcome::Sent { signature } => {
            println!("Transfer successful: {signature}");
            println!("  {}", cluster.tx_url(&signature));
            println!("  Note: simulated transfer, nothing was submitted to the cluster.");
            Ok(signature)
        }
        TransferOutcome::Failed { error } => bail!(error),
    }
}

/// QR tab.
pub fn qr(session: &mut DemoSession, username: &str, regenerate: bool, copy: bool) -> Result<ConnectLink> {
    let wallet = login(session, username)?;
    let link = if regenerate {
        ConnectLink::regenerated(&wallet, now_millis())
    } else {
        ConnectLink::for_wallet(&wallet)
    };

    println!("Connection URL: {link}");
    println!("QR code:        {}", link.qr_image_url());

    if copy {
        copy_and_report(&link.to_uri(), "URL");
    }
    Ok(link)
}

/// Copy `text` and tell the user whether it worked. Clipboard trouble is
/// never an error.
fn copy_and_report(text: &str, what: &str) {
    if copy_to_clipboard(text) {
        println!("Copied!");
    } else {
        println!("Could not access the clipboard; copy the {what} above by hand.");
    }
}

fn print_wallet(wallet: &WalletRecord, cluster: Cluster) {
    println!("  Username: {}", wallet.username);
    println!(
        "  Address:  {} ({})",
        shorten_address(&wallet.public_address, 4),
        wallet.public_address
    );
    println!("  Explorer: {}", cluster.address_url(&wallet.public_address));
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
