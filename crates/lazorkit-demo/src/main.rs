//! lazorkit-demo - passkey-style Solana wallet demo on devnet.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

/// Passkey wallet demo: create a wallet by username, check its balance,
/// take a devnet airdrop, try a gasless transfer, hand off to mobile
#[derive(Parser, Debug)]
#[command(name = "lazorkit-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    config: config::DemoArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a wallet for a username
    Create {
        /// Username to register
        username: Option<String>,
        /// Use a generated display name instead
        #[arg(long)]
        random_name: bool,
    },

    /// Sign in to an existing wallet
    Login {
        username: String,
    },

    /// Show address and balance
    Balance {
        username: String,
        /// Copy the full address to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Request a devnet airdrop
    Airdrop {
        username: String,
        /// Amount in SOL
        #[arg(long, default_value_t = 1.0)]
        amount: f64,
    },

    /// Send a simulated gasless transfer
    Transfer {
        username: String,
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Amount in SOL
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the mobile connect link and QR code
    Qr {
        username: String,
        /// Add a timestamp so the code changes
        #[arg(long)]
        regenerate: bool,
        /// Copy the link to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print a random display name
    Name,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("lazorkit_demo={log_level},wallet_core={log_level},chain_sol={log_level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cluster = cli.config.cluster;
    let result = match cli.config.open_session() {
        Ok(mut session) => match cli.command {
            Commands::Create {
                username,
                random_name,
            } => commands::create(&mut session, username.as_deref(), random_name, cluster)
                .map(|_| ()),
            Commands::Login { username } => {
                commands::login(&mut session, &username).map(|wallet| {
                    println!("Signed in as {} ({})", wallet.username, wallet.public_address);
                })
            }
            Commands::Balance { username, copy } => {
                commands::balance(&mut session, &username, copy, cluster).await
            }
            Commands::Airdrop { username, amount } => {
                commands::airdrop(&mut session, &username, amount, cluster).await
            }
            Commands::Transfer {
                username,
                to,
                amount,
            } => commands::transfer(&mut session, &username, &to, &amount, cluster)
                .await
                .map(|_| ()),
            Commands::Qr {
                username,
                regenerate,
                copy,
            } => commands::qr(&mut session, &username, regenerate, copy).map(|_| ()),
            Commands::Name => {
                println!("{}", wallet_core::generate_display_name());
                Ok(())
            }
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
