use clap::{Parser, Subcommand};

/// hlvol: Hyperliquid wallet volume dashboard.
#[derive(Parser, Debug)]
#[command(name = "hlvol", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the info proxy (POST /api/hyperliquid)
    Serve(ServeArgs),

    /// Look up one wallet and print its volume report
    Lookup(LookupArgs),

    /// Launch the terminal dashboard
    Dashboard(DashboardArgs),
}

/// Where a client sends its info requests.
#[derive(Parser, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Hyperliquid info endpoint (env: HYPERLIQUID_INFO_URL)
    #[arg(long)]
    pub gateway_url: Option<String>,

    /// Send requests through a running proxy instead of the gateway,
    /// e.g. http://127.0.0.1:3000/api/hyperliquid (env: HLVOL_PROXY_URL)
    #[arg(long)]
    pub proxy_url: Option<String>,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address (env: HLVOL_BIND)
    #[arg(long)]
    pub bind: Option<String>,

    /// Hyperliquid info endpoint (env: HYPERLIQUID_INFO_URL)
    #[arg(long)]
    pub gateway_url: Option<String>,
}

/// Arguments for the `lookup` subcommand.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Wallet address (0x followed by 40 hex characters)
    pub address: String,

    /// Only report this pair (e.g. BTC)
    #[arg(long)]
    pub pair: Option<String>,

    /// Output as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Wallet address to look up on start
    pub address: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}
