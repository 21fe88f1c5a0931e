use std::io;

use clap::Parser;
use hl_volume::cli::{self, Command, SourceArgs};
use hl_volume::config::{log_filter, AppConfig, ConfigOverrides, ENV_LOG};
use hl_volume::dashboard::run_dashboard;
use hl_volume::lookup::{lookup, validate_address};
use hl_volume::output::write_report;
use hl_volume::proxy::ProxyServer;
use hl_volume::AppError;
use hyperliquid::InfoHttpClient;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("failed to install rustls crypto provider");

    let cli = cli::Cli::parse();
    let _ = dotenvy::dotenv(); // load .env if present

    // Initialize tracing
    let directives = std::env::var(ENV_LOG).ok();
    let filter = log_filter(&cli.log_level, directives.as_deref());

    // The dashboard owns the terminal; log lines would tear the screen.
    if matches!(cli.command, Command::Dashboard(_)) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    // Shared cancellation token + signal handlers.
    let cancel = setup_signal_handlers();

    if let Err(e) = run(cli.command, cancel).await {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}

async fn run(command: Command, cancel: CancellationToken) -> Result<(), AppError> {
    match command {
        Command::Serve(args) => {
            let config = AppConfig::resolve(ConfigOverrides {
                gateway_url: args.gateway_url,
                bind: args.bind,
                proxy_url: None,
            })?;
            ProxyServer::new(config.bind, &config.gateway_url)
                .run(cancel)
                .await
        }

        Command::Lookup(args) => {
            let client = client_for(args.source)?;
            let address = validate_address(&args.address)?;
            info!(user = %address, source = %client.info_url(), "lookup starting");

            let data = tokio::select! {
                result = lookup(&client, &address) => result?,
                _ = cancel.cancelled() => return Ok(()),
            };

            let mut stdout = io::stdout().lock();
            write_report(&data, args.pair.as_deref(), args.json, &mut stdout)?;
            Ok(())
        }

        Command::Dashboard(args) => {
            let client = client_for(args.source)?;
            run_dashboard(client, args.address, cancel).await
        }
    }
}

/// Build the info client a lookup should use (proxy first, then gateway).
fn client_for(source: SourceArgs) -> Result<InfoHttpClient, AppError> {
    let config = AppConfig::resolve(ConfigOverrides {
        gateway_url: source.gateway_url,
        bind: None,
        proxy_url: source.proxy_url,
    })?;
    Ok(InfoHttpClient::new(config.client_info_url()))
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, shutting down");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            let mut sig = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to register SIGTERM handler");
            sig.recv().await;
            info!("received SIGTERM, shutting down");
            cancel_clone.cancel();
        });
    }

    cancel
}
