//! Allsvenskan API main entry point
//!
//! Serves the JSON tables and rendered pages over HTTP.

use allsvenskan_api::config::{
    apply_env_overrides, apply_overrides_from, load_config_with_hash, Config,
};
use allsvenskan_api::server::{App, Server};
use allsvenskan_api::views::VIEW_PAGES;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

/// Allsvenskan API: Swedish football tables as JSON
///
/// Scrapes standings and top scorers from svenskfotboll.se on every request
/// and serves them as JSON, along with a few HTML pages built on the API.
#[derive(Parser, Debug)]
#[command(name = "allsvenskan-api")]
#[command(version)]
#[command(about = "Swedish football tables as JSON", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the config file and $PORT
    #[arg(long)]
    port: Option<u16>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and list the routes without starting the server
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    // --port wins over $PORT and must be set before APP_ENV derives the views URL
    let overrides = match cli.port {
        Some(port) => {
            config.server.port = port;
            apply_overrides_from(&mut config, |key| match key {
                "PORT" => None,
                _ => std::env::var(key).ok(),
            })
        }
        None => apply_env_overrides(&mut config),
    };
    overrides.context("Invalid environment override")?;

    if cli.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    serve(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("allsvenskan_api=info,warn"),
                1 => EnvFilter::new("allsvenskan_api=debug,info"),
                2 => EnvFilter::new("allsvenskan_api=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn print_dry_run(config: &Config) {
    println!("=== Allsvenskan API Dry Run ===\n");

    println!("Server:");
    println!("  Listen: {}:{}", config.server.host, config.server.port);
    println!(
        "  User agent: {}/{}",
        config.user_agent.name, config.user_agent.version
    );
    println!("  Upstream timeout: {}s", config.upstream.request_timeout_secs);
    println!("  Views read from: {}", config.views.api_base_url);

    println!("\nCompetitions ({}):", config.competitions.len());
    for competition in &config.competitions {
        println!("  /{} ({})", competition.code, competition.name);
        println!("    standings: {}", competition.standings_url);
        if let Some(url) = &competition.topscorers_url {
            println!("  /{}/topscorers", competition.code);
            println!("    topscorers: {}", url);
        }
    }

    println!("\nPages ({}):", VIEW_PAGES.len());
    for page in VIEW_PAGES {
        println!("  /{} -> /{}", page.path, page.code);
    }

    println!("\n✓ Configuration is valid");
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = App::new(Arc::new(config)).context("Failed to build HTTP client")?;
    let server = Server::bind(&addr, app)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let server_handle = tokio::spawn(server.run(shutdown_rx));

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;
    tracing::info!("Received shutdown signal");

    let _ = shutdown_tx.send(true);
    server_handle.await.context("Server task panicked")?;

    Ok(())
}
