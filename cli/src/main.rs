//! Member service — CLI launcher
//!
//! Headless REST server suitable for deployment as a systemd service,
//! Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/member-service/config.toml)
//! member-cli
//!
//! # Custom config path
//! member-cli --config /etc/member-service/config.toml
//!
//! # Override the port and seed demo data
//! member-cli --port 8080 --seed
//!
//! # Validate config without starting
//! member-cli --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use member_service::config::AppConfig;
use member_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Member management REST service.
#[derive(Parser, Debug)]
#[command(
    name = "member-cli",
    version,
    about = "REST API server for member management",
    long_about = "Member service — paginated, searchable, sortable member listing \
                  plus CRUD over a SQLite-backed table.\n\n\
                  Default config: ~/.config/member-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MEMBERS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Seed demo members into an empty database on startup.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(member_service::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Init tracing first so subsequent logs are formatted properly
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            // Fallback tracing init
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!(
                "Failed to load config from {}: {}",
                config_path.display(),
                e
            );
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let seed_demo = cli.seed || config.seed.demo_members;
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed_demo,
    })
    .await?;

    info!("Press Ctrl+C to shutdown gracefully.");
    handle.run_until_signal().await;

    Ok(())
}
