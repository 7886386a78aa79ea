//! Member management REST service.
//! Reads configuration from a TOML file (~/.config/member-service/config.toml).

use tracing::{error, info};

use member_service::config::AppConfig;
use member_service::server::{init_tracing, ServerHandle, ServerOptions};
use member_service::default_config_path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("MEMBERS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    // ── Start server ───────────────────────────────────────────
    let seed_demo = config.seed.demo_members;
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: true,
        seed_demo,
    })
    .await?;

    info!("Press Ctrl+C to shutdown gracefully.");
    handle.run_until_signal().await;

    info!("Member service shutdown complete");
    Ok(())
}
