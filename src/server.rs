//! Reusable server runtime.
//!
//! [`ServerHandle`] encapsulates the full lifecycle: database init,
//! migrations, optional demo seeding, REST API with graceful shutdown.
//! Both the root binary and the CLI launcher use this so bootstrap code
//! is not duplicated.

use std::net::SocketAddr;
use std::sync::OnceLock;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::seed::seed_demo_members;
use crate::{create_api_router, init_database, DatabaseConfig};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the member service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Seed demo members into an empty database (default: false).
    pub seed_demo: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            seed_demo: false,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running member service.
///
/// # Examples
///
/// ```rust,no_run
/// use member_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.run_until_signal().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is listening on.
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    api_task: tokio::task::JoinHandle<()>,
}

/// Initialize the tracing subscriber from the configured log level.
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();
}

impl ServerHandle {
    /// Start the member service with the given options.
    ///
    /// This will:
    /// 1. Install the Prometheus metrics recorder
    /// 2. Connect to the database and run migrations
    /// 3. Seed demo members (if enabled)
    /// 4. Start the REST API server (with Swagger UI)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting member service...");

        // The global metrics recorder can only be installed once per
        // process; on restart within the same process it must be reused.
        static PROM_HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
            OnceLock::new();
        let prometheus_handle = PROM_HANDLE
            .get_or_init(|| {
                metrics_exporter_prometheus::PrometheusBuilder::new()
                    .install_recorder()
                    .expect("Failed to install Prometheus metrics recorder")
            })
            .clone();

        // ── Database ───────────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        if opts.seed_demo {
            let inserted = seed_demo_members(&db, app_cfg.seed.count).await?;
            if inserted > 0 {
                info!(inserted, "Seeded demo members");
            }
        }

        // ── REST API ───────────────────────────────────────────────
        let router = create_api_router(db.clone(), prometheus_handle);

        let listener = TcpListener::bind(&app_cfg.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        let api_task = tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
                info!("REST API server received shutdown signal");
            });
            if let Err(e) = serve.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown_tx,
            api_task,
        })
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);

        if let Err(e) = self.api_task.await {
            error!("REST API server task panicked: {}", e);
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }

    /// Block until SIGINT or SIGTERM, then shut down gracefully.
    pub async fn run_until_signal(self) {
        wait_for_signal().await;
        self.shutdown().await;
    }
}

/// Wait for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn wait_for_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; park forever instead of
            // busy-returning.
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
