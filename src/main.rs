//! Job Board Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use jobboard_api::{AppState, LogMailer};
use jobboard_auth::{LinkBuilder, LinkSigner};
use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_database::repositories::{JobRepository, UserRepository};
use jobboard_database::{JobStore, UserStore};
use jobboard_worker::{RetentionSweep, SocialPublishSweep, TaskRunner};

#[tokio::main]
async fn main() {
    let env = std::env::var("JOBBOARD_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Configuration loaded (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Job Board v{}", env!("CARGO_PKG_VERSION"));
    if config.server.is_debug() {
        tracing::warn!("Running in debug mode");
    }

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = jobboard_database::pool::connect(&config.database).await?;

    // ── Step 2: Stores ───────────────────────────────────────────
    let job_store: Arc<dyn JobStore> = Arc::new(JobRepository::new(db_pool.clone()));
    let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));

    // ── Step 3: Signed links ─────────────────────────────────────
    let signer = LinkSigner::from_config(&config.signing);
    let links = LinkBuilder::new(config.server.base_url.clone(), signer);

    // ── Step 4: Shutdown channel & background tasks ──────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let publishers = jobboard_social::build_publishers(
            &config.social,
            &config.server.base_url,
            config.worker.publish_timeout(),
        )?;

        let runner = TaskRunner::new(config.worker.tick_interval())
            .with_sweep(Arc::new(RetentionSweep::with_retention_days(
                Arc::clone(&job_store),
                config.worker.retention_days,
            )))
            .with_sweep(Arc::new(SocialPublishSweep::new(
                Arc::clone(&job_store),
                publishers,
                config.worker.publish_timeout(),
            )));

        let worker_cancel = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            runner.run(worker_cancel).await;
        }))
    } else {
        tracing::info!("Background tasks disabled");
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = AppState::new(
        Arc::clone(&job_store),
        Arc::clone(&user_store),
        links,
        Arc::new(LogMailer),
    )
    .with_request_timeout(Duration::from_secs(config.server.request_timeout_seconds));
    let app = jobboard_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Job board listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 7: Wait for background tasks ────────────────────────
    if let Some(handle) = worker_handle {
        tracing::info!("Waiting for background tasks to complete...");
        if tokio::time::timeout(Duration::from_secs(30), handle).await.is_err() {
            tracing::warn!("Background tasks did not stop within 30s");
        }
    }

    db_pool.close().await;
    tracing::info!("Database pool closed");
    tracing::info!("Job board shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
