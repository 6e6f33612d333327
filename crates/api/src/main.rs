use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kennel_api::config::ServerConfig;
use kennel_api::router::build_app_router;
use kennel_api::state::AppState;
use kennel_db::config::{connect_options, load_credentials, StoreBackend, StoreConfig};
use kennel_db::repositories::{DogRepository, MemoryDogRepo, PgDogRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kennel_api=debug,kennel_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let store_config = StoreConfig::from_env().expect("Invalid store configuration");
    tracing::info!(backend = ?store_config.backend, "Loaded store configuration");

    // --- Store ---
    let repository = open_repository(&store_config).await;

    // --- App state + router ---
    let state = AppState::new(repository);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = signalled_tx.send(());
            })
            .await
    });

    // Resolves on a signal, or early if the server dies on its own.
    let _ = signalled_rx.await;

    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    match tokio::time::timeout(drain, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Graceful shutdown complete"),
        Ok(Ok(Err(err))) => tracing::error!(error = %err, "Server error"),
        Ok(Err(err)) => tracing::error!(error = %err, "Server task failed"),
        Err(_) => tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Shutdown timeout elapsed, dropping remaining connections"
        ),
    }
}

/// Build the repository adapter selected by `STORE_BACKEND`.
///
/// Any failure here (credentials, connection, migrations) is fatal.
async fn open_repository(config: &StoreConfig) -> Arc<dyn DogRepository> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on restart");
            Arc::new(MemoryDogRepo::new())
        }
        StoreBackend::Postgres => {
            let credentials = load_credentials(&config.credentials_path)
                .expect("Failed to load store credentials");
            tracing::info!(
                path = %config.credentials_path.display(),
                username = %credentials.username,
                "Loaded store credentials"
            );

            let options =
                connect_options(config, &credentials).expect("Invalid store endpoint");

            let pool = kennel_db::create_pool(options, config.max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            kennel_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            kennel_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgDogRepo::new(pool))
        }
    }
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
