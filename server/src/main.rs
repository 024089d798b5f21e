//! Advisory server: reads configuration from the environment (and `.env`), loads the price table,
//! and serves the API until Ctrl-C or SIGTERM.

use agri_advisory::{app_router, AppConfig, AppState, Database, PriceTable};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("agri_advisory=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let prices = match &config.price_trends_path {
        Some(path) => PriceTable::from_file(path).await?,
        None => PriceTable::builtin()?,
    };
    tracing::info!(crops = prices.len(), "price table loaded");

    let db = Database::connect_lazy(&config.database);
    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.database,
        "database configured"
    );

    let app = app_router(AppState::new(db, prices));
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
