use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use homebid_api::{app, AppState};
use homebid_store::PostgresOfferStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homebid_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = homebid_store::app_config::Config::load().context("failed to load config")?;
    tracing::info!("Starting Homebid API on port {}", config.server.port);

    let db = homebid_store::DbClient::new(&config.database.url)
        .await
        .context("failed to connect to database")?;
    db.migrate().await.context("failed to run migrations")?;

    let state = AppState {
        store: Arc::new(PostgresOfferStore::new(db.pool.clone())),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
