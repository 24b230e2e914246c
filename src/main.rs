use fitgate::gate::{LoginGate, TrackerPlaceholder};
use fitgate::{CredentialStore, GateError};
use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), GateError> {
    dotenvy::dotenv().ok();

    let cfg = fitgate::config::Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        max_connections = cfg.max_connections,
        loglevel = %cfg.loglevel
    );

    let store = CredentialStore::open(&cfg.database_url, cfg.max_connections).await?;
    let gate = LoginGate::new(store, Arc::new(TrackerPlaceholder));

    let state = fitgate::router::GateState::new(gate);
    let app = fitgate::router::gate_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
