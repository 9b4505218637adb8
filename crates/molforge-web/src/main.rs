//! Molforge Web Server
//!
//! Run with: cargo run -p molforge-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use molforge_common::MolforgeConfig;
use molforge_web::router::build_router;
use molforge_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = MolforgeConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.bind_addr();
    info!(max_candidates = config.max_candidates, "starting molforge");

    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install the shutdown handler");
    }
}
