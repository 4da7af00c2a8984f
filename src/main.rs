use anyhow::Context as _;
use kg_chat_relay::{
    api::{build_router, AppState},
    config::Config,
    context::ContextResolver,
    facts::{ensure_seeded, Catalog, FalkorStore},
    inference::InferenceClient,
    logging,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("failed to load configuration")?;
    logging::init(&config.logging)?;

    info!(
        "Starting relay: model={}, inference={}, graph={}@{}:{}",
        config.inference.model,
        config.inference.base_url,
        config.graph.graph_name,
        config.graph.host,
        config.graph.port
    );

    let store = Arc::new(FalkorStore::new(&config.graph)?);
    ensure_seeded(store.as_ref(), &Catalog::builtin(), store.graph_name()).await;

    let inference = InferenceClient::new(config.inference.clone())?;
    let state = AppState {
        resolver: Arc::new(ContextResolver::new(store.clone(), &config.graph)),
        inference: Arc::new(inference),
        graph_name: config.graph.graph_name.clone(),
    };

    let app = build_router(state, &config.server);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
