//! ontoviz web server
//!
//! Run with: cargo run -p ontoviz-web
//! Config is read from ONTOVIZ_CONFIG or ./ontoviz.toml.

use anyhow::Context;
use ontoviz_common::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ontoviz=debug,tower_http=info,info")),
        )
        .init();

    info!("Starting ontoviz {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().context("Failed to load configuration")?;
    let addr = config.bind_addr()?;

    // The graph must be complete before the listener accepts connections.
    let graph = ontoviz_graph::load_graph(&config.data)
        .await
        .context("Failed to build the taxonomy graph")?;

    let state = ontoviz_web::state::AppState::new(graph, &config.server);
    let app = ontoviz_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🌐 Server listening on http://{}", addr);
    info!("   Graph view: http://localhost:{}/", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
