use std::net::SocketAddr;
use storefront_api::{app, AppState};
use storefront_store::{Config, Sources};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "storefront_api=debug,storefront_store=debug,storefront_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting Storefront API in {} mode on port {}",
        config.app.run_mode,
        config.server.port
    );

    let sources = Sources::from_config(&config)?;
    let app = app(AppState::from(sources));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
