use clap::Parser;
use tracing_subscriber::EnvFilter;

use showcase_api::{app, config::AppConfig, AppState};

#[derive(Parser)]
#[command(name = "showcase-api")]
#[command(about = "Demonstration web API with typed request and response models")]
#[command(version)]
struct Args {
    #[arg(long, help = "Interface to bind (overrides SERVER_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides SHOWCASE_API_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SHOWCASE_API_PORT, RUST_LOG, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("showcase_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config: AppConfig = showcase_api::config::config().clone();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    tracing::info!("Starting showcase API in {:?} mode", config.environment);

    let app = app(AppState::default(), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
