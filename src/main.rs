use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskbox::{api, store};

#[derive(Parser)]
#[command(name = "taskbox")]
#[command(about = "Minimal in-memory task list served over HTTP")]
struct Cli {
    /// Port for the HTTP API
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

/// Initialize tracing from RUST_LOG, defaulting to debug output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "taskbox=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tracing::info!("Starting taskbox server on port {}", cli.port);

    let store = store::TaskStore::seeded();
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", cli.port)).await?;
    tracing::info!("taskbox server listening on http://127.0.0.1:{}", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
