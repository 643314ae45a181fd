use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use catalog_search::catalog::handlers::{
    handle_list_items, handle_reload, handle_search, handle_status,
};
use catalog_search::catalog::service::CatalogService;
use catalog_search::loader::fetch::{HttpSource, Loader};
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_SOURCE_URL: &str = "https://files.catbox.moe/cmdl3r.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = DEFAULT_BIND.parse()?;
    let mut source_url = DEFAULT_SOURCE_URL.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--source-url" => {
                source_url = args[i + 1].clone();
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--source-url <url>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Data source: {}", source_url);

    let catalog = Arc::new(CatalogService::new(Loader::new(HttpSource::new(
        source_url,
    ))));

    // Best-effort initial load; the service starts even when the source is down
    // and answers truthfully from its empty state until a reload succeeds.
    if let Err(err) = catalog.reload().await {
        tracing::error!("Initial data load failed: {}", err);
    }

    let app = Router::new()
        .route("/search", get(handle_search::<HttpSource>))
        .route("/list-items", get(handle_list_items::<HttpSource>))
        .route("/reload", post(handle_reload::<HttpSource>))
        .route("/status", get(handle_status::<HttpSource>))
        .layer(Extension(catalog));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
