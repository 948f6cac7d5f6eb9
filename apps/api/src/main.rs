use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use doctor_cell::{DirectoryState, HttpDoctorSource};
use shared_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Doctor Directory API server");

    // Load configuration
    let config = AppConfig::from_env();

    // Create shared state; the catalog reports `loading` until the fetch settles
    let state = Arc::new(DirectoryState::new(config.clone()));

    // Single fetch of the doctor source
    let source = HttpDoctorSource::new(&config);
    let loader = state.clone();
    tokio::spawn(async move {
        info!("Fetching doctors from {}", source.url());
        loader.refresh(&source).await;
    });

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("parse bind address {}", config.bind_address()))?;
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.context("bind listener")?;
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
