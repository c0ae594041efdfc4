//! # Foyer Server
//!
//! Small user service: signup by email and lookup by identifier over HTTP.
//!
//! ## Overview
//!
//! The binary wires an in-memory user service into the Axum route table from
//! `foyer_server::routes` and serves it:
//!
//! - **POST /user**: register a user from a JSON signup payload
//! - **GET /user/{id}**: look up a user by the identifier in the path
//! - **GET /ping**: liveness probe
//!
//! All account semantics live behind the `UserService` trait in `foyer-core`;
//! this layer is routing glue.

use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use clap::Parser;
use foyer_core::InMemoryUserService;
use foyer_server::{
    AppState,
    infra::config::Config,
    routes,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "foyer-server")]
#[command(about = "User signup and lookup service")]
struct Cli {
    /// Server port (overrides FOYER_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides FOYER_HOST)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_file_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let config = Arc::new(Config::load(cli.host, cli.port)?);
    let state = AppState::new(Arc::new(InMemoryUserService::new()), Arc::clone(&config));

    let app = create_app(state);

    let addr = config.server.socket_addr()?;
    info!(
        "Starting Foyer Server on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_api_router())
        .route("/ping", get(ping_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "Foyer Server is running",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "failed to install shutdown signal handler");
    } else {
        info!("shutdown signal received");
    }
}
