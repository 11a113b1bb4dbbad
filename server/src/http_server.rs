use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use askbox_core::types::{QueryRequest, QueryResponse};

use crate::config::ServerConfig;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

/// Response model for the health route
#[derive(Serialize)]
struct HealthResponse {
    message: String,
}

/// Build the router serving the query contract: GET / answers with a
/// health message, POST / echoes the query back
pub fn build_router(config: ServerConfig) -> Router {
    // Create shared state
    let state = AppState {
        config: Arc::new(config),
    };

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health).post(handle_query))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(addr: SocketAddr, config: ServerConfig) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(config)).await?;
    Ok(())
}

/// Health check handler
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "The API is up and running".to_string(),
    })
}

/// Handler for query requests
async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    // A null query is treated as an empty one
    let query = request.query.unwrap_or_default();
    debug!("Echoing query: {}", query);
    Json(QueryResponse {
        response: format!("{}{}", state.config.reply_prefix, query),
    })
}
