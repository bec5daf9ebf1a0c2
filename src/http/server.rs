//! HTTP server exposing the model manager and syntax registry

use super::handler::{
    current_graph_handler, export_handler, graph_handler, health_handler, parse_handler,
    syntaxes_handler, validate_handler,
};
use crate::config::ServerConfig;
use crate::model::ModelManager;
use crate::syntax::SyntaxRegistry;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub models: Arc<RwLock<ModelManager>>,
    pub syntaxes: Arc<RwLock<SyntaxRegistry>>,
}

impl AppState {
    pub fn new(models: ModelManager, syntaxes: SyntaxRegistry) -> Self {
        Self {
            models: Arc::new(RwLock::new(models)),
            syntaxes: Arc::new(RwLock::new(syntaxes)),
        }
    }

    /// Samples plus every built-in notation
    pub fn with_defaults() -> Self {
        Self::new(ModelManager::with_samples(), SyntaxRegistry::with_builtin())
    }
}

/// Build the API router
pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/syntaxes", get(syntaxes_handler))
        .route("/api/graph/current", get(current_graph_handler))
        .route("/api/graph/:syntax", get(graph_handler))
        .route("/api/parse/:format", post(parse_handler))
        .route("/api/export/:format", post(export_handler))
        .route("/api/validate/:format", post(validate_handler));

    let app = if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    app.with_state(state)
}

/// HTTP server for the graph API
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone(), self.config.cors);

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Graph API available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
