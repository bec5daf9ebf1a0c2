//! HTTP handlers for the graph and syntax API

use super::server::AppState;
use crate::syntax::SyntaxError;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced to HTTP clients as `{"success": false, "error": ..}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SyntaxError> for ApiError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::FormatNotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

pub type ApiResult = Result<Json<serde_json::Value>, ApiError>;

/// Request carrying text in some notation
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    /// Keep the parsed graph in the model manager
    #[serde(default)]
    pub store: bool,
}

/// Request naming a stored model; the current model when absent
#[derive(Debug, Default, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub model: Option<String>,
}

/// Handler for liveness and component summary
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let syntaxes = state.syntaxes.read().await.len();
    let models = state.models.read().await.model_count();
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "components": {
            "syntax_registry": syntaxes,
            "model_manager": models,
        }
    }))
}

/// Handler listing registered notations and stored models
pub async fn syntaxes_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let syntaxes = state.syntaxes.read().await.list_names();
    let models = state.models.read().await.list_models();
    Json(json!({ "success": true, "syntaxes": syntaxes, "models": models }))
}

/// Handler returning the selected model
pub async fn current_graph_handler(State(state): State<AppState>) -> ApiResult {
    let models = state.models.read().await;
    let graph = models
        .get_current_model()
        .ok_or_else(|| ApiError::NotFound("No current model".to_string()))?;
    Ok(Json(json!({ "success": true, "graph": graph.to_json() })))
}

/// Handler returning a stored model by name
pub async fn graph_handler(
    State(state): State<AppState>,
    Path(syntax): Path<String>,
) -> ApiResult {
    let models = state.models.read().await;
    let graph = models
        .get_model_by_syntax(&syntax)
        .ok_or_else(|| ApiError::NotFound(format!("Model not found: {}", syntax)))?;
    Ok(Json(json!({ "success": true, "graph": graph.to_json() })))
}

/// Handler parsing text into a graph snapshot
pub async fn parse_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(request): Json<TextRequest>,
) -> ApiResult {
    let adapter = state.syntaxes.read().await.get(&format)?;
    if !adapter.validate(&request.text) {
        return Err(ApiError::Unprocessable(format!("Invalid {} syntax", format)));
    }
    let graph = adapter.parse(&request.text)?;
    let snapshot = graph.to_json();
    debug!(format = %format, nodes = graph.node_count(), "Parsed request text");

    let model_id = if request.store {
        let model_id = state.models.write().await.add_model(graph);
        info!(model = %model_id, format = %format, "Stored parsed model");
        Some(model_id)
    } else {
        None
    };

    Ok(Json(json!({ "success": true, "graph": snapshot, "model_id": model_id })))
}

/// Handler exporting a stored model as text
pub async fn export_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(request): Json<ExportRequest>,
) -> ApiResult {
    let adapter = state.syntaxes.read().await.get(&format)?;
    let models = state.models.read().await;
    let graph = match request.model.as_deref() {
        Some(name) => models
            .get_model(name)
            .ok_or_else(|| ApiError::NotFound(format!("Model not found: {}", name)))?,
        None => models
            .get_current_model()
            .ok_or_else(|| ApiError::NotFound("No current model".to_string()))?,
    };
    let text = adapter.export(graph)?;
    Ok(Json(json!({ "success": true, "format": format, "text": text })))
}

/// Handler checking text without parsing it
pub async fn validate_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(request): Json<TextRequest>,
) -> ApiResult {
    let valid = state.syntaxes.read().await.validate(&format, &request.text)?;
    Ok(Json(json!({ "success": true, "format": format, "valid": valid })))
}
