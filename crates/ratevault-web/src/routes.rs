use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use ratevault_core::{ResourceService, ServiceError};

use crate::envelope::ResponseEnvelope;

pub fn api_router(service: Arc<ResourceService>) -> Router {
    Router::new()
        .route("/api/finance/data/:resource", get(get_resource))
        .route("/health", get(health))
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_resource(
    State(service): State<Arc<ResourceService>>,
    Path(resource): Path<String>,
) -> Response {
    match service.fetch(&resource).await {
        Ok(result) => {
            let data = serde_json::to_value(&result).unwrap_or(Value::Null);
            (StatusCode::OK, Json(ResponseEnvelope::ok(&resource, data))).into_response()
        }
        Err(error) => error_response(&resource, &error),
    }
}

fn error_response(resource: &str, error: &ServiceError) -> Response {
    tracing::error!(resource, %error, "request failed");

    let (status, envelope) = match error {
        ServiceError::UnknownResource(_) => (
            StatusCode::NOT_FOUND,
            ResponseEnvelope::not_found(resource, json!(error.to_string())),
        ),
        ServiceError::ResourceUnavailable(_) | ServiceError::ResourceFetch { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseEnvelope::internal_error(resource, json!(error.to_string())),
        ),
    };

    (status, Json(envelope)).into_response()
}
