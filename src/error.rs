use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::CONTENT_TYPE_JSON;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the logs, the client gets an opaque body
        tracing::error!(error = %self, "Failed to produce status response");

        let body = serde_json::json!({ "error": "Internal server error" }).to_string();
        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        response
    }
}
