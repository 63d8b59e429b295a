//! Status payload and the handler that serves it.
//!
//! The handler ignores everything about the incoming request and answers with
//! a fixed greeting, a fixed status line and the current UTC time.

use axum::{
    extract::{Extension, Request},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::{CONTENT_TYPE_JSON, STATUS_MESSAGE, STATUS_TEXT};
use crate::error::AppError;
use crate::middleware::RequestId;

/// JSON body of every status response.
///
/// Fields serialize in declaration order. `timestamp` is UTC with millisecond
/// precision, e.g. `2024-01-01T00:00:00.000Z`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

impl StatusResponse {
    /// Payload stamped with the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
            status: STATUS_TEXT.to_string(),
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Payload stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// Status handler, mounted for every method and path.
///
/// The request is accepted only so the host can route anything here; its
/// method, URI, headers and body are never read. The request ID comes from
/// the middleware and is used for logging only.
#[instrument(name = "status::echo_status", skip_all, fields(request_id = %request_id.0))]
pub async fn echo_status(
    Extension(request_id): Extension<RequestId>,
    _request: Request,
) -> Result<Response, AppError> {
    let payload = StatusResponse::now();
    let body = serde_json::to_vec(&payload)?;

    tracing::debug!(timestamp = %payload.timestamp, "Generated status payload");

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use chrono::TimeZone;

    #[test]
    fn formats_timestamp_with_millis_and_z() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = StatusResponse::at(instant);

        assert_eq!(payload.message, "Hello from Node.js!");
        assert_eq!(payload.status, "API is working!");
        assert_eq!(payload.timestamp, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn serializes_fields_in_order() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&StatusResponse::at(instant)).unwrap();

        assert_eq!(
            json,
            r#"{"message":"Hello from Node.js!","status":"API is working!","timestamp":"2024-01-01T00:00:00.000Z"}"#
        );
    }

    #[test]
    fn now_is_parseable_and_current() {
        let before = Utc::now();
        let payload = StatusResponse::now();
        let after = Utc::now();

        let parsed = DateTime::parse_from_rfc3339(&payload.timestamp)
            .expect("timestamp should be RFC 3339")
            .with_timezone(&Utc);

        // Millisecond truncation can place the stamp just below `before`
        assert!(parsed >= before - chrono::Duration::milliseconds(1));
        assert!(parsed <= after);
    }

    #[tokio::test]
    async fn handler_ignores_request() {
        let request = axum::http::Request::builder()
            .method("PUT")
            .uri("/anything?x=1")
            .header("content-type", "text/plain")
            .body(Body::from("ignored"))
            .unwrap();

        let request_id = RequestId(uuid::Uuid::new_v4());
        let response = echo_status(Extension(request_id), request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.message, STATUS_MESSAGE);
        assert_eq!(payload.status, STATUS_TEXT);
    }
}
