//! Root greeting and store diagnostic endpoints
//!
//! - `GET /` - static status message
//! - `GET /test` - store connectivity report
//!
//! The diagnostic never errors: store failures are downgraded to descriptive
//! status strings inside a 200 response.

use bytes::Bytes;
use http_body_util::Full;
use hyper::Response;
use serde::Serialize;
use std::sync::Arc;

use crate::routes::json_response;
use crate::server::AppState;

/// Diagnostic report for `/test`
#[derive(Serialize)]
pub struct DiagnosticResponse {
    /// Service status
    pub backend: &'static str,
    /// Store status, possibly a truncated error description
    pub database: String,
    /// Whether DATABASE_URL is present in the environment
    pub database_url: &'static str,
    /// Configured database name, when a client exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Connection status
    pub connection_status: &'static str,
    /// First few collection names, when listable
    pub collections: Vec<String>,
}

/// Handle GET /
pub fn read_root() -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "message": "Fixed Asset Management Backend Running"
    });
    json_response(serde_json::to_vec(&body).unwrap_or_default())
}

/// Handle GET /test
pub async fn diagnostic(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let database_url = if std::env::var("DATABASE_URL").is_ok() {
        "set"
    } else {
        "not set"
    };

    let response = match &state.mongo {
        Some(mongo) => match mongo.list_collection_names().await {
            Ok(collections) => DiagnosticResponse {
                backend: "running",
                database: "connected and working".to_string(),
                database_url,
                database_name: Some(mongo.db_name().to_string()),
                connection_status: "connected",
                collections: collections.into_iter().take(10).collect(),
            },
            Err(e) => DiagnosticResponse {
                backend: "running",
                database: format!("connected but error: {}", truncate(&e.to_string(), 50)),
                database_url,
                database_name: Some(mongo.db_name().to_string()),
                connection_status: "connected",
                collections: Vec::new(),
            },
        },
        None => DiagnosticResponse {
            backend: "running",
            database: "not available".to_string(),
            database_url,
            database_name: None,
            connection_status: "not connected",
            collections: Vec::new(),
        },
    };

    let body = serde_json::to_vec(&response)
        .unwrap_or_else(|_| br#"{"backend":"running"}"#.to_vec());
    json_response(body)
}

/// Truncate a message to at most `max` characters
fn truncate(message: &str, max: usize) -> String {
    message.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_read_root_is_static_200() {
        let resp = read_root();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_truncate_limits_length() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, 50).len(), 50);
    }
}
