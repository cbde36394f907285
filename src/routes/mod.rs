//! HTTP routes for Stockroom

pub mod assets;
pub mod assignments;
pub mod audits;
pub mod health;
pub mod locations;
pub mod records;

pub use assets::{create_asset, list_assets};
pub use assignments::{create_assignment, list_assignments};
pub use audits::{create_audit, list_audits};
pub use health::{diagnostic, read_root};
pub use locations::{create_location, list_locations};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

/// API error response body
#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

/// Build a JSON error response
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let error = ApiError {
        error: message.to_string(),
    };
    let body = serde_json::to_vec(&error).unwrap_or_default();

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Credentials", "true")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Full::new(Bytes::from(r#"{"error":"Internal error"}"#)))
                .unwrap()
        })
}

/// Build a successful JSON response
pub(crate) fn json_response(data: Vec<u8>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Credentials", "true")
        .body(Full::new(Bytes::from(data)))
        .unwrap()
}

/// Parse query string into key-value map, percent-decoded
pub(crate) fn parse_query_params(query: &str) -> HashMap<String, String> {
    if query.is_empty() {
        return HashMap::new();
    }

    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            // Form-style queries encode spaces as '+'
            let value = value.replace('+', " ");
            Some((
                urlencoding::decode(key).ok()?.into_owned(),
                urlencoding::decode(&value).ok()?.into_owned(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let params = parse_query_params("q=laptop&status=in_use");
        assert_eq!(params.get("q"), Some(&"laptop".to_string()));
        assert_eq!(params.get("status"), Some(&"in_use".to_string()));
    }

    #[test]
    fn test_parse_query_params_decodes_values() {
        let params = parse_query_params("q=dell%20xps&note=a+b");
        assert_eq!(params.get("q"), Some(&"dell xps".to_string()));
        assert_eq!(params.get("note"), Some(&"a b".to_string()));
    }

    #[test]
    fn test_parse_query_params_empty() {
        assert!(parse_query_params("").is_empty());
    }

    #[test]
    fn test_error_response_carries_cors() {
        let resp = error_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }
}
