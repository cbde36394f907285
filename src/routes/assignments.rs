//! Assignment endpoints
//!
//! - `POST /api/assignments` - create an assignment
//! - `GET /api/assignments` - list assignments, optionally filtered by `asset_id`

use bson::Document;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::schemas::{AssignmentDoc, DEFAULT_LIST_LIMIT};
use crate::routes::{parse_query_params, records};
use crate::server::AppState;

/// Handle POST /api/assignments
pub async fn create_assignment(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    records::create_record::<AssignmentDoc>(state, req).await
}

/// Handle GET /api/assignments
pub async fn list_assignments(state: Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let params = parse_query_params(query.unwrap_or(""));
    let filter = asset_id_filter(&params);
    records::list_records::<AssignmentDoc>(state, filter, DEFAULT_LIST_LIMIT).await
}

/// Build an exact-match filter on `asset_id` when the parameter is present
pub(crate) fn asset_id_filter(params: &HashMap<String, String>) -> Document {
    let mut filter = Document::new();
    if let Some(asset_id) = params.get("asset_id").filter(|v| !v.is_empty()) {
        filter.insert("asset_id", asset_id.as_str());
    }
    filter
}
