//! Audit endpoints
//!
//! - `POST /api/audits` - record an audit entry
//! - `GET /api/audits` - list audit entries, optionally filtered by `asset_id`

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};
use std::sync::Arc;

use crate::db::schemas::{AuditDoc, DEFAULT_LIST_LIMIT};
use crate::routes::assignments::asset_id_filter;
use crate::routes::{parse_query_params, records};
use crate::server::AppState;

/// Handle POST /api/audits
pub async fn create_audit(state: Arc<AppState>, req: Request<Incoming>) -> Response<Full<Bytes>> {
    records::create_record::<AuditDoc>(state, req).await
}

/// Handle GET /api/audits
pub async fn list_audits(state: Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let params = parse_query_params(query.unwrap_or(""));
    let filter = asset_id_filter(&params);
    records::list_records::<AuditDoc>(state, filter, DEFAULT_LIST_LIMIT).await
}
