//! Location endpoints
//!
//! - `POST /api/locations` - create a location
//! - `GET /api/locations` - list locations (no filters)

use bson::Document;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};
use std::sync::Arc;

use crate::db::schemas::{LocationDoc, DEFAULT_LIST_LIMIT};
use crate::routes::records;
use crate::server::AppState;

/// Handle POST /api/locations
pub async fn create_location(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    records::create_record::<LocationDoc>(state, req).await
}

/// Handle GET /api/locations
pub async fn list_locations(state: Arc<AppState>) -> Response<Full<Bytes>> {
    records::list_records::<LocationDoc>(state, Document::new(), DEFAULT_LIST_LIMIT).await
}
