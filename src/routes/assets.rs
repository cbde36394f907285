//! Asset endpoints
//!
//! - `POST /api/assets` - create an asset
//! - `GET /api/assets` - list assets, optionally filtered by `q` (free-text
//!   across name/tag/serial_number) and `status` (exact match)

use bson::{doc, Document};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::schemas::{AssetDoc, ASSET_LIST_LIMIT};
use crate::routes::{parse_query_params, records};
use crate::server::AppState;

/// Handle POST /api/assets
pub async fn create_asset(state: Arc<AppState>, req: Request<Incoming>) -> Response<Full<Bytes>> {
    records::create_record::<AssetDoc>(state, req).await
}

/// Handle GET /api/assets
pub async fn list_assets(state: Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let params = parse_query_params(query.unwrap_or(""));
    let filter = asset_filter(&params);
    records::list_records::<AssetDoc>(state, filter, ASSET_LIST_LIMIT).await
}

/// Build the Mongo filter for an asset listing
///
/// `q` matches case-insensitively against name, tag, or serial_number.
/// `status` is an exact match on the stored status string.
fn asset_filter(params: &HashMap<String, String>) -> Document {
    let mut filter = Document::new();

    if let Some(q) = params.get("q").filter(|v| !v.is_empty()) {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": q, "$options": "i" } },
                doc! { "tag": { "$regex": q, "$options": "i" } },
                doc! { "serial_number": { "$regex": q, "$options": "i" } },
            ],
        );
    }

    if let Some(status) = params.get("status").filter(|v| !v.is_empty()) {
        filter.insert("status", status.as_str());
    }

    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_filter_empty() {
        let filter = asset_filter(&HashMap::new());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_asset_filter_free_text() {
        let params = parse_query_params("q=thinkpad");
        let filter = asset_filter(&params);

        let clauses = filter.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);

        let name_clause = clauses[0].as_document().unwrap();
        let regex = name_clause.get_document("name").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "thinkpad");
        assert_eq!(regex.get_str("$options").unwrap(), "i");

        assert!(clauses[1].as_document().unwrap().contains_key("tag"));
        assert!(clauses[2]
            .as_document()
            .unwrap()
            .contains_key("serial_number"));
    }

    #[test]
    fn test_asset_filter_status() {
        let params = parse_query_params("status=retired");
        let filter = asset_filter(&params);
        assert_eq!(filter.get_str("status").unwrap(), "retired");
        assert!(!filter.contains_key("$or"));
    }

    #[test]
    fn test_asset_filter_combined() {
        let params = parse_query_params("q=van&status=in_use");
        let filter = asset_filter(&params);
        assert!(filter.contains_key("$or"));
        assert_eq!(filter.get_str("status").unwrap(), "in_use");
    }

    #[test]
    fn test_asset_filter_ignores_empty_values() {
        let params = parse_query_params("q=&status=");
        let filter = asset_filter(&params);
        assert!(filter.is_empty());
    }
}
