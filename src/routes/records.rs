//! Generic create/list plumbing shared by all record kinds
//!
//! Every endpoint is one of two shapes: deserialize a body and insert it,
//! or build a filter and list matches. The record kinds only differ in
//! their schema, collection name, filter builder, and listing cap.

use bson::Document;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::schemas::RecordDoc;
use crate::routes::{error_response, json_response};
use crate::server::AppState;

/// Deserialize the request body, validate it, and insert it into the
/// record kind's collection. Responds with the generated id.
pub(crate) async fn create_record<T>(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>>
where
    T: RecordDoc + Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!("Failed to read {} request body: {}", T::COLLECTION, e);
            return error_response(StatusCode::BAD_REQUEST, "Failed to read request body");
        }
    };

    // Shape, types, and enum membership are checked here by serde
    let record: T = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            warn!("Invalid {} payload: {}", T::COLLECTION, e);
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &format!("Invalid {} payload: {}", T::COLLECTION, e),
            );
        }
    };

    // Constraints serde cannot express, rejected before any store call
    if let Err(e) = record.validate() {
        warn!("Rejected {} payload: {}", T::COLLECTION, e);
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string());
    }

    let mongo = match &state.mongo {
        Some(m) => m,
        None => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database not available");
        }
    };

    match mongo.collection::<T>(T::COLLECTION).insert_one(record).await {
        Ok(id) => {
            let id = id.to_hex();
            info!(collection = T::COLLECTION, id = %id, "Record created");
            let body = serde_json::to_vec(&serde_json::json!({ "id": id }))
                .unwrap_or_default();
            json_response(body)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

/// List documents matching `filter`, capped at `limit`, with store ids
/// normalized to the public `id` field.
pub(crate) async fn list_records<T>(
    state: Arc<AppState>,
    filter: Document,
    limit: i64,
) -> Response<Full<Bytes>>
where
    T: RecordDoc + Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    let mongo = match &state.mongo {
        Some(m) => m,
        None => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database not available");
        }
    };

    match mongo
        .collection::<T>(T::COLLECTION)
        .find_many(filter, limit)
        .await
    {
        Ok(docs) => {
            let records: Vec<serde_json::Value> = docs.iter().map(to_public).collect();
            let body = serde_json::to_vec(&records).unwrap_or_default();
            json_response(body)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

/// Replace the store's `_id` field with a public string `id`
pub(crate) fn to_public<T>(doc: &T) -> serde_json::Value
where
    T: RecordDoc + Serialize,
{
    let mut value = serde_json::to_value(doc).unwrap_or(serde_json::Value::Null);
    if let Some(map) = value.as_object_mut() {
        map.remove("_id");
        let id = doc.object_id().map(|o| o.to_hex()).unwrap_or_default();
        map.insert("id".to_string(), serde_json::Value::String(id));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schemas::{AssetStatus, LocationDoc};
    use bson::oid::ObjectId;

    #[test]
    fn test_to_public_replaces_internal_id() {
        let oid = ObjectId::new();
        let location = LocationDoc {
            id: Some(oid),
            name: "HQ".to_string(),
            code: "HQ1".to_string(),
            address: None,
        };

        let public = to_public(&location);
        assert_eq!(public["id"], oid.to_hex());
        assert_eq!(public["name"], "HQ");
        assert_eq!(public["code"], "HQ1");
        assert!(public.get("_id").is_none());
    }

    fn state_without_store() -> Arc<AppState> {
        let args = crate::config::Args {
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "fixed_assets".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        };
        Arc::new(AppState::new(args, None))
    }

    #[tokio::test]
    async fn test_list_without_store_is_server_error() {
        let resp = list_records::<LocationDoc>(state_without_store(), Document::new(), 200).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_to_public_status_wire_form() {
        use crate::db::schemas::AssetDoc;

        let asset = AssetDoc {
            id: Some(ObjectId::new()),
            name: "ThinkPad T14".to_string(),
            category: "Laptop".to_string(),
            tag: "IT-0042".to_string(),
            status: AssetStatus::Maintenance,
            ..Default::default()
        };

        let public = to_public(&asset);
        assert_eq!(public["status"], "maintenance");
        assert!(public.get("_id").is_none());
        assert!(public["id"].as_str().is_some());
    }
}
