//! Database schemas for Stockroom
//!
//! Defines MongoDB document structures for assets, locations, assignments,
//! and audits. Field presence, types, and enum membership are enforced by
//! serde when the request body is deserialized; anything serde cannot express
//! (e.g. a non-negative cost) lives in `RecordDoc::validate`.

mod asset;
mod assignment;
mod audit;
mod location;

pub use asset::{AssetDoc, AssetStatus, ASSET_COLLECTION, ASSET_LIST_LIMIT};
pub use assignment::{AssignmentDoc, ASSIGNMENT_COLLECTION};
pub use audit::{AuditDoc, AUDIT_COLLECTION};
pub use location::{LocationDoc, LOCATION_COLLECTION};

use bson::oid::ObjectId;

use crate::types::StockroomError;

/// Default listing cap for non-asset collections
pub const DEFAULT_LIST_LIMIT: i64 = 200;

/// Trait for documents stored in a named collection
pub trait RecordDoc {
    /// Collection the record kind lives in
    const COLLECTION: &'static str;

    /// The store-assigned id, if the document has been persisted
    fn object_id(&self) -> Option<ObjectId>;

    /// Constraints beyond shape and type; rejected before any persistence call
    fn validate(&self) -> Result<(), StockroomError> {
        Ok(())
    }
}
