//! Audit document schema
//!
//! Audit trail for asset actions (status changes, moves, edits).
//! Collection name: "audit".

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::db::schemas::RecordDoc;

/// Collection name for audits
pub const AUDIT_COLLECTION: &str = "audit";

/// Audit document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AuditDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Reference to an asset document id
    pub asset_id: String,

    /// Action performed
    pub action: String,

    /// Optional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecordDoc for AuditDoc {
    const COLLECTION: &'static str = AUDIT_COLLECTION;

    fn object_id(&self) -> Option<ObjectId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_asset_and_action() {
        assert!(serde_json::from_str::<AuditDoc>(r#"{"asset_id":"abc"}"#).is_err());
        let audit: AuditDoc =
            serde_json::from_str(r#"{"asset_id":"abc","action":"status changed to retired"}"#)
                .unwrap();
        assert_eq!(audit.action, "status changed to retired");
    }
}
