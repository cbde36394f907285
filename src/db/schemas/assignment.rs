//! Assignment document schema
//!
//! Asset assignment history. Collection name: "assignment".
//! References assets and locations by id string; integrity is not enforced.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::db::schemas::RecordDoc;

/// Collection name for assignments
pub const ASSIGNMENT_COLLECTION: &str = "assignment";

/// Assignment document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AssignmentDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Reference to an asset document id
    pub asset_id: String,

    /// Person responsible
    pub assignee_name: String,

    /// Reference to a location document id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

impl RecordDoc for AssignmentDoc {
    const COLLECTION: &'static str = ASSIGNMENT_COLLECTION;

    fn object_id(&self) -> Option<ObjectId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_asset_and_assignee() {
        assert!(serde_json::from_str::<AssignmentDoc>(r#"{"asset_id":"abc"}"#).is_err());
        let assignment: AssignmentDoc =
            serde_json::from_str(r#"{"asset_id":"abc","assignee_name":"Kim Reyes"}"#).unwrap();
        assert!(assignment.location_id.is_none());
    }
}
