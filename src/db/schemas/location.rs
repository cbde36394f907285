//! Location document schema
//!
//! Physical locations where assets reside. Collection name: "location".

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::db::schemas::RecordDoc;

/// Collection name for locations
pub const LOCATION_COLLECTION: &str = "location";

/// Location document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LocationDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Location name
    pub name: String,

    /// Short code
    pub code: String,

    /// Street address or details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RecordDoc for LocationDoc {
    const COLLECTION: &'static str = LOCATION_COLLECTION;

    fn object_id(&self) -> Option<ObjectId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_optional() {
        let location: LocationDoc =
            serde_json::from_str(r#"{"name":"HQ","code":"HQ1"}"#).unwrap();
        assert_eq!(location.name, "HQ");
        assert!(location.address.is_none());
    }

    #[test]
    fn test_missing_code_rejected() {
        assert!(serde_json::from_str::<LocationDoc>(r#"{"name":"HQ"}"#).is_err());
    }
}
