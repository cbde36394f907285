//! Asset document schema
//!
//! Fixed assets in the organization. Collection name: "asset".

use bson::oid::ObjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::schemas::RecordDoc;
use crate::types::StockroomError;

/// Collection name for assets
pub const ASSET_COLLECTION: &str = "asset";

/// Asset listings are capped lower than other kinds
pub const ASSET_LIST_LIMIT: i64 = 100;

/// Asset lifecycle status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Retired,
}

/// Asset document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AssetDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Asset name
    pub name: String,

    /// Category (e.g. Laptop, Vehicle, Furniture)
    pub category: String,

    /// Asset tag or barcode, intended unique (not enforced by the store)
    pub tag: String,

    /// Manufacturer serial number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: AssetStatus,

    /// Reference to a location document id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Person currently responsible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    /// Purchase date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// Purchase cost, non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Additional notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecordDoc for AssetDoc {
    const COLLECTION: &'static str = ASSET_COLLECTION;

    fn object_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn validate(&self) -> Result<(), StockroomError> {
        if let Some(cost) = self.cost {
            if cost < 0.0 {
                return Err(StockroomError::Validation(format!(
                    "cost must be >= 0, got {}",
                    cost
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_available() {
        let asset: AssetDoc = serde_json::from_str(
            r#"{"name":"ThinkPad T14","category":"Laptop","tag":"IT-0042"}"#,
        )
        .unwrap();
        assert_eq!(asset.status, AssetStatus::Available);
        assert!(asset.id.is_none());
        assert!(asset.validate().is_ok());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<AssetDoc>(
            r#"{"name":"Van","category":"Vehicle","tag":"FL-07","status":"broken"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_status_snake_case_wire_form() {
        let asset: AssetDoc = serde_json::from_str(
            r#"{"name":"Van","category":"Vehicle","tag":"FL-07","status":"in_use"}"#,
        )
        .unwrap();
        assert_eq!(asset.status, AssetStatus::InUse);
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["status"], "in_use");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result = serde_json::from_str::<AssetDoc>(r#"{"name":"Desk","tag":"FUR-1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let asset: AssetDoc = serde_json::from_str(
            r#"{"name":"Desk","category":"Furniture","tag":"FUR-1","cost":-10.0}"#,
        )
        .unwrap();
        assert!(matches!(
            asset.validate(),
            Err(StockroomError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_cost_accepted() {
        let asset: AssetDoc = serde_json::from_str(
            r#"{"name":"Desk","category":"Furniture","tag":"FUR-1","cost":0.0}"#,
        )
        .unwrap();
        assert!(asset.validate().is_ok());
    }

    #[test]
    fn test_purchase_date_parses_iso_format() {
        let asset: AssetDoc = serde_json::from_str(
            r#"{"name":"Desk","category":"Furniture","tag":"FUR-1","purchase_date":"2024-03-15"}"#,
        )
        .unwrap();
        assert_eq!(
            asset.purchase_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }
}
