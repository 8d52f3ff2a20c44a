// 🧾 Receipt - Input data model
// A purchase receipt as submitted by a caller. Amounts, dates and times stay
// strings here; each scoring rule parses what it needs on its own.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// ITEM
// ============================================================================

/// One purchased line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Free-form item description ("Mountain Dew 12PK")
    #[serde(rename = "shortDescription")]
    pub description: String,

    /// Price as a decimal string ("6.49")
    pub price: String,
}

impl Item {
    pub fn new(description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            description: description.into(),
            price: price.into(),
        }
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// Receipt - immutable input value, no identity until stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,

    /// Calendar date, `YYYY-MM-DD`
    pub purchase_date: String,

    /// 24-hour clock time, `HH:MM`
    pub purchase_time: String,

    pub items: Vec<Item>,

    /// Receipt total as a decimal string ("35.35")
    pub total: String,
}

impl Receipt {
    /// Parse a receipt from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse receipt JSON")
    }

    /// Load a receipt from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read receipt file: {:?}", path.as_ref()))?;

        Receipt::from_json(&content)
            .with_context(|| format!("Invalid receipt in {:?}", path.as_ref()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_uses_wire_field_names() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let receipt = Receipt::from_json(json).unwrap();

        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.purchase_date, "2022-01-02");
        assert_eq!(receipt.purchase_time, "08:13");
        assert_eq!(receipt.total, "2.65");
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0], Item::new("Pepsi - 12-oz", "1.25"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "items": [], "total": "1.00"}"#;

        let err = Receipt::from_json(json).unwrap_err();
        assert!(format!("{:#}", err).contains("purchaseTime"));
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item::new("Doritos Nacho Cheese", "3.35")],
            total: "3.35".to_string(),
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["purchaseTime"], "13:01");
        assert_eq!(value["items"][0]["shortDescription"], "Doritos Nacho Cheese");
    }

    #[test]
    fn test_from_file_reads_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/target.json");
        let receipt = Receipt::from_file(&path).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 5);
    }

    #[test]
    fn test_from_file_missing_path_has_context() {
        let err = Receipt::from_file("/nonexistent/receipt.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read receipt file"));
    }
}
