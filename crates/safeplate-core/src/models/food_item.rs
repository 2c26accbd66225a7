// ABOUTME: Food item model shared by kitchen inventory entries and grocery list entries
// ABOUTME: Tolerates the empty expiry strings the mobile app stores for synthesized entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::constants::inventory::DEFAULT_CATEGORY;

/// An inventory entry or a synthesized grocery list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique item identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Expiry date (absent for synthesized grocery entries, written as `""`)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub expiry_date: Option<NaiveDate>,
    /// Category label ("dairy", "produce", "ingredient", ...)
    #[serde(default = "default_category")]
    pub category: String,
    /// Amount on hand (inventory) or required (grocery list)
    #[serde(default)]
    pub quantity: f64,
    /// Free-text unit ("cups", "g", "unit", ...)
    #[serde(default)]
    pub unit: String,
    /// Allergens declared on the packaging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    /// Scanned barcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Whether the entry currently sits in the kitchen inventory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_inventory: Option<bool>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

/// Write the expiry date as `"2025-01-31"`, or `""` when there is none
#[allow(clippy::ref_option)]
fn serialize_optional_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
        None => serializer.serialize_str(""),
    }
}

/// Accept `"2025-01-31"`, `""`, or `null` for the expiry date
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            // Accept full ISO timestamps by keeping only the date part
            let date_part = value.get(..10).unwrap_or(value);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Some)
                .map_err(D::Error::custom)
        }
    }
}

impl FoodItem {
    /// Create an item with a fresh identifier in the default category
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            expiry_date: None,
            category: DEFAULT_CATEGORY.to_owned(),
            quantity,
            unit: unit.into(),
            allergens: None,
            barcode: None,
            in_inventory: None,
        }
    }

    /// Set the expiry date
    #[must_use]
    pub const fn with_expiry(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the declared allergens
    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = Some(allergens.into_iter().map(Into::into).collect());
        self
    }

    /// Set the barcode
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Mark the item as present in the kitchen inventory
    #[must_use]
    pub const fn mark_in_inventory(mut self) -> Self {
        self.in_inventory = Some(true);
        self
    }

    /// Declared allergens, empty when none were recorded
    #[must_use]
    pub fn declared_allergens(&self) -> &[String] {
        self.allergens.as_deref().unwrap_or_default()
    }

    /// Trimmed lowercase name used as a merge key
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expiry_string_deserializes_to_none() {
        let item: FoodItem = serde_json::from_str(
            r#"{"id":"1","name":"Flour","expiryDate":"","category":"ingredient","quantity":2,"unit":"cups"}"#,
        )
        .unwrap();
        assert!(item.expiry_date.is_none());
        assert!(item.declared_allergens().is_empty());
    }

    #[test]
    fn test_timestamp_expiry_keeps_date_part() {
        let item: FoodItem = serde_json::from_str(
            r#"{"id":"2","name":"Milk","expiryDate":"2025-03-14T00:00:00.000Z","quantity":1,"unit":"l"}"#,
        )
        .unwrap();
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(item.category, "other");
    }

    #[test]
    fn test_missing_expiry_serializes_as_empty_string() {
        let item = FoodItem::new("flour", 2.0, "cups")
            .with_category("ingredient")
            .with_barcode("5000112637922");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["expiryDate"], "");
        assert_eq!(json["barcode"], "5000112637922");
        let back: FoodItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_expiry_date_serializes_as_plain_date() {
        let item = FoodItem::new("milk", 1.0, "l")
            .with_expiry(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["expiryDate"], "2025-03-14");
    }
}
