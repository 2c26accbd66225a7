// ABOUTME: Inventory expiry tracker reporting items that are expired or expiring soon
// ABOUTME: Items without an expiry date are never reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

use chrono::{Days, NaiveDate};
use safeplate_core::models::FoodItem;

/// Whole days from `today` until the item expires, negative once expired
#[must_use]
pub fn days_until_expiry(item: &FoodItem, today: NaiveDate) -> Option<i64> {
    item.expiry_date
        .map(|expiry| expiry.signed_duration_since(today).num_days())
}

/// Items expiring between `today` and `today + days` inclusive, soonest first
#[must_use]
pub fn expiring_within(inventory: &[FoodItem], today: NaiveDate, days: u64) -> Vec<&FoodItem> {
    let horizon = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    let mut expiring: Vec<&FoodItem> = inventory
        .iter()
        .filter(|item| {
            item.expiry_date
                .is_some_and(|expiry| expiry >= today && expiry <= horizon)
        })
        .collect();
    expiring.sort_by_key(|item| item.expiry_date);
    expiring
}

/// Items whose expiry date is before `today`, oldest first
#[must_use]
pub fn expired(inventory: &[FoodItem], today: NaiveDate) -> Vec<&FoodItem> {
    let mut past: Vec<&FoodItem> = inventory
        .iter()
        .filter(|item| item.expiry_date.is_some_and(|expiry| expiry < today))
        .collect();
    past.sort_by_key(|item| item.expiry_date);
    past
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_expiry() {
        let today = date(2025, 3, 10);
        let milk = FoodItem::new("Milk", 1.0, "l").with_expiry(date(2025, 3, 12));
        let bread = FoodItem::new("Bread", 1.0, "loaf").with_expiry(date(2025, 3, 8));
        let rice = FoodItem::new("Rice", 1.0, "kg");

        assert_eq!(days_until_expiry(&milk, today), Some(2));
        assert_eq!(days_until_expiry(&bread, today), Some(-2));
        assert_eq!(days_until_expiry(&rice, today), None);
    }
}
