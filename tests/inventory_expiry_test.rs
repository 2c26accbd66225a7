// ABOUTME: Integration tests for inventory expiry tracking
// ABOUTME: Tests the look-ahead window boundaries, ordering and undated items
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

mod common;

use common::{date, stock};
use safeplate::intelligence::{expired, expiring_within};
use safeplate::models::FoodItem;

fn kitchen() -> Vec<FoodItem> {
    vec![
        stock("Yogurt", 2.0, "pot").with_expiry(date(2025, 3, 13)),
        stock("Milk", 1.0, "l").with_expiry(date(2025, 3, 10)),
        stock("Bread", 1.0, "loaf").with_expiry(date(2025, 3, 9)),
        stock("Rice", 2.0, "kg"),
        stock("Cheese", 1.0, "block").with_expiry(date(2025, 3, 11)),
        stock("Ham", 1.0, "pack").with_expiry(date(2025, 3, 1)),
        stock("Jam", 1.0, "jar").with_expiry(date(2025, 6, 1)),
    ]
}

fn names(items: &[&FoodItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

#[test]
fn test_expiring_window_is_inclusive_and_sorted() {
    let inventory = kitchen();

    let soon = expiring_within(&inventory, date(2025, 3, 10), 3);

    assert_eq!(names(&soon), vec!["Milk", "Cheese", "Yogurt"]);
}

#[test]
fn test_zero_day_window_is_today_only() {
    let inventory = kitchen();

    let today = expiring_within(&inventory, date(2025, 3, 10), 0);

    assert_eq!(names(&today), vec!["Milk"]);
}

#[test]
fn test_expired_items_oldest_first() {
    let inventory = kitchen();

    let past = expired(&inventory, date(2025, 3, 10));

    assert_eq!(names(&past), vec!["Ham", "Bread"]);
}

#[test]
fn test_undated_items_are_never_reported() {
    let inventory = vec![stock("Rice", 1.0, "kg"), stock("Salt", 1.0, "box")];
    let today = date(2025, 3, 10);

    assert!(expiring_within(&inventory, today, 10_000).is_empty());
    assert!(expired(&inventory, today).is_empty());
}

#[test]
fn test_huge_window_does_not_overflow() {
    let inventory = kitchen();

    let all_future = expiring_within(&inventory, date(2025, 3, 10), u64::MAX);

    assert_eq!(all_future.len(), 4);
}
