//! Integration tests for the fridge
//!
//! Covers the public operations end to end:
//! - Deposits, merging and capacity limits
//! - Whole and partial withdrawals
//! - Listing order and reset

mod common;

use common::*;
use kitchen_fridge::{FoodEntry, Fridge, FridgeError};

#[test]
fn test_new_fridge_is_empty() {
    let fridge = Fridge::new();

    assert_eq!(fridge.remaining_capacity(), 100);
    assert!(fridge.list_names().is_empty());
    assert_fridge_empty(&fridge);
}

#[test]
fn test_put_one_apple() {
    let mut fridge = Fridge::new();
    fridge.deposit_entry(an_apple()).unwrap();

    assert_eq!(fridge.remaining_capacity(), 99);
    assert_eq!(fridge.list_names(), vec!["apple"]);
}

#[test]
fn test_put_put_then_overflow() {
    let mut fridge = Fridge::new();
    fridge.deposit("apple", 1).unwrap();
    assert_eq!(fridge.remaining_capacity(), 99);
    assert_eq!(fridge.list_names(), vec!["apple"]);

    fridge.deposit("banana", 1).unwrap();
    assert_eq!(fridge.remaining_capacity(), 98);
    assert_eq!(fridge.list_names(), vec!["apple", "banana"]);

    let err = fridge.deposit("carrot", 100).unwrap_err();
    assert!(matches!(err, FridgeError::CapacityExceeded { requested: 100, available: 98 }));
    assert_eq!(err.to_string(), "Not enough space left in fridge");

    assert_eq!(fridge.remaining_capacity(), 98);
    assert_eq!(fridge.list_names(), vec!["apple", "banana"]);
}

#[test]
fn test_put_twice_merges() {
    let mut fridge = Fridge::new();
    fridge.deposit_entry(an_apple()).unwrap();
    fridge.deposit_entry(an_apple()).unwrap();

    assert_eq!(fridge.remaining_capacity(), 98);
    assert_eq!(fridge.list_names(), vec!["apple"]);
    assert_eq!(fridge.get("apple"), Some(FoodEntry::new("apple", 2)));
}

#[test]
fn test_put_exactly_remaining_space() {
    let mut fridge = fridge_with(&[ten_bananas()]);
    let space = fridge.remaining_capacity();

    let err = fridge.deposit("apple", space + 1).unwrap_err();
    assert!(matches!(err, FridgeError::CapacityExceeded { .. }));
    assert_eq!(fridge.remaining_capacity(), space);
    assert_eq!(fridge.list_names(), vec!["banana"]);

    fridge.deposit("apple", space).unwrap();
    assert_eq!(fridge.remaining_capacity(), 0);
    assert!(fridge.is_full());
}

#[test]
fn test_too_much_food_never_fits() {
    let mut fridge = Fridge::new();

    assert!(fridge.deposit_entry(too_much_food()).is_err());
    assert_fridge_empty(&fridge);

    fridge.deposit_entry(hundred_apples()).unwrap();
    assert!(fridge.deposit_entry(an_apple()).is_err());
    assert_eq!(fridge.quantity_of("apple"), 100);
}

#[test]
fn test_list_order_follows_first_deposit() {
    let fridge = fridge_with(&[ten_apples(), ten_bananas()]);
    assert_eq!(fridge.list_names(), vec!["apple", "banana"]);

    let fridge = fridge_with(&[ten_bananas(), ten_apples()]);
    assert_eq!(fridge.list_names(), vec!["banana", "apple"]);
}

#[test]
fn test_get_all() {
    let mut fridge = Fridge::new();
    fridge.deposit_entry(ten_apples()).unwrap();
    assert_eq!(fridge.remaining_capacity(), 90);
    assert_eq!(fridge.list_names(), vec!["apple"]);

    let food = fridge.withdraw_all("apple");
    assert_eq!(food, Some(ten_apples()));
    assert_eq!(fridge.remaining_capacity(), 100);
    assert!(fridge.list_names().is_empty());
}

#[test]
fn test_get_all_twice() {
    let mut fridge = fridge_with(&[ten_apples()]);

    let first = fridge.withdraw_all("apple");
    assert_eq!(fridge.remaining_capacity(), 100);
    assert_eq!(first.map(|f| f.quantity), Some(10));

    let second = fridge.withdraw_all("apple");
    assert_eq!(fridge.remaining_capacity(), 100);
    assert!(second.is_none());
}

#[test]
fn test_get_all_round_trip() {
    for quantity in [1, 37, 100] {
        let mut fridge = Fridge::new();
        fridge.deposit("milk", quantity).unwrap();

        assert_eq!(fridge.withdraw_all("milk"), Some(FoodEntry::new("milk", quantity)));
        assert_fridge_empty(&fridge);
    }
}

#[test]
fn test_get_some() {
    let mut fridge = Fridge::new();
    fridge.deposit("apple", 11).unwrap();
    assert_eq!(fridge.remaining_capacity(), 89);
    assert_eq!(fridge.list_names(), vec!["apple"]);

    let food = fridge.withdraw_some("apple", 10).unwrap();
    assert_eq!(food.name, "apple");
    assert_eq!(food.quantity, 10);
    assert_eq!(fridge.remaining_capacity(), 99);
    assert_eq!(fridge.list_names(), vec!["apple"]);

    let err = fridge.withdraw_some("apple", 11).unwrap_err();
    assert_eq!(err.to_string(), "Not enough apple in fridge");
    assert!(matches!(
        err,
        FridgeError::InsufficientStock { ref name, requested: 11, available: 1 } if name == "apple"
    ));
    assert_eq!(fridge.remaining_capacity(), 99);
}

#[test]
fn test_get_some_of_missing_food() {
    let mut fridge = fridge_with(&[ten_apples()]);

    let err = fridge.withdraw_some("banana", 1).unwrap_err();
    assert_eq!(err.food_name(), Some("banana"));
    assert_eq!(err.to_string(), "Not enough banana in fridge");

    // Zero of something absent still fails
    assert!(fridge.withdraw_some("banana", 0).is_err());
    assert_eq!(fridge.list_names(), vec!["apple"]);
}

#[test]
fn test_get_some_everything_removes_name() {
    let mut fridge = fridge_with(&[ten_apples(), a_banana()]);

    assert_eq!(fridge.withdraw_some("apple", 10), Ok(ten_apples()));
    assert_eq!(fridge.list_names(), vec!["banana"]);
    assert_eq!(fridge.remaining_capacity(), 99);
    assert_consistent(&fridge);
}

#[test]
fn test_empty_twice() {
    let mut fridge = fridge_with(&[ten_apples(), ten_bananas()]);

    fridge.reset();
    assert_fridge_empty(&fridge);

    fridge.reset();
    assert_fridge_empty(&fridge);
}

#[test]
fn test_restock_replaces_contents() {
    let mut fridge = fridge_with(&[ten_apples()]);

    fridge.restock([a_banana(), an_apple()]).unwrap();
    assert_eq!(fridge.list_names(), vec!["banana", "apple"]);
    assert_eq!(fridge.remaining_capacity(), 98);

    let err = fridge.restock([hundred_apples(), a_banana()]).unwrap_err();
    assert!(matches!(err, FridgeError::CapacityExceeded { requested: 101, .. }));
    assert_eq!(fridge.list_names(), vec!["banana", "apple"]);
}

#[test]
fn test_independent_capacities() {
    let mut small = Fridge::with_capacity(3);
    let mut large = Fridge::with_capacity(1000);

    assert!(small.deposit("apple", 4).is_err());
    large.deposit("apple", 400).unwrap();

    assert_eq!(small.remaining_capacity(), 3);
    assert_eq!(large.remaining_capacity(), 600);
}
