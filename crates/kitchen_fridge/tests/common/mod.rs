//! Shared fixtures for fridge integration tests

#![allow(dead_code)]

use kitchen_fridge::{FoodEntry, Fridge};

pub fn an_apple() -> FoodEntry {
    FoodEntry::new("apple", 1)
}

pub fn a_banana() -> FoodEntry {
    FoodEntry::new("banana", 1)
}

pub fn ten_apples() -> FoodEntry {
    FoodEntry::new("apple", 10)
}

pub fn ten_bananas() -> FoodEntry {
    FoodEntry::new("banana", 10)
}

pub fn hundred_apples() -> FoodEntry {
    FoodEntry::new("apple", 100)
}

pub fn too_much_food() -> FoodEntry {
    FoodEntry::new("pizza", 101)
}

/// Build a default fridge holding `foods`
pub fn fridge_with(foods: &[FoodEntry]) -> Fridge {
    let mut fridge = Fridge::new();
    fridge
        .restock(foods.iter().cloned())
        .expect("fixture foods should fit");
    fridge
}

/// Assert the fridge holds nothing and has all its space free
#[track_caller]
pub fn assert_fridge_empty(fridge: &Fridge) {
    assert_eq!(fridge.remaining_capacity(), fridge.capacity(), "empty space");
    assert!(fridge.list_names().is_empty(), "list food");
}

/// Assert the bookkeeping invariants hold
#[track_caller]
pub fn assert_consistent(fridge: &Fridge) {
    let sum: u32 = fridge.entries().map(|e| e.quantity).sum();
    assert_eq!(fridge.used_space(), sum, "used space matches stacks");
    assert!(fridge.used_space() <= fridge.capacity(), "within capacity");
    assert!(fridge.entries().all(|e| e.quantity > 0), "no empty stacks");

    let names = fridge.list_names();
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len(), "one stack per name");
}
