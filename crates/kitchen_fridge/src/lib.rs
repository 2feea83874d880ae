//! Kitchen Fridge - Bounded Food Storage
//!
//! This crate provides a capacity-bounded container of named food stacks.
//!
//! # Features
//!
//! - Deposit food, merging into an existing stack of the same name
//! - Withdraw a whole stack or part of one
//! - Listing in order of first deposit
//! - Aggregate capacity accounting with a per-fridge capacity
//! - JSON/env configuration
//! - Optional shared handle for cross-thread use
//!
//! # Example
//!
//! ```
//! use kitchen_fridge::prelude::*;
//!
//! let mut fridge = Fridge::new();
//! fridge.deposit("apple", 3).unwrap();
//! fridge.deposit("banana", 2).unwrap();
//!
//! assert_eq!(fridge.list_names(), vec!["apple", "banana"]);
//! assert_eq!(fridge.remaining_capacity(), 95);
//!
//! let taken = fridge.withdraw_some("apple", 2).unwrap();
//! assert_eq!(taken, FoodEntry::new("apple", 2));
//! ```

pub mod config;
pub mod error;
pub mod food;
pub mod fridge;
pub mod shared;

pub mod prelude {
    pub use crate::config::{ConfigError, FridgeConfig, DEFAULT_CAPACITY};
    pub use crate::error::{FridgeError, Result};
    pub use crate::food::FoodEntry;
    pub use crate::fridge::Fridge;
    pub use crate::shared::SharedFridge;
}

pub use prelude::*;
