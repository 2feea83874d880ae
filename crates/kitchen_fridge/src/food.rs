//! Food entries

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A named stack of food
///
/// Two entries are equal when both name and quantity match. Names are
/// case-sensitive identities; [`FoodEntry::cmp_by_name`] offers the
/// case-insensitive ordering used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Food name
    pub name: String,
    /// Quantity
    pub quantity: u32,
}

impl FoodEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Create a single unit
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, 1)
    }

    /// Food name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Check if this entry holds nothing
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Compare names ignoring ASCII and Unicode case
    pub fn cmp_by_name(&self, other: &FoodEntry) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for FoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.name, self.quantity)
    }
}

impl From<(&str, u32)> for FoodEntry {
    fn from((name, quantity): (&str, u32)) -> Self {
        Self::new(name, quantity)
    }
}

impl From<(String, u32)> for FoodEntry {
    fn from((name, quantity): (String, u32)) -> Self {
        Self::new(name, quantity)
    }
}
