//! Error types for fridge operations

use thiserror::Error;

/// Fridge operation errors
///
/// Both variants are ordinary business outcomes. The fridge is left exactly
/// as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FridgeError {
    /// Deposit would exceed the remaining space
    #[error("Not enough space left in fridge")]
    CapacityExceeded {
        /// Quantity the caller tried to store
        requested: u32,
        /// Space that was free at the time
        available: u32,
    },

    /// Partial withdrawal of a missing or too small stack
    #[error("Not enough {name} in fridge")]
    InsufficientStock {
        /// Food the caller asked for
        name: String,
        /// Quantity the caller tried to take
        requested: u32,
        /// Quantity held at the time (0 when absent)
        available: u32,
    },
}

impl FridgeError {
    /// Create a capacity exceeded error
    pub fn capacity_exceeded(requested: u32, available: u32) -> Self {
        FridgeError::CapacityExceeded {
            requested,
            available,
        }
    }

    /// Create an insufficient stock error
    pub fn insufficient_stock(name: impl Into<String>, requested: u32, available: u32) -> Self {
        FridgeError::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }

    /// Name of the food the error is about, if any
    pub fn food_name(&self) -> Option<&str> {
        match self {
            FridgeError::InsufficientStock { name, .. } => Some(name),
            FridgeError::CapacityExceeded { .. } => None,
        }
    }
}

/// Result type for fridge operations
pub type Result<T> = std::result::Result<T, FridgeError>;
