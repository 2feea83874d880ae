//! Shared fridge handle
//!
//! [`Fridge`] does no locking of its own. `SharedFridge` wraps one behind a
//! mutex so several threads can use it; every method holds the lock for a
//! single operation only.

use crate::config::FridgeConfig;
use crate::error::Result;
use crate::food::FoodEntry;
use crate::fridge::Fridge;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, thread-safe handle to one fridge
#[derive(Debug, Clone, Default)]
pub struct SharedFridge {
    inner: Arc<Mutex<Fridge>>,
}

impl SharedFridge {
    /// Wrap an existing fridge
    pub fn new(fridge: Fridge) -> Self {
        Self {
            inner: Arc::new(Mutex::new(fridge)),
        }
    }

    /// Create a shared fridge from configuration
    pub fn with_config(config: &FridgeConfig) -> Self {
        Self::new(Fridge::with_config(config))
    }

    /// Lock for a sequence of operations that must not interleave
    pub fn lock(&self) -> MutexGuard<'_, Fridge> {
        self.inner.lock()
    }

    /// Store `quantity` units of `name`
    pub fn deposit(&self, name: impl Into<String>, quantity: u32) -> Result<()> {
        self.inner.lock().deposit(name, quantity)
    }

    /// Remove the whole stack for `name`
    pub fn withdraw_all(&self, name: &str) -> Option<FoodEntry> {
        self.inner.lock().withdraw_all(name)
    }

    /// Remove `quantity` units of `name`
    pub fn withdraw_some(&self, name: &str, quantity: u32) -> Result<FoodEntry> {
        self.inner.lock().withdraw_some(name, quantity)
    }

    /// Names in order of first deposit
    pub fn list_names(&self) -> Vec<String> {
        self.inner.lock().list_names()
    }

    /// Free space
    pub fn remaining_capacity(&self) -> u32 {
        self.inner.lock().remaining_capacity()
    }

    /// Remove everything
    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Fridge {
        self.inner.lock().clone()
    }
}

impl From<Fridge> for SharedFridge {
    fn from(fridge: Fridge) -> Self {
        Self::new(fridge)
    }
}
