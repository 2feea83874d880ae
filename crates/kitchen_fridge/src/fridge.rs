//! Fridge container

use crate::config::FridgeConfig;
use crate::error::{FridgeError, Result};
use crate::food::FoodEntry;
use indexmap::IndexMap;
use serde::Serialize;

/// Capacity-bounded food storage
///
/// Stacks are keyed by name and iterate in order of first deposit. The sum
/// of all quantities never exceeds the capacity and no stack is ever held
/// at quantity zero.
#[derive(Debug, Clone, Serialize)]
pub struct Fridge {
    /// Maximum total quantity
    capacity: u32,
    /// Sum of all stack quantities
    used_space: u32,
    /// name -> quantity, in order of first deposit
    contents: IndexMap<String, u32>,
}

impl Fridge {
    /// Create a fridge with the default capacity
    pub fn new() -> Self {
        Self::with_config(&FridgeConfig::default())
    }

    /// Create a fridge with the given capacity
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            used_space: 0,
            contents: IndexMap::new(),
        }
    }

    /// Create a fridge from configuration
    pub fn with_config(config: &FridgeConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Get capacity
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Get total quantity currently stored
    pub fn used_space(&self) -> u32 {
        self.used_space
    }

    /// Get free space
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity - self.used_space
    }

    /// Number of distinct stacks
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Check if the fridge holds nothing
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Check if there is no free space left
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    /// Check if a deposit of `quantity` would fit
    pub fn can_deposit(&self, quantity: u32) -> bool {
        quantity <= self.remaining_capacity()
    }

    /// Check if a stack with this name is held
    pub fn contains(&self, name: &str) -> bool {
        self.contents.contains_key(name)
    }

    /// Quantity held for a name (0 when absent)
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.contents.get(name).copied().unwrap_or(0)
    }

    /// Copy of the stack for a name
    pub fn get(&self, name: &str) -> Option<FoodEntry> {
        self.contents
            .get_key_value(name)
            .map(|(name, &quantity)| FoodEntry::new(name.as_str(), quantity))
    }

    /// All stacks in order of first deposit
    pub fn entries(&self) -> impl Iterator<Item = FoodEntry> + '_ {
        self.contents
            .iter()
            .map(|(name, &quantity)| FoodEntry::new(name.as_str(), quantity))
    }

    /// All stacks sorted by name, ignoring case
    pub fn sorted_entries(&self) -> Vec<FoodEntry> {
        let mut entries: Vec<FoodEntry> = self.entries().collect();
        entries.sort_by(FoodEntry::cmp_by_name);
        entries
    }

    /// Names of all stacks in order of first deposit
    pub fn list_names(&self) -> Vec<String> {
        self.contents.keys().cloned().collect()
    }

    /// Store `quantity` units of `name`
    ///
    /// Merges into an existing stack without moving it, otherwise appends a
    /// new stack. Nothing is stored when the quantity does not fit.
    ///
    /// Callers must pass a non-empty name; the fridge does not check it.
    pub fn deposit(&mut self, name: impl Into<String>, quantity: u32) -> Result<()> {
        let name = name.into();
        let available = self.remaining_capacity();
        if quantity > available {
            log::trace!(
                "Rejected deposit of {} {}: only {} free",
                quantity,
                name,
                available
            );
            return Err(FridgeError::capacity_exceeded(quantity, available));
        }

        if quantity == 0 {
            return Ok(());
        }

        let held = self.quantity_of(&name);
        // Re-inserting an existing key keeps its position
        self.contents.insert(name.clone(), held + quantity);
        self.used_space += quantity;

        log::debug!("Deposited {} {} ({} free)", quantity, name, self.remaining_capacity());
        Ok(())
    }

    /// Store an entry
    pub fn deposit_entry(&mut self, entry: FoodEntry) -> Result<()> {
        self.deposit(entry.name, entry.quantity)
    }

    /// Remove and return the whole stack for `name`
    ///
    /// Returns `None` when nothing by that name is held. Names are looked up
    /// as given, so an empty name simply finds nothing.
    pub fn withdraw_all(&mut self, name: &str) -> Option<FoodEntry> {
        let (name, quantity) = self.contents.shift_remove_entry(name)?;
        self.used_space -= quantity;

        log::debug!("Withdrew all {} {} ({} free)", quantity, name, self.remaining_capacity());
        Some(FoodEntry::new(name, quantity))
    }

    /// Remove `quantity` units of `name`
    ///
    /// Returns what was taken. A stack emptied by the withdrawal is removed.
    pub fn withdraw_some(&mut self, name: &str, quantity: u32) -> Result<FoodEntry> {
        let held = match self.contents.get(name) {
            Some(&held) if held >= quantity => held,
            other => {
                let available = other.copied().unwrap_or(0);
                log::trace!(
                    "Rejected withdrawal of {} {}: {} held",
                    quantity,
                    name,
                    available
                );
                return Err(FridgeError::insufficient_stock(name, quantity, available));
            }
        };

        let left = held - quantity;
        if left == 0 {
            self.contents.shift_remove(name);
        } else {
            self.contents.insert(name.to_string(), left);
        }
        self.used_space -= quantity;

        log::debug!("Withdrew {} {} ({} left)", quantity, name, left);
        Ok(FoodEntry::new(name, quantity))
    }

    /// Remove everything
    pub fn reset(&mut self) {
        if !self.contents.is_empty() {
            log::debug!("Emptied fridge of {} stacks", self.contents.len());
        }
        self.contents.clear();
        self.used_space = 0;
    }

    /// Replace the contents with `entries`, deposited in order
    ///
    /// Entries sharing a name are merged. If the total does not fit, the
    /// fridge is left untouched.
    pub fn restock<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<FoodEntry>,
    {
        let mut contents: IndexMap<String, u32> = IndexMap::new();
        let mut total: u32 = 0;

        for entry in entries {
            let entry: FoodEntry = entry.into();
            total = match total.checked_add(entry.quantity) {
                Some(sum) if sum <= self.capacity => sum,
                sum => {
                    let requested = sum.unwrap_or(u32::MAX);
                    log::trace!("Rejected restock of {}: capacity {}", requested, self.capacity);
                    return Err(FridgeError::capacity_exceeded(requested, self.capacity));
                }
            };
            if entry.quantity == 0 && !contents.contains_key(&entry.name) {
                continue;
            }
            let held = contents.get(&entry.name).copied().unwrap_or(0);
            contents.insert(entry.name, held + entry.quantity);
        }

        self.contents = contents;
        self.used_space = total;
        log::debug!("Restocked fridge with {} stacks", self.contents.len());
        Ok(())
    }
}

impl Default for Fridge {
    fn default() -> Self {
        Self::new()
    }
}
