use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{StoreError, StoreResult};

/// Threshold below which an item counts as low stock when the caller does
/// not supply one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Caller-owned journal of add operations.
///
/// Entries are human-readable, timestamped lines. They are never persisted
/// and never read back by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn record(&mut self, occurred_at: DateTime<Utc>, message: &str) {
        self.entries
            .push(format!("{}: {}", occurred_at.to_rfc3339(), message));
    }
}

/// In-memory stock mapping: item name -> quantity.
///
/// Serializes transparently as the flat JSON object `{"<item>": <qty>}`.
/// Iteration order is sorted by item name, so reports and low-stock scans
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<String, i64>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `item` by `qty`, creating the entry if absent.
    ///
    /// Negative `qty` is accepted and may leave a negative quantity in
    /// place; the delete-at-zero rule applies only on the removal path.
    /// On success, appends a timestamped line to `journal` if one was
    /// supplied. Timestamps are passed in so the store stays deterministic.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        occurred_at: DateTime<Utc>,
        journal: Option<&mut Journal>,
    ) -> StoreResult<()> {
        if item.trim().is_empty() {
            return Err(StoreError::validation("item name cannot be empty"));
        }

        let current = self.quantity(item);
        let updated = current.checked_add(qty).ok_or_else(|| {
            StoreError::arithmetic(format!("quantity overflow adding {qty} of {item}"))
        })?;
        self.items.insert(item.to_string(), updated);

        if let Some(journal) = journal {
            journal.record(occurred_at, &format!("Added {qty} of {item}"));
        }
        Ok(())
    }

    /// Subtract `qty` from `item`.
    ///
    /// The entry is deleted entirely once its quantity reaches zero or
    /// below. Removal of an absent item reports [`StoreError::NotFound`].
    pub fn remove(&mut self, item: &str, qty: i64) -> StoreResult<()> {
        let current = match self.items.get(item) {
            Some(stored) => *stored,
            None => return Err(StoreError::not_found()),
        };

        let updated = current.checked_sub(qty).ok_or_else(|| {
            StoreError::arithmetic(format!("quantity overflow removing {qty} of {item}"))
        })?;

        if updated <= 0 {
            self.items.remove(item);
        } else {
            self.items.insert(item.to_string(), updated);
        }
        Ok(())
    }

    /// Stored quantity, or 0 when the item is absent. Never fails.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items with quantity strictly below `threshold`, in
    /// iteration order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Adopt a loaded mapping into the live store, overwriting per key.
    pub fn merge(&mut self, incoming: BTreeMap<String, i64>) {
        for (item, qty) in incoming {
            self.items.insert(item, qty);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
