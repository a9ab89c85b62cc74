//! Logging policy wrapper over the domain and snapshot operations.
//!
//! Every failure degrades to a log line plus a no-op; nothing here returns
//! an error to the driver, so the process never crashes on bad input or a
//! bad snapshot file.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use tracing::{error, info, warn};

use stockledger_core::StoreError;
use stockledger_infra::snapshot;
use stockledger_inventory::{InventoryStore, Journal};

/// Add `qty` of `item`, logging instead of failing on invalid input.
pub fn add_item(store: &mut InventoryStore, item: &str, qty: i64, journal: Option<&mut Journal>) {
    match store.add(item, qty, Utc::now(), journal) {
        Ok(()) => {}
        Err(err @ StoreError::Arithmetic(_)) => {
            error!("add failed for {item}: {err}");
        }
        Err(err) => {
            warn!("invalid input for add_item: {item:?}, {qty}: {err}");
        }
    }
}

/// Add with an unparsed quantity argument.
///
/// A quantity that does not parse as an integer is rejected with a warning
/// and no mutation.
pub fn add_item_raw(
    store: &mut InventoryStore,
    item: &str,
    raw_qty: &str,
    journal: Option<&mut Journal>,
) {
    match raw_qty.trim().parse::<i64>() {
        Ok(qty) => add_item(store, item, qty, journal),
        Err(_) => {
            warn!("invalid input for add_item: {item:?}, {raw_qty:?}");
        }
    }
}

/// Remove `qty` of `item`; a missing item is a logged no-op.
pub fn remove_item(store: &mut InventoryStore, item: &str, qty: i64) {
    match store.remove(item, qty) {
        Ok(()) => {}
        Err(StoreError::NotFound) => {
            warn!("tried to remove nonexistent item: {item}");
        }
        Err(err) => {
            error!("error while removing item {item}: {err}");
        }
    }
}

/// Load a snapshot, degrading to an empty mapping on any failure.
pub fn load_data(path: &Path) -> BTreeMap<String, i64> {
    match snapshot::load(path) {
        Ok(items) => items,
        Err(err) => {
            error!("error loading data: {err}");
            BTreeMap::new()
        }
    }
}

/// Persist the store; on failure the save is logged and incomplete.
pub fn save_data(store: &InventoryStore, path: &Path) {
    if let Err(err) = snapshot::save(store, path) {
        error!("error saving data: {err}");
    }
}

/// Emit the stock report to stdout.
pub fn print_report(store: &InventoryStore) {
    info!("printing inventory data");
    println!("Items Report");
    for (item, qty) in store.iter() {
        println!("{item} -> {qty}");
    }
}
