//! Inventory CLI entry point.

mod config;
mod ops;

use stockledger_inventory::{InventoryStore, Journal};

use crate::config::Config;

fn main() {
    let config = Config::from_env();

    if let Err(err) = stockledger_observability::init(&config.log_path) {
        eprintln!("logging disabled: {err:#}");
    }

    let mut store = InventoryStore::new();
    let mut journal = Journal::new();

    ops::add_item(&mut store, "apple", 10, Some(&mut journal));
    ops::add_item(&mut store, "banana", -2, Some(&mut journal));
    ops::add_item_raw(&mut store, "123", "ten", Some(&mut journal));

    ops::remove_item(&mut store, "apple", 3);
    ops::remove_item(&mut store, "orange", 1);

    println!("Apple stock: {}", store.quantity("apple"));
    println!("Low items: {:?}", store.low_stock(config.low_stock_threshold));

    ops::save_data(&store, &config.data_path);
    let loaded = ops::load_data(&config.data_path);
    store.merge(loaded);

    ops::print_report(&store);
}
