//! Environment-derived runtime configuration.

use std::env;
use std::path::PathBuf;

use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

const DATA_PATH_VAR: &str = "STOCKLEDGER_DATA_PATH";
const LOG_PATH_VAR: &str = "STOCKLEDGER_LOG_PATH";
const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file path.
    pub data_path: PathBuf,
    /// Log file path.
    pub log_path: PathBuf,
    /// Threshold for the low-stock scan.
    pub low_stock_threshold: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_path: env::var(DATA_PATH_VAR)
                .unwrap_or_else(|_| "inventory.json".to_string())
                .into(),
            log_path: env::var(LOG_PATH_VAR)
                .unwrap_or_else(|_| "inventory.log".to_string())
                .into(),
            low_stock_threshold: parse_threshold(env::var(LOW_STOCK_THRESHOLD_VAR).ok()),
        }
    }
}

/// Fall back to the default when the variable is unset or not an integer.
fn parse_threshold(raw: Option<String>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_parses_integer_values() {
        assert_eq!(parse_threshold(Some("9".to_string())), 9);
    }

    #[test]
    fn threshold_falls_back_when_unset_or_garbage() {
        assert_eq!(parse_threshold(None), DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(
            parse_threshold(Some("many".to_string())),
            DEFAULT_LOW_STOCK_THRESHOLD
        );
    }
}
