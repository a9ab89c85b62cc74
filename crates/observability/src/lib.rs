//! Tracing, logging, metrics (shared setup).

use std::path::Path;

/// Initialize process-wide observability (tracing/logging), appending log
/// lines to the file at `log_path`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(log_path: &Path) -> anyhow::Result<()> {
    tracing::init(log_path)
}

/// Tracing configuration (filters, formatting, log destination).
pub mod tracing;
