//! `stockledger-infra` — infrastructure shell around the inventory domain.
//!
//! Persistence lives here so the domain crates stay free of IO.

pub mod snapshot;

pub use snapshot::SnapshotError;
