//! Record store for the performance pipeline — static scenario catalog,
//! remote origin client, and a TTL-cached loader with a fallback chain.

#![warn(clippy::unwrap_used)]

pub mod datasets;
pub mod loader;
pub mod remote;

pub use loader::{DataProvenance, DataSource, LoadedDataset, RecordStore};
pub use remote::{HttpOrigin, RemoteOrigin};
