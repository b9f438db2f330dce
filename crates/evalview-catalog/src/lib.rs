//! # evalview-catalog - Run Catalog Access
//!
//! Reads evaluation runs and their per-case results. The review screens talk
//! to storage only through [`LocalRunCatalog`] / [`RunCatalog`].
//!
//! Depends on [`evalview_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Catalog Trait
//! - [`LocalRunCatalog`], [`RunCatalog`] - Async catalog interface (local and `Send` variants)
//! - [`ResultFields`] - Lightweight or full listing
//!
//! ### Implementations
//! - [`FsCatalog`] - Reads `results/<timestamp>/results.json`
//! - [`MemoryCatalog`] - In-memory catalog recording calls (`test-helpers` feature)
//!
//! ### Helpers
//! - [`format_timestamp()`] - Human-readable run timestamps

pub mod catalog;
pub mod fs;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod timestamp;

pub use catalog::{
    resolve_entry, strip_heavy_fields, LocalRunCatalog, ResultFields, RunCatalog, HEAVY_FIELDS,
};
pub use fs::FsCatalog;
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::{CallLog, MemoryCatalog};
pub use timestamp::{format_timestamp, parse_timestamp};
