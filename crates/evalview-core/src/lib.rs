//! # evalview-core - Core Domain Types
//!
//! Foundation crate for evalview. Contains the data model for evaluation
//! runs and test case results, error handling, logging setup, and the pure
//! helpers the review screens are built from.
//!
//! This crate has **zero internal dependencies** - it only depends on external crates.
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Run`], [`RunDetail`] - Run metadata and a case fetched within a run
//! - [`TestCaseResult`], [`DiffStats`], [`AccuracyResult`] - Per-case record
//! - [`ResultListing`], [`CaseKey`] - Listing entries and how they are addressed
//!
//! ### Review Helpers
//! - [`reviewable_cases()`], [`CaseSummary`] - Filter to cases with differences
//! - [`normalize_markdown()`] - Prepare stored markdown for rendering
//! - [`SideBySideDiff`] - Two-column line diff with intraline segments
//! - [`truncate_url()`] - Shorten long links for display
//!
//! ### Error Handling
//! - [`Error`] - Application error enum
//! - [`Result<T>`] - Alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for error context

pub mod display;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod prelude;
pub mod selection;
pub mod text_diff;
pub mod types;

pub use display::{title_case, truncate_url, yes_no, DisplayUrl, URL_TRUNCATE_THRESHOLD};
pub use error::{Error, Result, ResultExt};
pub use markdown::normalize_markdown;
pub use selection::{case_label, entry_id, reviewable_cases, CaseSummary};
pub use text_diff::{DiffLine, DiffRow, RowKind, Segment, SideBySideDiff};
pub use types::{AccuracyResult, CaseKey, DiffStats, ResultListing, Run, RunDetail, TestCaseResult};
