//! The run catalog trait and listing helpers shared by implementations

use evalview_core::prelude::*;
use evalview_core::{entry_id, CaseKey, ResultListing, Run, RunDetail};
use serde_json::Value;

/// Fields dropped from every entry of a lightweight listing
pub const HEAVY_FIELDS: [&str; 5] = [
    "trueJson",
    "predictedJson",
    "fullJsonDiff",
    "trueMarkdown",
    "predictedMarkdown",
];

/// How much of each result entry a listing carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFields {
    /// Everything except [`HEAVY_FIELDS`]; enough to filter and label cases
    Lightweight,
    /// Complete entries
    Full,
}

/// Read access to stored evaluation runs
///
/// The TUI only ever requests lightweight listings to populate selectors,
/// and fetches one full record per selected case.
#[trait_variant::make(RunCatalog: Send)]
pub trait LocalRunCatalog {
    /// All known runs, newest first. May be empty.
    async fn list_runs(&self) -> Result<Vec<Run>>;

    /// Every stored entry of a run, nulls and malformed entries included
    async fn list_results(&self, run_timestamp: &str, fields: ResultFields)
        -> Result<ResultListing>;

    /// One complete record plus its run's metadata
    async fn fetch_result(&self, run_timestamp: &str, key: &CaseKey) -> Result<RunDetail>;

    /// Human-readable form of a run timestamp
    fn format_timestamp(&self, timestamp: &str) -> String;
}

/// Remove [`HEAVY_FIELDS`] from object entries, leaving others untouched
pub fn strip_heavy_fields(listing: &mut ResultListing) {
    for entry in listing.results.iter_mut() {
        if let Value::Object(obj) = entry {
            for field in HEAVY_FIELDS {
                obj.remove(field);
            }
        }
    }
}

/// Find the entry a key addresses
///
/// The entry at `key.position` wins when its id matches. Otherwise the
/// first entry carrying the id is used, which tolerates a listing that was
/// rewritten between the lightweight and full reads.
pub fn resolve_entry<'a>(listing: &'a ResultListing, key: &CaseKey) -> Option<&'a Value> {
    let at_position = listing
        .results
        .get(key.position)
        .filter(|entry| entry.is_object() && entry_id(entry) == key.id);

    at_position.or_else(|| {
        trace!(
            "case {} not at position {}, searching by id",
            key.id,
            key.position
        );
        listing
            .results
            .iter()
            .find(|entry| entry.is_object() && entry_id(entry) == key.id)
    })
}
