//! In-memory run catalog for tests
//!
//! Records every call so tests can assert how often the catalog was hit
//! and with which [`ResultFields`] mode.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use evalview_core::prelude::*;
use evalview_core::{CaseKey, ResultListing, Run, RunDetail, TestCaseResult};
use serde_json::Value;

use crate::catalog::{resolve_entry, strip_heavy_fields, ResultFields, RunCatalog};
use crate::timestamp::format_timestamp;

/// Calls received by a [`MemoryCatalog`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallLog {
    pub list_runs: usize,
    pub lightweight_listings: usize,
    pub full_listings: usize,
    pub fetches: Vec<(String, CaseKey)>,
}

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    runs: Vec<Run>,
    listings: HashMap<String, Vec<Value>>,
    failure: Option<String>,
    calls: Mutex<CallLog>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a run with its raw result entries. Runs keep insertion order.
    pub fn with_run(mut self, run: Run, results: Vec<Value>) -> Self {
        self.listings.insert(run.timestamp.clone(), results);
        self.runs.push(run);
        self
    }

    /// Make every call fail with a catalog error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn calls(&self) -> CallLog {
        self.log().clone()
    }

    fn log(&self) -> MutexGuard<'_, CallLog> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::catalog(message.clone())),
            None => Ok(()),
        }
    }

    fn listing(&self, run_timestamp: &str) -> Result<ResultListing> {
        self.listings
            .get(run_timestamp)
            .map(|results| ResultListing {
                results: results.clone(),
            })
            .ok_or_else(|| Error::run_not_found(run_timestamp))
    }
}

impl RunCatalog for MemoryCatalog {
    async fn list_runs(&self) -> Result<Vec<Run>> {
        self.log().list_runs += 1;
        self.check_failure()?;
        Ok(self.runs.clone())
    }

    async fn list_results(
        &self,
        run_timestamp: &str,
        fields: ResultFields,
    ) -> Result<ResultListing> {
        match fields {
            ResultFields::Lightweight => self.log().lightweight_listings += 1,
            ResultFields::Full => self.log().full_listings += 1,
        }
        self.check_failure()?;

        let mut listing = self.listing(run_timestamp)?;
        if fields == ResultFields::Lightweight {
            strip_heavy_fields(&mut listing);
        }
        Ok(listing)
    }

    async fn fetch_result(&self, run_timestamp: &str, key: &CaseKey) -> Result<RunDetail> {
        self.log()
            .fetches
            .push((run_timestamp.to_string(), key.clone()));
        self.check_failure()?;

        let run = self
            .runs
            .iter()
            .find(|r| r.timestamp == run_timestamp)
            .ok_or_else(|| Error::run_not_found(run_timestamp))?;
        let listing = self.listing(run_timestamp)?;
        let entry = resolve_entry(&listing, key)
            .cloned()
            .ok_or_else(|| Error::case_not_found(run_timestamp, &key.id))?;
        Ok(RunDetail::from_run(run, TestCaseResult::from_value(entry)?))
    }

    fn format_timestamp(&self, timestamp: &str) -> String {
        format_timestamp(timestamp)
    }
}
