//! Filesystem-backed run catalog
//!
//! Layout produced by the evaluation pipeline:
//!
//! ```text
//! results/
//!   2024-12-03T14-05-22-123Z/
//!     results.json   # array of results, or {"results": [...]}
//!     run.json       # optional run metadata
//! ```

use std::path::{Path, PathBuf};

use evalview_core::prelude::*;
use evalview_core::{CaseKey, ResultListing, Run, RunDetail, TestCaseResult};
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{resolve_entry, strip_heavy_fields, ResultFields, RunCatalog};
use crate::timestamp::format_timestamp;

pub const RESULTS_FILE: &str = "results.json";
pub const RUN_META_FILE: &str = "run.json";
const DEFAULT_STATUS: &str = "completed";

/// Optional `run.json` contents
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunMeta {
    status: Option<String>,
    run_by: Option<String>,
    description: Option<String>,
    created_at: Option<String>,
    completed_at: Option<String>,
}

/// Run catalog reading the pipeline's `results/` directory
#[derive(Debug, Clone)]
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of a run, rejecting timestamps that would escape the root
    fn run_dir(&self, timestamp: &str) -> Result<PathBuf> {
        let is_plain_name = !timestamp.is_empty()
            && timestamp != "."
            && timestamp != ".."
            && !timestamp.contains(['/', '\\']);
        if !is_plain_name {
            return Err(Error::run_not_found(timestamp));
        }

        let dir = self.root.join(timestamp);
        if !dir.join(RESULTS_FILE).is_file() {
            return Err(Error::run_not_found(timestamp));
        }
        Ok(dir)
    }

    async fn read_run(&self, dir: &Path, timestamp: &str) -> Run {
        let meta = read_run_meta(&dir.join(RUN_META_FILE)).await;
        Run {
            timestamp: timestamp.to_string(),
            status: meta.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            run_by: meta.run_by,
            description: meta.description,
            created_at: meta
                .created_at
                .unwrap_or_else(|| format_timestamp(timestamp)),
            completed_at: meta.completed_at,
        }
    }

    async fn read_listing(&self, dir: &Path) -> Result<ResultListing> {
        let path = dir.join(RESULTS_FILE);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_listing(&path, &contents)
    }
}

async fn read_run_meta(path: &Path) -> RunMeta {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return RunMeta::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return RunMeta::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        warn!("Ignoring malformed {}: {}", path.display(), e);
        RunMeta::default()
    })
}

/// Parse `results.json` as a bare array or an object wrapping `results`
fn parse_listing(path: &Path, contents: &str) -> Result<ResultListing> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| Error::malformed_results(path, e.to_string()))?;

    match value {
        Value::Array(results) => Ok(ResultListing { results }),
        Value::Object(mut obj) => match obj.remove("results") {
            Some(Value::Array(results)) => Ok(ResultListing { results }),
            _ => Err(Error::malformed_results(
                path,
                "expected a \"results\" array",
            )),
        },
        _ => Err(Error::malformed_results(
            path,
            "expected an array of results",
        )),
    }
}

impl RunCatalog for FsCatalog {
    async fn list_runs(&self) -> Result<Vec<Run>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Results directory {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut runs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let dir = entry.path();
            if !dir.join(RESULTS_FILE).is_file() {
                continue;
            }
            let Some(timestamp) = entry.file_name().to_str().map(str::to_string) else {
                debug!("Skipping non UTF-8 run directory {}", dir.display());
                continue;
            };
            runs.push(self.read_run(&dir, &timestamp).await);
        }

        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        info!("Found {} runs in {}", runs.len(), self.root.display());
        Ok(runs)
    }

    async fn list_results(
        &self,
        run_timestamp: &str,
        fields: ResultFields,
    ) -> Result<ResultListing> {
        let dir = self.run_dir(run_timestamp)?;
        let mut listing = self.read_listing(&dir).await?;
        if fields == ResultFields::Lightweight {
            strip_heavy_fields(&mut listing);
        }
        debug!(
            "Listed {} entries for run {} ({:?})",
            listing.results.len(),
            run_timestamp,
            fields
        );
        Ok(listing)
    }

    async fn fetch_result(&self, run_timestamp: &str, key: &CaseKey) -> Result<RunDetail> {
        let dir = self.run_dir(run_timestamp)?;
        let listing = self.read_listing(&dir).await?;
        let entry = resolve_entry(&listing, key)
            .cloned()
            .ok_or_else(|| Error::case_not_found(run_timestamp, &key.id))?;
        let result = TestCaseResult::from_value(entry)?;
        let run = self.read_run(&dir, run_timestamp).await;
        Ok(RunDetail::from_run(&run, result))
    }

    fn format_timestamp(&self, timestamp: &str) -> String {
        format_timestamp(timestamp)
    }
}
