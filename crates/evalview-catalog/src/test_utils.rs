//! Test utilities for catalog types
//!
//! Builders for runs and raw result entries shaped like the pipeline's
//! `results.json` output.

use evalview_core::Run;
use serde_json::{json, Value};

/// A completed run with no description or creator
pub fn test_run(timestamp: &str) -> Run {
    Run {
        timestamp: timestamp.to_string(),
        status: "completed".to_string(),
        run_by: None,
        description: None,
        created_at: timestamp.to_string(),
        completed_at: None,
    }
}

/// A complete result entry whose diff has `total` changes
///
/// All payload fields are present, so the entry is suitable for both
/// lightweight listings and full fetches.
pub fn test_entry(id: &str, total: u64) -> Value {
    json!({
        "id": id,
        "ocrModel": "gpt-4o",
        "extractionModel": "claude-3-5-sonnet",
        "directImageExtraction": false,
        "fileUrl": format!("https://files.example.com/{id}.png"),
        "jsonDiffStats": {
            "additions": 0,
            "deletions": 0,
            "modifications": total,
            "total": total
        },
        "jsonDiff": {"total": {"true": 100, "predicted": 180}},
        "fullJsonDiff": {"total": {"true": 100, "predicted": 180}, "vendor": null},
        "trueJson": {"total": 100, "vendor": "ACME"},
        "predictedJson": {"total": 180, "vendor": "ACME"},
        "jsonSchema": {"type": "object"},
        "jsonAccuracyResult": {"totalFields": 2},
        "jsonAccuracy": 0.5,
        "trueMarkdown": "# Invoice\\n\\nTotal: 100",
        "predictedMarkdown": "# Invoice\\n\\nTotal: 180"
    })
}

/// A result entry that recorded a pipeline error instead of a diff
pub fn test_error_entry(id: &str, error: &str) -> Value {
    json!({
        "id": id,
        "ocrModel": "gpt-4o",
        "extractionModel": "claude-3-5-sonnet",
        "error": error,
        "jsonDiffStats": {"additions": 0, "deletions": 0, "modifications": 1, "total": 1}
    })
}
