//! Domain types for evaluation runs and test case results

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One execution of the evaluation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Sortable, unique identifier (e.g. `2024-12-03T14-05-22-123Z`)
    pub timestamp: String,
    pub status: String,
    #[serde(default)]
    pub run_by: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Counts over a JSON diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffStats {
    pub additions: u64,
    pub deletions: u64,
    pub modifications: u64,
    pub total: u64,
}

impl DiffStats {
    /// Read stats from a raw `jsonDiffStats` value
    ///
    /// Missing or non-numeric counters read as 0. Returns `None` when the
    /// value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let count = |key: &str| obj.get(key).map(count_from_value).unwrap_or(0);
        Some(Self {
            additions: count("additions"),
            deletions: count("deletions"),
            modifications: count("modifications"),
            total: count("total"),
        })
    }

    pub fn has_differences(&self) -> bool {
        self.total > 0
    }
}

fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Accuracy summary attached to a test case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccuracyResult {
    pub total_fields: u64,
}

/// Full record for one test case in one run
///
/// Unknown keys are ignored and every field is optional so that partially
/// written results still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestCaseResult {
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ocr_model: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub extraction_model: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub direct_image_extraction: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub file_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub error: Option<String>,
    #[serde(deserialize_with = "stats_or_none")]
    pub json_diff_stats: Option<DiffStats>,
    pub json_diff: Option<Value>,
    pub full_json_diff: Option<Value>,
    pub true_json: Option<Value>,
    pub predicted_json: Option<Value>,
    pub json_schema: Option<Value>,
    #[serde(deserialize_with = "accuracy_or_none")]
    pub json_accuracy_result: Option<AccuracyResult>,
    #[serde(deserialize_with = "lenient_f64")]
    pub json_accuracy: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub true_markdown: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub predicted_markdown: Option<String>,
}

impl TestCaseResult {
    /// Parse a raw listing entry into a typed record
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The recorded error, if present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Whether either the condensed or the full diff is attached
    pub fn has_any_diff(&self) -> bool {
        self.json_diff.is_some() || self.full_json_diff.is_some()
    }

    /// Both markdown texts, only when both are present
    pub fn markdown_pair(&self) -> Option<(&str, &str)> {
        match (&self.true_markdown, &self.predicted_markdown) {
            (Some(t), Some(p)) => Some((t.as_str(), p.as_str())),
            _ => None,
        }
    }

    pub fn total_fields(&self) -> u64 {
        self.json_accuracy_result
            .map(|r| r.total_fields)
            .unwrap_or(0)
    }

    pub fn accuracy(&self) -> f64 {
        self.json_accuracy.unwrap_or(0.0)
    }

    /// Schema for display, `{}` when absent
    pub fn schema_or_empty(&self) -> Value {
        self.json_schema
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }

    pub fn file_reference(&self) -> Option<&str> {
        self.file_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Result listing for one run, one raw value per stored entry
///
/// Entries keep their stored position; nulls and malformed entries are
/// preserved so positions stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultListing {
    pub results: Vec<Value>,
}

/// Addresses one entry of a run listing
///
/// `position` is the entry's index in the unfiltered listing, so two entries
/// sharing an id are still told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey {
    pub id: String,
    pub position: usize,
}

impl CaseKey {
    pub fn new(id: impl Into<String>, position: usize) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// A full test case record paired with its run's metadata
#[derive(Debug, Clone, PartialEq)]
pub struct RunDetail {
    pub result: TestCaseResult,
    pub status: String,
    pub run_by: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub completed_at: Option<String>,
}

impl RunDetail {
    pub fn from_run(run: &Run, result: TestCaseResult) -> Self {
        Self {
            result,
            status: run.status.clone(),
            run_by: run.run_by.clone(),
            description: run.description.clone(),
            created_at: run.created_at.clone(),
            completed_at: run.completed_at.clone(),
        }
    }

    /// Whether the run details panel is offered
    pub fn has_run_details(&self) -> bool {
        non_empty(&self.description) || non_empty(&self.run_by)
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

// ─────────────────────────────────────────────────────────────────
// Lenient field readers
// ─────────────────────────────────────────────────────────────────

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn lenient_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn stats_or_none<'de, D>(deserializer: D) -> Result<Option<DiffStats>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(DiffStats::from_value(&Value::deserialize(deserializer)?))
}

fn accuracy_or_none<'de, D>(deserializer: D) -> Result<Option<AccuracyResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_object().map(|obj| AccuracyResult {
        total_fields: obj.get("totalFields").map(count_from_value).unwrap_or(0),
    }))
}
