//! Reviewable case filtering and selector labels

use serde_json::Value;

use crate::types::{CaseKey, DiffStats, ResultListing};

/// A reviewable entry from a lightweight listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSummary {
    pub key: CaseKey,
    pub label: String,
}

/// Keep only entries with a non-trivial JSON diff
///
/// An entry survives when it is an object whose `jsonDiffStats` is an
/// object with `total > 0`. Everything else (nulls, scalars, missing or
/// malformed stats, zero totals) is dropped silently. Order and original
/// positions are preserved.
pub fn reviewable_cases(listing: &ResultListing) -> Vec<CaseSummary> {
    listing
        .results
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| summarize(position, entry))
        .collect()
}

fn summarize(position: usize, entry: &Value) -> Option<CaseSummary> {
    let obj = entry.as_object()?;
    let stats = DiffStats::from_value(obj.get("jsonDiffStats")?)?;
    if !stats.has_differences() {
        return None;
    }

    let id = entry_id(entry);
    let ocr_model = obj.get("ocrModel").and_then(display_value);
    let extraction_model = obj.get("extractionModel").and_then(display_value);
    let label = case_label(&id, ocr_model.as_deref(), extraction_model.as_deref());

    Some(CaseSummary {
        key: CaseKey::new(id, position),
        label,
    })
}

/// The id of a listing entry as displayed, empty when absent
pub fn entry_id(entry: &Value) -> String {
    entry.get("id").and_then(display_value).unwrap_or_default()
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Selector label for one case
///
/// Missing models read as `N/A`. Labels are not unique.
pub fn case_label(id: &str, ocr_model: Option<&str>, extraction_model: Option<&str>) -> String {
    format!(
        "{} - OCR: {} - Extraction: {}",
        id,
        ocr_model.unwrap_or("N/A"),
        extraction_model.unwrap_or("N/A")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(results: Vec<Value>) -> ResultListing {
        ResultListing { results }
    }

    #[test]
    fn test_only_positive_totals_survive() {
        let cases = reviewable_cases(&listing(vec![
            json!({"id": "a", "jsonDiffStats": {"total": 0}}),
            json!({"id": "b", "jsonDiffStats": {"total": 3}}),
        ]));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].key, CaseKey::new("b", 1));
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let cases = reviewable_cases(&listing(vec![
            Value::Null,
            json!("not an object"),
            json!(17),
            json!({"id": "no-stats"}),
            json!({"id": "bad-stats", "jsonDiffStats": "x"}),
            json!({"id": "list-stats", "jsonDiffStats": [1, 2]}),
            json!({"id": "string-total", "jsonDiffStats": {"total": "5"}}),
            json!({"id": "ok", "jsonDiffStats": {"total": 2}}),
        ]));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].key.id, "ok");
        assert_eq!(cases[0].key.position, 7);
    }

    #[test]
    fn test_empty_listing() {
        assert!(reviewable_cases(&ResultListing::default()).is_empty());
    }

    #[test]
    fn test_label_falls_back_to_na() {
        let cases = reviewable_cases(&listing(vec![json!({
            "id": "doc-9",
            "ocrModel": "tesseract",
            "jsonDiffStats": {"total": 1}
        })]));
        assert_eq!(cases[0].label, "doc-9 - OCR: tesseract - Extraction: N/A");
    }

    #[test]
    fn test_duplicate_labels_keep_distinct_keys() {
        let entry = json!({
            "id": "dup",
            "ocrModel": "m",
            "extractionModel": "e",
            "jsonDiffStats": {"total": 1}
        });
        let cases = reviewable_cases(&listing(vec![entry.clone(), entry]));
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].label, cases[1].label);
        assert_ne!(cases[0].key, cases[1].key);
    }

    #[test]
    fn test_entry_id_accepts_numbers() {
        assert_eq!(entry_id(&json!({"id": 7})), "7");
        assert_eq!(entry_id(&json!({"name": "x"})), "");
        assert_eq!(entry_id(&Value::Null), "");
    }

    #[test]
    fn test_case_label_format() {
        insta::assert_snapshot!(
            case_label("invoice-12", Some("gpt-4o"), Some("claude-3-5")),
            @"invoice-12 - OCR: gpt-4o - Extraction: claude-3-5"
        );
    }
}
