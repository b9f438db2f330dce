//! End-to-end review flow against the filesystem catalog
//!
//! Drives the app layer through `process_message` with an `FsCatalog` over
//! the fixture results directory, the same way the TUI runner does.

use std::path::{Path, PathBuf};

use evalview::app::config::JsonPane;
use evalview::app::message::Message;
use evalview::app::state::{AppState, Notice};
use evalview::app::{process_message, PreviewContent};
use evalview::catalog::{FsCatalog, ResultFields, RunCatalog};
use evalview::core::Error;
use evalview::{init_config, load_settings, resolve_results_dir, LaunchOptions};
use tempfile::TempDir;
use tokio_test::block_on;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/results")
}

fn started(catalog: &FsCatalog) -> AppState {
    let mut state = AppState::new();
    block_on(process_message(&mut state, Message::Start, catalog));
    state
}

#[test]
fn test_startup_selects_newest_run_and_first_case() {
    let catalog = FsCatalog::new(fixtures());
    let state = started(&catalog);

    // "notes/" has no results.json and is not a run
    assert_eq!(state.runs.len(), 2);
    assert_eq!(state.runs[0].label, "2024-12-03 14:05:22");
    assert_eq!(state.runs[1].label, "2024-11-20 09:30:00");
    assert_eq!(state.selected_run, Some(0));

    // null, zero-total and non-object entries are dropped
    let labels: Vec<&str> = state.cases.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "invoice-002 - OCR: gpt-4o - Extraction: claude-3-5-sonnet",
            "invoice-002 - OCR: tesseract - Extraction: claude-3-5-sonnet",
            "receipt-007 - OCR: gpt-4o - Extraction: N/A",
        ]
    );

    let detail = state.detail.as_ref().expect("first case fetched");
    assert_eq!(detail.result.id, "invoice-002");
    assert!(detail.result.direct_image_extraction);
    assert_eq!(detail.description.as_deref(), Some("Nightly invoice regression"));
    assert_eq!(detail.run_by.as_deref(), Some("ana"));
    assert!(matches!(state.preview, Some(PreviewContent::Remote { .. })));
    assert!(state.notice.is_none());
}

#[test]
fn test_duplicate_ids_resolve_by_position() {
    let catalog = FsCatalog::new(fixtures());
    let mut state = started(&catalog);

    block_on(process_message(&mut state, Message::SelectCase(1), &catalog));

    let detail = state.detail.as_ref().expect("second case fetched");
    assert_eq!(detail.result.id, "invoice-002");
    assert_eq!(detail.result.ocr_model.as_deref(), Some("tesseract"));
    assert!(detail.result.markdown_pair().is_none());
}

#[test]
fn test_error_case_carries_error_only() {
    let catalog = FsCatalog::new(fixtures());
    let mut state = started(&catalog);

    block_on(process_message(&mut state, Message::SelectCase(2), &catalog));

    let detail = state.detail.as_ref().expect("error case fetched");
    assert_eq!(detail.result.error_message(), Some("Parsing failed"));
    assert!(!detail.result.has_any_diff());
    assert_eq!(state.preview, Some(PreviewContent::Unavailable));
}

#[test]
fn test_lightweight_listing_omits_payloads() {
    let catalog = FsCatalog::new(fixtures());
    let listing = block_on(
        catalog.list_results("2024-12-03T14-05-22-123Z", ResultFields::Lightweight),
    )
    .expect("listing");

    assert_eq!(listing.results.len(), 6);
    assert!(listing.results[0].is_null());
    let entry = &listing.results[2];
    assert!(entry.get("jsonDiffStats").is_some());
    assert!(entry.get("trueJson").is_none());
    assert!(entry.get("predictedMarkdown").is_none());
}

#[test]
fn test_full_diff_and_panes_from_fetched_record() {
    let catalog = FsCatalog::new(fixtures());
    let mut state = started(&catalog);
    assert!(state.full_diff().is_none());

    block_on(process_message(&mut state, Message::ToggleFullDiff, &catalog));
    let diff = state.full_diff().expect("computed on expand");
    assert!(!diff.is_identical());

    for pane in JsonPane::ALL {
        block_on(process_message(&mut state, Message::SelectJsonPane(pane), &catalog));
        assert_eq!(state.view.json_pane, pane);
    }
}

#[test]
fn test_switching_runs_reloads_cases() {
    let catalog = FsCatalog::new(fixtures());
    let mut state = started(&catalog);

    block_on(process_message(&mut state, Message::SelectRun(1), &catalog));

    assert_eq!(state.cases.len(), 1);
    let detail = state.detail.as_ref().expect("case in older run");
    assert_eq!(detail.result.ocr_model.as_deref(), Some("mistral-ocr"));
    // no run.json: defaults apply
    assert_eq!(detail.status, "completed");
    assert!(!detail.has_run_details());
}

#[test]
fn test_malformed_results_show_error_notice() {
    let dir = TempDir::new().expect("tempdir");
    let run = dir.path().join("2024-12-05T08-00-00-000Z");
    std::fs::create_dir_all(&run).expect("run dir");
    std::fs::write(run.join("results.json"), "{ not json").expect("write");

    let catalog = FsCatalog::new(dir.path());
    let state = started(&catalog);

    assert_eq!(state.runs.len(), 1);
    assert!(matches!(state.notice, Some(Notice::Error(_))));
    assert!(!state.should_quit());
}

#[test]
fn test_missing_default_results_dir_is_empty_catalog() {
    let dir = TempDir::new().expect("tempdir");
    let options = LaunchOptions {
        base_path: dir.path().to_path_buf(),
        ..LaunchOptions::default()
    };
    let settings = load_settings(&options);
    let results_dir = resolve_results_dir(&options, &settings).expect("default dir");
    assert_eq!(results_dir, dir.path().join("results"));

    let state = started(&FsCatalog::new(results_dir));
    assert_eq!(state.notice, Some(Notice::NoRuns));
}

#[test]
fn test_missing_explicit_results_dir_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let options = LaunchOptions {
        base_path: dir.path().to_path_buf(),
        results_dir: Some(PathBuf::from("nope")),
        config_path: None,
    };
    let err = resolve_results_dir(&options, &load_settings(&options)).unwrap_err();

    assert!(matches!(err, Error::ResultsDirNotFound { .. }));
}

#[test]
fn test_init_config_then_load() {
    let dir = TempDir::new().expect("tempdir");
    init_config(dir.path()).expect("init");
    assert!(dir.path().join(".evalview/config.toml").is_file());

    let options = LaunchOptions {
        base_path: dir.path().to_path_buf(),
        ..LaunchOptions::default()
    };
    let settings = load_settings(&options);
    assert_eq!(settings.catalog.results_dir, "results");
    assert_eq!(settings.ui.preview_width, 40);
}

#[test]
fn test_explicit_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("review.toml");
    std::fs::write(
        &config,
        "[catalog]\nresults_dir = \"runs\"\n\n[ui]\npreview_width = 24\n",
    )
    .expect("write config");

    let options = LaunchOptions {
        base_path: dir.path().to_path_buf(),
        results_dir: None,
        config_path: Some(config),
    };
    let settings = load_settings(&options);
    assert_eq!(settings.ui.preview_width, 24);
    assert_eq!(
        resolve_results_dir(&options, &settings).expect("configured dir"),
        dir.path().join("runs")
    );
}
