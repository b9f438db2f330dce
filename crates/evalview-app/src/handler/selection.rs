//! Run and test case selection handlers
//!
//! Drives the review flow: catalog → run → lightweight listing → filter →
//! case → full record. Responses that no longer match the selection are
//! dropped.

use evalview_core::{reviewable_cases, CaseKey, ResultListing, RunDetail};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::preview::PreviewContent;
use crate::state::{AppState, Notice, RunEntry, UiMode};

use super::{UpdateAction, UpdateResult};

/// Kick off the session by loading the run catalog
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    state.loading = true;
    state.notice = None;
    UpdateResult::action(UpdateAction::LoadRuns)
}

pub fn handle_runs_loaded(state: &mut AppState, runs: Vec<RunEntry>) -> UpdateResult {
    info!("Loaded {} runs", runs.len());
    state.loading = false;
    state.runs = runs;
    state.selected_run = None;
    state.clear_cases();

    if state.runs.is_empty() {
        state.notice = Some(Notice::NoRuns);
        return UpdateResult::none();
    }

    state.notice = None;
    UpdateResult::message(Message::SelectRun(0))
}

pub fn handle_runs_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Run catalog failed: {}", error);
    state.loading = false;
    state.notice = Some(Notice::Error(format!("Failed to load runs: {}", error)));
    UpdateResult::none()
}

/// Select a run and request its lightweight listing
pub fn handle_select_run(state: &mut AppState, idx: usize) -> UpdateResult {
    let Some(entry) = state.runs.get(idx) else {
        return UpdateResult::none();
    };
    let run_timestamp = entry.run.timestamp.clone();

    let already_loaded = !state.cases.is_empty() || state.notice == Some(Notice::NoReviewableCases);
    if state.selected_run == Some(idx) && (already_loaded || state.loading) {
        return UpdateResult::none();
    }

    debug!("Selecting run {}", run_timestamp);
    state.selected_run = Some(idx);
    state.clear_cases();
    state.notice = None;
    state.status_line = None;
    state.loading = true;
    UpdateResult::action(UpdateAction::LoadResults { run_timestamp })
}

pub fn handle_results_loaded(
    state: &mut AppState,
    run_timestamp: String,
    listing: ResultListing,
) -> UpdateResult {
    if state.current_run_timestamp() != Some(run_timestamp.as_str()) {
        debug!("Discarding stale listing for run {}", run_timestamp);
        return UpdateResult::none();
    }

    state.loading = false;
    state.cases = reviewable_cases(&listing);
    info!(
        "Run {}: {} of {} entries have differences",
        run_timestamp,
        state.cases.len(),
        listing.results.len()
    );

    if state.cases.is_empty() {
        state.notice = Some(Notice::NoReviewableCases);
        return UpdateResult::none();
    }

    UpdateResult::message(Message::SelectCase(0))
}

pub fn handle_results_load_failed(
    state: &mut AppState,
    run_timestamp: String,
    error: String,
) -> UpdateResult {
    if state.current_run_timestamp() != Some(run_timestamp.as_str()) {
        return UpdateResult::none();
    }
    warn!("Listing for run {} failed: {}", run_timestamp, error);
    state.loading = false;
    state.notice = Some(Notice::Error(format!(
        "Failed to load results for this run: {}",
        error
    )));
    UpdateResult::none()
}

/// Select a case and request its full record, once per selection change
pub fn handle_select_case(state: &mut AppState, idx: usize) -> UpdateResult {
    let Some(run_timestamp) = state.current_run_timestamp().map(str::to_string) else {
        return UpdateResult::none();
    };
    let Some(case) = state.cases.get(idx) else {
        return UpdateResult::none();
    };
    let key = case.key.clone();

    if state.selected_case == Some(idx) && (state.detail.is_some() || state.loading) {
        return UpdateResult::none();
    }

    debug!("Selecting case {} (position {})", key.id, key.position);
    state.selected_case = Some(idx);
    state.clear_detail();
    state.notice = None;
    state.status_line = None;
    state.loading = true;
    UpdateResult::action(UpdateAction::FetchDetail {
        run_timestamp,
        key,
        preview_width: state.settings.ui.preview_width,
    })
}

pub fn handle_detail_loaded(
    state: &mut AppState,
    run_timestamp: String,
    key: CaseKey,
    detail: RunDetail,
    preview: PreviewContent,
) -> UpdateResult {
    if !state.is_current_selection(&run_timestamp, &key) {
        debug!(
            "Discarding stale detail for {} in run {}",
            key.id, run_timestamp
        );
        return UpdateResult::none();
    }

    state.loading = false;
    state.set_detail(detail, preview);
    UpdateResult::none()
}

pub fn handle_detail_load_failed(
    state: &mut AppState,
    run_timestamp: String,
    key: CaseKey,
    error: String,
) -> UpdateResult {
    if !state.is_current_selection(&run_timestamp, &key) {
        return UpdateResult::none();
    }
    warn!("Fetching case {} failed: {}", key.id, error);
    state.loading = false;
    state.notice = Some(Notice::Error(format!(
        "Failed to load test case {}: {}",
        key.id, error
    )));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Pickers
// ─────────────────────────────────────────────────────────

pub fn handle_open_run_picker(state: &mut AppState) -> UpdateResult {
    if !state.runs.is_empty() {
        state.picker_cursor = state.selected_run.unwrap_or(0);
        state.ui_mode = UiMode::RunPicker;
    }
    UpdateResult::none()
}

pub fn handle_open_case_picker(state: &mut AppState) -> UpdateResult {
    if !state.cases.is_empty() {
        state.picker_cursor = state.selected_case.unwrap_or(0);
        state.ui_mode = UiMode::CasePicker;
    }
    UpdateResult::none()
}

pub fn handle_picker_up(state: &mut AppState) -> UpdateResult {
    state.picker_cursor = state.picker_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_picker_down(state: &mut AppState) -> UpdateResult {
    let last = state.picker_len().saturating_sub(1);
    state.picker_cursor = (state.picker_cursor + 1).min(last);
    UpdateResult::none()
}

pub fn handle_picker_confirm(state: &mut AppState) -> UpdateResult {
    let mode = state.ui_mode;
    state.ui_mode = UiMode::Review;
    match mode {
        UiMode::RunPicker => UpdateResult::message(Message::SelectRun(state.picker_cursor)),
        UiMode::CasePicker => UpdateResult::message(Message::SelectCase(state.picker_cursor)),
        UiMode::Review => UpdateResult::none(),
    }
}

pub fn handle_picker_cancel(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Review;
    UpdateResult::none()
}
