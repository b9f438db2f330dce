//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use evalview_core::truncate_url;

use crate::config::JsonPane;
use crate::message::Message;
use crate::preview::{classify, PreviewSource};
use crate::state::{AppPhase, AppState, FocusedPanel};

use super::{keys::handle_key, scroll, selection, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Start => selection::handle_start(state),

        // ─────────────────────────────────────────────────────────
        // Catalog Responses
        // ─────────────────────────────────────────────────────────
        Message::RunsLoaded { runs } => selection::handle_runs_loaded(state, runs),
        Message::RunsLoadFailed { error } => selection::handle_runs_load_failed(state, error),
        Message::ResultsLoaded {
            run_timestamp,
            listing,
        } => selection::handle_results_loaded(state, run_timestamp, listing),
        Message::ResultsLoadFailed {
            run_timestamp,
            error,
        } => selection::handle_results_load_failed(state, run_timestamp, error),
        Message::DetailLoaded {
            run_timestamp,
            key,
            detail,
            preview,
        } => selection::handle_detail_loaded(state, run_timestamp, key, *detail, preview),
        Message::DetailLoadFailed {
            run_timestamp,
            key,
            error,
        } => selection::handle_detail_load_failed(state, run_timestamp, key, error),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectRun(idx) => selection::handle_select_run(state, idx),
        Message::SelectCase(idx) => selection::handle_select_case(state, idx),
        Message::OpenRunPicker => selection::handle_open_run_picker(state),
        Message::OpenCasePicker => selection::handle_open_case_picker(state),
        Message::PickerUp => selection::handle_picker_up(state),
        Message::PickerDown => selection::handle_picker_down(state),
        Message::PickerConfirm => selection::handle_picker_confirm(state),
        Message::PickerCancel => selection::handle_picker_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Review Panels
        // ─────────────────────────────────────────────────────────
        Message::SelectJsonPane(pane) => select_json_pane(state, pane),
        Message::NextJsonPane => {
            let pane = state.view.json_pane.next();
            select_json_pane(state, pane)
        }
        Message::PrevJsonPane => {
            let pane = state.view.json_pane.prev();
            select_json_pane(state, pane)
        }

        Message::ToggleMarkdownView => {
            if state.has_markdown() {
                state.view.markdown_view = state.view.markdown_view.toggle();
                state.view.markdown_scroll.reset();
            }
            UpdateResult::none()
        }

        Message::ToggleFullDiff => {
            if !state.has_markdown() {
                return UpdateResult::none();
            }
            state.view.full_diff_expanded = !state.view.full_diff_expanded;
            if state.view.full_diff_expanded {
                state.ensure_full_diff();
                state.view.focus = FocusedPanel::FullDiff;
            } else {
                scroll::refocus(state);
            }
            UpdateResult::none()
        }

        Message::ToggleRunDetails => {
            if state.detail.as_ref().is_some_and(|d| d.has_run_details()) {
                state.view.run_details_expanded = !state.view.run_details_expanded;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => scroll::handle_cycle_focus(state, true),
        Message::FocusPrev => scroll::handle_cycle_focus(state, false),
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Browser
        // ─────────────────────────────────────────────────────────
        Message::OpenFileUrl => handle_open_file_url(state),
        Message::UrlOpenFailed { error } => {
            warn!("Failed to open file URL: {}", error);
            state.status_line = Some(format!("Could not open file: {}", error));
            UpdateResult::none()
        }
    }
}

/// Switch the JSON diff pane. Panes read the already fetched record only.
fn select_json_pane(state: &mut AppState, pane: JsonPane) -> UpdateResult {
    if state.view.json_pane != pane {
        state.view.json_pane = pane;
        state.view.json_scroll.reset();
    }
    UpdateResult::none()
}

fn handle_open_file_url(state: &mut AppState) -> UpdateResult {
    let Some(reference) = state
        .detail
        .as_ref()
        .and_then(|d| d.result.file_reference())
    else {
        return UpdateResult::none();
    };

    let url = match classify(reference) {
        PreviewSource::DataUrl => {
            debug!("Inline data URL has nothing to open externally");
            return UpdateResult::none();
        }
        PreviewSource::Remote => truncate_url(reference).target,
        PreviewSource::LocalFile(path) => path.display().to_string(),
    };

    UpdateResult::action(UpdateAction::OpenUrl {
        url,
        browser: state.settings.behavior.browser.clone(),
    })
}
