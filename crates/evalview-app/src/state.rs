//! Application state (Model in TEA pattern)

use evalview_core::{CaseKey, CaseSummary, Run, RunDetail, SideBySideDiff};

use crate::config::{JsonPane, MarkdownView, Settings};
use crate::preview::PreviewContent;
use crate::scroll_state::ScrollState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Review screen with all panels
    #[default]
    Review,
    /// Run selector popup
    RunPicker,
    /// Test case selector popup
    CasePicker,
}

/// Terminal notice for the current screen
///
/// None of these end the session; the run selector stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The catalog has no runs
    NoRuns,
    /// The selected run has no case with a non-trivial diff
    NoReviewableCases,
    /// A catalog call failed
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::NoRuns => "No results found.",
            Notice::NoReviewableCases => "No test cases have JSON differences for this run.",
            Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// A run with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub run: Run,
    /// Formatted timestamp shown in the run selector
    pub label: String,
}

/// Panel receiving scroll input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    JsonDiff,
    Markdown,
    FullDiff,
}

/// Per-case view state, reset when a new case is opened
#[derive(Debug, Clone, Default)]
pub struct ReviewView {
    pub json_pane: JsonPane,
    pub markdown_view: MarkdownView,
    pub full_diff_expanded: bool,
    pub run_details_expanded: bool,
    pub focus: FocusedPanel,
    pub json_scroll: ScrollState,
    pub markdown_scroll: ScrollState,
    pub full_diff_scroll: ScrollState,
}

impl ReviewView {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            json_pane: settings.ui.default_json_pane,
            markdown_view: settings.ui.default_markdown_view,
            run_details_expanded: settings.ui.show_run_details,
            ..Self::default()
        }
    }

    pub fn scroll_mut(&mut self, panel: FocusedPanel) -> &mut ScrollState {
        match panel {
            FocusedPanel::JsonDiff => &mut self.json_scroll,
            FocusedPanel::Markdown => &mut self.markdown_scroll,
            FocusedPanel::FullDiff => &mut self.full_diff_scroll,
        }
    }
}

/// Split borrow of [`AppState`] used while drawing the review screen
///
/// Widgets record content sizes in the scroll states during render, so the
/// view has to be mutable while the fetched content is read.
pub struct ReviewParts<'a> {
    pub detail: Option<&'a RunDetail>,
    pub preview: Option<&'a PreviewContent>,
    pub full_diff: Option<&'a SideBySideDiff>,
    /// Changes whenever the fetched record changes
    pub revision: u64,
    pub view: &'a mut ReviewView,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    /// Runs in catalog order
    pub runs: Vec<RunEntry>,
    pub selected_run: Option<usize>,

    /// Reviewable cases of the selected run, in listing order
    pub cases: Vec<CaseSummary>,
    pub selected_case: Option<usize>,

    /// Full record of the selected case, once fetched
    pub detail: Option<RunDetail>,
    pub preview: Option<PreviewContent>,

    pub notice: Option<Notice>,
    /// Transient footer message (e.g. a failed browser launch)
    pub status_line: Option<String>,
    pub loading: bool,

    /// Cursor inside the open picker
    pub picker_cursor: usize,

    pub view: ReviewView,

    /// Side-by-side markdown diff for the current case, computed on first expand
    full_diff: Option<SideBySideDiff>,

    /// Bumped on every detail change so derived render output can be reused
    detail_revision: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Review,
            view: ReviewView::from_settings(&settings),
            settings,
            runs: Vec::new(),
            selected_run: None,
            cases: Vec::new(),
            selected_case: None,
            detail: None,
            preview: None,
            notice: None,
            status_line: None,
            loading: false,
            picker_cursor: 0,
            full_diff: None,
            detail_revision: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn current_run(&self) -> Option<&RunEntry> {
        self.selected_run.and_then(|idx| self.runs.get(idx))
    }

    pub fn current_run_timestamp(&self) -> Option<&str> {
        self.current_run().map(|entry| entry.run.timestamp.as_str())
    }

    pub fn current_case(&self) -> Option<&CaseSummary> {
        self.selected_case.and_then(|idx| self.cases.get(idx))
    }

    pub fn current_case_key(&self) -> Option<&CaseKey> {
        self.current_case().map(|case| &case.key)
    }

    /// Whether a response for `(run_timestamp, key)` belongs to the current selection
    pub fn is_current_selection(&self, run_timestamp: &str, key: &CaseKey) -> bool {
        self.current_run_timestamp() == Some(run_timestamp)
            && self.current_case_key() == Some(key)
    }

    /// Forget everything below the run level
    pub fn clear_cases(&mut self) {
        self.cases.clear();
        self.selected_case = None;
        self.clear_detail();
    }

    /// Forget the selected case's record and per-case view state
    pub fn clear_detail(&mut self) {
        self.detail = None;
        self.preview = None;
        self.full_diff = None;
        self.detail_revision += 1;
        self.view = ReviewView::from_settings(&self.settings);
    }

    /// Install the fetched record of the selected case
    pub fn set_detail(&mut self, detail: RunDetail, preview: PreviewContent) {
        self.detail = Some(detail);
        self.preview = Some(preview);
        self.full_diff = None;
        self.detail_revision += 1;
    }

    pub fn detail_revision(&self) -> u64 {
        self.detail_revision
    }

    pub fn full_diff(&self) -> Option<&SideBySideDiff> {
        self.full_diff.as_ref()
    }

    /// Borrow the review content alongside a mutable view for rendering
    pub fn review_mut(&mut self) -> ReviewParts<'_> {
        ReviewParts {
            detail: self.detail.as_ref(),
            preview: self.preview.as_ref(),
            full_diff: self.full_diff.as_ref(),
            revision: self.detail_revision,
            view: &mut self.view,
        }
    }

    /// Compute the markdown diff for the current case if not done yet
    ///
    /// Returns `false` when the case has no markdown pair.
    pub fn ensure_full_diff(&mut self) -> bool {
        if self.full_diff.is_some() {
            return true;
        }
        let Some((truth, predicted)) = self.detail.as_ref().and_then(|d| d.result.markdown_pair())
        else {
            return false;
        };
        self.full_diff = Some(SideBySideDiff::compute(truth, predicted));
        true
    }

    /// Whether the markdown comparison is shown for the current case
    pub fn has_markdown(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|d| d.result.markdown_pair().is_some())
    }

    /// Panels that can take scroll focus, in Tab order
    pub fn focusable_panels(&self) -> Vec<FocusedPanel> {
        let mut panels = Vec::new();
        if self.detail.is_some() {
            panels.push(FocusedPanel::JsonDiff);
        }
        if self.has_markdown() {
            panels.push(FocusedPanel::Markdown);
            if self.view.full_diff_expanded {
                panels.push(FocusedPanel::FullDiff);
            }
        }
        panels
    }

    /// Length of the list shown by the open picker
    pub fn picker_len(&self) -> usize {
        match self.ui_mode {
            UiMode::RunPicker => self.runs.len(),
            UiMode::CasePicker => self.cases.len(),
            UiMode::Review => 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
