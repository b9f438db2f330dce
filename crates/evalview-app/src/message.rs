//! Message types for the application (TEA pattern)

use evalview_core::{CaseKey, ResultListing, RunDetail};

use crate::config::JsonPane;
use crate::input_key::InputKey;
use crate::preview::PreviewContent;
use crate::state::RunEntry;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Begin the session: load the run catalog
    Start,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog Responses
    // ─────────────────────────────────────────────────────────
    /// Run catalog loaded, in catalog order
    RunsLoaded { runs: Vec<RunEntry> },
    RunsLoadFailed { error: String },

    /// Lightweight listing for a run
    ResultsLoaded {
        run_timestamp: String,
        listing: ResultListing,
    },
    ResultsLoadFailed { run_timestamp: String, error: String },

    /// Full record (and decoded file preview) for one case
    DetailLoaded {
        run_timestamp: String,
        key: CaseKey,
        detail: Box<RunDetail>,
        preview: PreviewContent,
    },
    DetailLoadFailed {
        run_timestamp: String,
        key: CaseKey,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// Select a run by index into the run list
    SelectRun(usize),
    /// Select a case by index into the filtered case list
    SelectCase(usize),

    OpenRunPicker,
    OpenCasePicker,
    PickerUp,
    PickerDown,
    PickerConfirm,
    PickerCancel,

    // ─────────────────────────────────────────────────────────
    // Review Panels
    // ─────────────────────────────────────────────────────────
    SelectJsonPane(JsonPane),
    NextJsonPane,
    PrevJsonPane,
    /// Switch between raw and rendered markdown
    ToggleMarkdownView,
    /// Expand or collapse the full markdown diff
    ToggleFullDiff,
    ToggleRunDetails,

    FocusNext,
    FocusPrev,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    /// Open the case's file URL in the browser
    OpenFileUrl,
    UrlOpenFailed { error: String },
}
