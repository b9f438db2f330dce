//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `selection`: Run/case selection and catalog responses
//! - `scroll`: Scroll and focus handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod selection;
pub(crate) mod update;


use evalview_core::CaseKey;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Load the run catalog
    LoadRuns,

    /// Load the lightweight listing for a run
    LoadResults { run_timestamp: String },

    /// Fetch the full record of one case and decode its file preview
    FetchDetail {
        run_timestamp: String,
        key: CaseKey,
        /// Preview width in columns (from `settings.ui.preview_width`)
        preview_width: u16,
    },

    /// Open a URL in the system browser.
    ///
    /// If `browser` is empty, the platform default opener is used.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
