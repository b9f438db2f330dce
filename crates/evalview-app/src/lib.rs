//! evalview-app - Application state and orchestration for evalview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the review
//! session: state, messages, the update function, catalog actions,
//! configuration loading and file preview decoding.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod preview;
pub mod process;
pub mod scroll_state;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use preview::{PreviewContent, PreviewImage};
pub use process::process_message;
pub use scroll_state::ScrollState;
pub use state::{
    AppPhase, AppState, FocusedPanel, Notice, ReviewParts, ReviewView, RunEntry, UiMode,
};
