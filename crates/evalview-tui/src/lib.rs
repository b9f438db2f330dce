//! evalview-tui - Terminal UI for evalview
//!
//! This crate provides the ratatui-based review screen: selector header,
//! file preview, JSON diff panes, markdown comparison and the pickers. The
//! app layer in evalview-app owns state and catalog access.

pub mod event;
pub mod layout;
pub mod line_cache;
pub mod markdown_render;
pub mod render;
pub mod runner;
pub mod text_wrap;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use line_cache::RenderCache;
pub use runner::run;
