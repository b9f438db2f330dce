//! Widget components for the TUI

mod diff_stats;
mod file_preview;
mod header;
mod json_diff;
mod markdown_diff;
pub mod modal_overlay;
mod model_info;
mod notice;
mod picker;
mod run_details;
mod scroll_view;
mod status_bar;

pub use diff_stats::DiffStatsBar;
pub use file_preview::FilePreview;
pub use header::SelectorHeader;
pub use json_diff::{has_content as json_has_content, pane_content, JsonDiffPanel};
pub use markdown_diff::{markdown_lines, FullDiffPanel, MarkdownPanel};
pub use model_info::ModelInfo;
pub use notice::NoticeBox;
pub use picker::Picker;
pub use run_details::RunDetailsSection;
pub use status_bar::StatusBar;
