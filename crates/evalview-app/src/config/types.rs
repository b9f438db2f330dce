//! Configuration types for evalview
//!
//! Contains the settings structure loaded from `.evalview/config.toml` and
//! the view enums whose defaults it controls.

use serde::{Deserialize, Serialize};

/// Application settings (.evalview/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Where runs are read from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Results directory, relative to the working directory
    #[serde(default = "default_results_dir")]
    pub results_dir: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

fn default_results_dir() -> String {
    "results".to_string()
}

/// JSON diff pane selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonPane {
    #[default]
    SummaryDiff,
    FullDiff,
    GroundTruth,
    Predicted,
    Schema,
}

impl JsonPane {
    pub const ALL: [JsonPane; 5] = [
        JsonPane::SummaryDiff,
        JsonPane::FullDiff,
        JsonPane::GroundTruth,
        JsonPane::Predicted,
        JsonPane::Schema,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JsonPane::SummaryDiff => "Summary Diff",
            JsonPane::FullDiff => "Full Diff",
            JsonPane::GroundTruth => "Ground Truth",
            JsonPane::Predicted => "Predicted",
            JsonPane::Schema => "Schema",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            JsonPane::SummaryDiff => 0,
            JsonPane::FullDiff => 1,
            JsonPane::GroundTruth => 2,
            JsonPane::Predicted => 3,
            JsonPane::Schema => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Next pane, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous pane, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Markdown comparison mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkdownView {
    #[default]
    Raw,
    Rendered,
}

impl MarkdownView {
    pub fn toggle(&self) -> Self {
        match self {
            MarkdownView::Raw => MarkdownView::Rendered,
            MarkdownView::Rendered => MarkdownView::Raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkdownView::Raw => "Raw Markdown",
            MarkdownView::Rendered => "Rendered Markdown",
        }
    }
}

impl std::fmt::Display for MarkdownView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkdownView::Raw => write!(f, "raw"),
            MarkdownView::Rendered => write!(f, "rendered"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Width of the file preview thumbnail in terminal columns
    #[serde(default = "default_preview_width")]
    pub preview_width: u16,

    /// Markdown mode shown when a case is opened
    #[serde(default)]
    pub default_markdown_view: MarkdownView,

    /// JSON pane shown when a case is opened
    #[serde(default)]
    pub default_json_pane: JsonPane,

    /// Start with the run details section expanded
    #[serde(default)]
    pub show_run_details: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            preview_width: default_preview_width(),
            default_markdown_view: MarkdownView::default(),
            default_json_pane: JsonPane::default(),
            show_run_details: false,
        }
    }
}

fn default_preview_width() -> u16 {
    40
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Browser command for opening file URLs. Empty = system default.
    #[serde(default)]
    pub browser: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_pane_cycle_wraps() {
        assert_eq!(JsonPane::SummaryDiff.next(), JsonPane::FullDiff);
        assert_eq!(JsonPane::Schema.next(), JsonPane::SummaryDiff);
        assert_eq!(JsonPane::SummaryDiff.prev(), JsonPane::Schema);
    }

    #[test]
    fn test_json_pane_index_round_trip() {
        for pane in JsonPane::ALL {
            assert_eq!(JsonPane::from_index(pane.index()), Some(pane));
        }
        assert_eq!(JsonPane::from_index(5), None);
    }

    #[test]
    fn test_markdown_view_toggle() {
        assert_eq!(MarkdownView::Raw.toggle(), MarkdownView::Rendered);
        assert_eq!(MarkdownView::Rendered.toggle(), MarkdownView::Raw);
        assert_eq!(MarkdownView::Rendered.to_string(), "rendered");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.catalog.results_dir, "results");
        assert_eq!(settings.ui.preview_width, 40);
        assert_eq!(settings.ui.default_json_pane, JsonPane::SummaryDiff);
        assert!(!settings.ui.show_run_details);
        assert!(settings.behavior.browser.is_empty());
    }
}
