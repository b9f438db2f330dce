//! Display rows kept between frames
//!
//! Pretty-printed JSON, parsed markdown and the laid out diff table only
//! change with the fetched record, the view mode or the column widths. The
//! review panels build them through these caches so an idle screen redraws
//! from stored rows.

use evalview_app::config::{JsonPane, MarkdownView};
use ratatui::text::Line;

/// Left and right column rows of a side-by-side panel
pub type Columns = (Vec<Line<'static>>, Vec<Line<'static>>);

/// A single value reused while its key stays the same
#[derive(Debug)]
pub struct Cached<K, V> {
    entry: Option<(K, V)>,
    builds: usize,
}

impl<K, V> Default for Cached<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            builds: 0,
        }
    }
}

impl<K: PartialEq, V> Cached<K, V> {
    /// Return the stored value for `key`, rebuilding it when the key changed
    pub fn get_or_build(&mut self, key: K, build: impl FnOnce() -> V) -> &V {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                self.builds += 1;
                (key, build())
            }
        };
        &self.entry.insert(entry).1
    }

    #[cfg(test)]
    pub(crate) fn builds(&self) -> usize {
        self.builds
    }
}

/// JSON panel rows by (record revision, pane, width)
pub type JsonRows = Cached<(u64, JsonPane, u16), Vec<Line<'static>>>;

/// Markdown comparison rows by (record revision, mode, left width, right width)
pub type MarkdownRows = Cached<(u64, MarkdownView, u16, u16), Columns>;

/// Full diff table rows by (record revision, left width, right width)
pub type DiffTableRows = Cached<(u64, u16, u16), Columns>;

/// Row caches for every scrollable panel of the review screen
#[derive(Debug, Default)]
pub struct RenderCache {
    pub json: JsonRows,
    pub markdown: MarkdownRows,
    pub full_diff: DiffTableRows,
}
