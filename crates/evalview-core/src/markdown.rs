//! Markdown text normalization for rendering

/// Prepare stored markdown for rendering
///
/// Literal `\n` escape pairs become real newlines, then one pair of
/// wrapping double quotes is removed. Only the rendered view uses this;
/// the raw view shows stored text untouched.
pub fn normalize_markdown(text: &str) -> String {
    let unescaped = text.replace("\\n", "\n");
    if unescaped.starts_with('"') && unescaped.ends_with('"') {
        // a lone `"` is both prefix and suffix and collapses to nothing
        unescaped
            .get(1..unescaped.len() - 1)
            .unwrap_or_default()
            .to_string()
    } else {
        unescaped
    }
}
