//! Display formatting helpers shared by the panels

/// URLs at or above this length are shortened for display
pub const URL_TRUNCATE_THRESHOLD: usize = 100;
const URL_HEAD_CHARS: usize = 50;
const URL_TAIL_CHARS: usize = 45;

/// A link as shown on screen, paired with its real target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUrl {
    pub text: String,
    pub target: String,
}

/// Shorten long URLs to `first 50 + "..." + last 45` characters
///
/// The target always stays the full URL. Counting is per character so
/// multi-byte URLs never split a code point.
pub fn truncate_url(url: &str) -> DisplayUrl {
    let len = url.chars().count();
    let text = if len < URL_TRUNCATE_THRESHOLD {
        url.to_string()
    } else {
        let head: String = url.chars().take(URL_HEAD_CHARS).collect();
        let tail: String = url.chars().skip(len - URL_TAIL_CHARS).collect();
        format!("{head}...{tail}")
    };

    DisplayUrl {
        text,
        target: url.to_string(),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Title-case each word, lower-casing the rest (`"in_progress"` → `"In_Progress"`)
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
