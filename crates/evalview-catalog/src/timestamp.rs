//! Run timestamp formatting

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a run timestamp for display
///
/// Understands the pipeline's filesystem-safe ISO form
/// (`2024-12-03T14-05-22-123Z`), the dashed form (`2024-12-03-14-05-22`)
/// and RFC 3339. Anything else is returned verbatim.
pub fn format_timestamp(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Parse a run timestamp into a naive UTC date-time
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_utc());
    }

    if let Some(stripped) = timestamp.strip_suffix('Z') {
        // 2024-12-03T14-05-22-123Z: drop the millisecond group
        let seconds = match stripped.rsplit_once('-') {
            Some((head, millis))
                if millis.len() == 3 && millis.chars().all(|c| c.is_ascii_digit()) =>
            {
                head
            }
            _ => stripped,
        };
        if let Ok(dt) = NaiveDateTime::parse_from_str(seconds, "%Y-%m-%dT%H-%M-%S") {
            return Some(dt);
        }
    }

    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d-%H-%M-%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_iso_form() {
        assert_eq!(
            format_timestamp("2024-12-03T14-05-22-123Z"),
            "2024-12-03 14:05:22"
        );
    }

    #[test]
    fn test_filesystem_iso_form_without_millis() {
        assert_eq!(
            format_timestamp("2024-12-03T14-05-22Z"),
            "2024-12-03 14:05:22"
        );
    }

    #[test]
    fn test_dashed_form() {
        assert_eq!(format_timestamp("2024-12-03-14-05-22"), "2024-12-03 14:05:22");
    }

    #[test]
    fn test_rfc3339_is_normalized_to_utc() {
        assert_eq!(
            format_timestamp("2024-12-03T16:05:22+02:00"),
            "2024-12-03 14:05:22"
        );
    }

    #[test]
    fn test_unknown_format_is_verbatim() {
        assert_eq!(format_timestamp("nightly-42"), "nightly-42");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_timestamps_sort_chronologically() {
        let a = parse_timestamp("2024-12-03T14-05-22-123Z").unwrap();
        let b = parse_timestamp("2024-12-04T09-00-00-000Z").unwrap();
        assert!(a < b);
    }
}
