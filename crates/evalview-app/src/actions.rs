//! Action handlers: UpdateAction dispatch against the run catalog
//!
//! Actions run inline: the event loop awaits each one before reading the
//! next input, and the response comes back as a follow-up [`Message`].

use std::process::Command;

use evalview_catalog::{LocalRunCatalog, ResultFields};
use tracing::{debug, info};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::preview::load_preview;
use crate::state::RunEntry;

/// Execute an action, returning the message that reports its outcome
pub async fn handle_action<C: LocalRunCatalog>(
    action: UpdateAction,
    catalog: &C,
) -> Option<Message> {
    match action {
        UpdateAction::LoadRuns => match catalog.list_runs().await {
            Ok(runs) => {
                let runs = runs
                    .into_iter()
                    .map(|run| RunEntry {
                        label: catalog.format_timestamp(&run.timestamp),
                        run,
                    })
                    .collect();
                Some(Message::RunsLoaded { runs })
            }
            Err(e) => Some(Message::RunsLoadFailed {
                error: e.to_string(),
            }),
        },

        UpdateAction::LoadResults { run_timestamp } => {
            debug!("Loading lightweight listing for run {}", run_timestamp);
            match catalog
                .list_results(&run_timestamp, ResultFields::Lightweight)
                .await
            {
                Ok(listing) => Some(Message::ResultsLoaded {
                    run_timestamp,
                    listing,
                }),
                Err(e) => Some(Message::ResultsLoadFailed {
                    run_timestamp,
                    error: e.to_string(),
                }),
            }
        }

        UpdateAction::FetchDetail {
            run_timestamp,
            key,
            preview_width,
        } => {
            debug!("Fetching case {} from run {}", key.id, run_timestamp);
            match catalog.fetch_result(&run_timestamp, &key).await {
                Ok(detail) => {
                    let preview =
                        load_preview(detail.result.file_reference(), preview_width).await;
                    Some(Message::DetailLoaded {
                        run_timestamp,
                        key,
                        detail: Box::new(detail),
                        preview,
                    })
                }
                Err(e) => Some(Message::DetailLoadFailed {
                    run_timestamp,
                    key,
                    error: e.to_string(),
                }),
            }
        }

        UpdateAction::OpenUrl { url, browser } => {
            info!("Opening {} in browser", url);
            match open_url_in_browser(&url, &browser) {
                Ok(()) => None,
                Err(e) => Some(Message::UrlOpenFailed {
                    error: e.to_string(),
                }),
            }
        }
    }
}

/// Open a URL with the configured browser, or the platform default opener
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        // Custom browser specified in settings.
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evalview_catalog::test_utils::{test_entry, test_run};
    use evalview_catalog::MemoryCatalog;
    use evalview_core::CaseKey;
    use tokio_test::block_on;

    #[test]
    fn test_load_runs_formats_labels() {
        let catalog = MemoryCatalog::new().with_run(test_run("2024-12-03T14-05-22-123Z"), vec![]);
        let msg = block_on(handle_action(UpdateAction::LoadRuns, &catalog));
        let Some(Message::RunsLoaded { runs }) = msg else {
            panic!("expected RunsLoaded, got {msg:?}");
        };
        assert_eq!(runs[0].label, "2024-12-03 14:05:22");
    }

    #[test]
    fn test_load_results_requests_lightweight_listing() {
        let catalog = MemoryCatalog::new().with_run(test_run("r1"), vec![test_entry("a", 1)]);
        let msg = block_on(handle_action(
            UpdateAction::LoadResults {
                run_timestamp: "r1".to_string(),
            },
            &catalog,
        ));
        assert!(matches!(msg, Some(Message::ResultsLoaded { .. })));

        let calls = catalog.calls();
        assert_eq!(calls.lightweight_listings, 1);
        assert_eq!(calls.full_listings, 0);
    }

    #[test]
    fn test_fetch_detail_failure_is_reported() {
        let catalog = MemoryCatalog::new().with_run(test_run("r1"), vec![]);
        let msg = block_on(handle_action(
            UpdateAction::FetchDetail {
                run_timestamp: "r1".to_string(),
                key: CaseKey::new("missing", 0),
                preview_width: 40,
            },
            &catalog,
        ));
        let Some(Message::DetailLoadFailed { key, error, .. }) = msg else {
            panic!("expected DetailLoadFailed, got {msg:?}");
        };
        assert_eq!(key.id, "missing");
        assert!(error.contains("missing"));
    }

    #[test]
    fn test_fetch_detail_carries_preview() {
        let catalog = MemoryCatalog::new().with_run(test_run("r1"), vec![test_entry("a", 1)]);
        let msg = block_on(handle_action(
            UpdateAction::FetchDetail {
                run_timestamp: "r1".to_string(),
                key: CaseKey::new("a", 0),
                preview_width: 40,
            },
            &catalog,
        ));
        let Some(Message::DetailLoaded { preview, .. }) = msg else {
            panic!("expected DetailLoaded, got {msg:?}");
        };
        assert!(matches!(
            preview,
            crate::preview::PreviewContent::Remote { .. }
        ));
    }
}
