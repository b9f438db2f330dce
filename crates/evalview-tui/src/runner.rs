//! TUI runner - main entry point for the review session
//!
//! Owns the terminal for the session: draws, polls for a key, and hands the
//! resulting message to the app layer until the user quits.

use evalview_app::config::Settings;
use evalview_app::message::Message;
use evalview_app::process_message;
use evalview_app::state::AppState;
use evalview_catalog::LocalRunCatalog;
use evalview_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::line_cache::RenderCache;
use crate::{event, render};

/// Run the review session against a catalog
///
/// The terminal is restored on return and on panic.
pub async fn run<C: LocalRunCatalog>(catalog: C, settings: Settings) -> Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);
    let mut cache = RenderCache::default();

    let result = run_loop(&mut terminal, &mut state, &mut cache, &catalog).await;

    ratatui::restore();
    result
}

async fn run_loop<C: LocalRunCatalog>(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    cache: &mut RenderCache,
    catalog: &C,
) -> Result<()> {
    // First frame shows the empty selectors while the catalog is read
    draw(terminal, state, cache)?;
    process_message(state, Message::Start, catalog).await;

    while !state.should_quit() {
        draw(terminal, state, cache)?;

        if let Some(message) = event::poll()? {
            process_message(state, message, catalog).await;
        }
    }

    info!("Review session ended");
    Ok(())
}

fn draw(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    cache: &mut RenderCache,
) -> Result<()> {
    terminal
        .draw(|frame| render::view(frame, state, cache))
        .map_err(|e| Error::terminal(e.to_string()))?;
    Ok(())
}
