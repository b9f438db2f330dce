//! Scroll message handlers
//!
//! Scrolling applies to the focused panel; Tab cycles focus over the panels
//! currently on screen.

use crate::scroll_state::ScrollState;
use crate::state::{AppState, FocusedPanel};

use super::UpdateResult;

fn with_focused(state: &mut AppState, f: impl FnOnce(&mut ScrollState)) -> UpdateResult {
    let panels = state.focusable_panels();
    if !panels.contains(&state.view.focus) {
        match panels.first() {
            Some(first) => state.view.focus = *first,
            None => return UpdateResult::none(),
        }
    }
    let focus = state.view.focus;
    f(state.view.scroll_mut(focus));
    UpdateResult::none()
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    with_focused(state, |s| s.scroll_up(1))
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    with_focused(state, |s| s.scroll_down(1))
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    with_focused(state, ScrollState::page_up)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    with_focused(state, ScrollState::page_down)
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    with_focused(state, ScrollState::scroll_to_top)
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    with_focused(state, ScrollState::scroll_to_bottom)
}

/// Move focus to the next or previous visible panel, wrapping around
pub fn handle_cycle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    let panels = state.focusable_panels();
    if panels.is_empty() {
        return UpdateResult::none();
    }

    let next = match panels.iter().position(|p| *p == state.view.focus) {
        Some(idx) if forward => (idx + 1) % panels.len(),
        Some(idx) => (idx + panels.len() - 1) % panels.len(),
        None => 0,
    };
    state.view.focus = panels[next];
    UpdateResult::none()
}

/// Keep focus on something visible after a panel disappears
pub(crate) fn refocus(state: &mut AppState) {
    let panels = state.focusable_panels();
    if !panels.contains(&state.view.focus) {
        state.view.focus = panels.first().copied().unwrap_or(FocusedPanel::JsonDiff);
    }
}
