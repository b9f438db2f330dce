//! Key event handlers for different UI modes

use crate::config::JsonPane;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Review => handle_key_review(key),
        UiMode::RunPicker | UiMode::CasePicker => handle_key_picker(key),
    }
}

/// Handle key events on the review screen
fn handle_key_review(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Selectors
        InputKey::Char('r') => Some(Message::OpenRunPicker),
        InputKey::Char('c') => Some(Message::OpenCasePicker),

        // JSON panes: 1-5 jump, arrows cycle
        InputKey::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| JsonPane::from_index(d as usize - 1))
            .map(Message::SelectJsonPane),
        InputKey::Left => Some(Message::PrevJsonPane),
        InputKey::Right => Some(Message::NextJsonPane),

        // Toggles
        InputKey::Char('m') => Some(Message::ToggleMarkdownView),
        InputKey::Char('d') => Some(Message::ToggleFullDiff),
        InputKey::Char('i') => Some(Message::ToggleRunDetails),

        // Focus and scrolling
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        InputKey::Char('o') => Some(Message::OpenFileUrl),

        _ => None,
    }
}

/// Handle key events while a run or case picker is open
fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PickerUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PickerDown),
        InputKey::Enter => Some(Message::PickerConfirm),
        InputKey::Esc | InputKey::Char('q') => Some(Message::PickerCancel),
        // Force quit with Ctrl+C even in a picker
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
