//! Message processing
//!
//! Runs a message through the TEA update function, executes any resulting
//! action against the catalog and feeds follow-up messages back in until the
//! chain settles.

use std::collections::VecDeque;

use evalview_catalog::LocalRunCatalog;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Catalog I/O is awaited inline, so by the time this returns the state
/// reflects every response the message triggered.
pub async fn process_message<C: LocalRunCatalog>(
    state: &mut AppState,
    message: Message,
    catalog: &C,
) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }

        if let Some(action) = result.action {
            if let Some(response) = handle_action(action, catalog).await {
                queue.push_back(response);
            }
        }
    }
}
