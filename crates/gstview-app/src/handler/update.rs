//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppState, FETCH_ERROR_LOG};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines scrolled per PageUp/PageDown in the details pane.
const SCROLL_PAGE: u16 = 10;

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::IdentifierInput { text } => {
            state.input = text;
            UpdateResult::none()
        }

        Message::Submit => {
            let seq = state.begin_fetch();
            info!(gstin = %state.input, seq, "submitting GST lookup");
            UpdateResult::action(UpdateAction::FetchDetails {
                seq,
                gstin: state.input.clone(),
            })
        }

        Message::FocusNext => {
            state.toggle_focus();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Details Pane Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleYear { year } => {
            state.toggle_year(&year);
            UpdateResult::none()
        }

        Message::SelectNextYear => {
            state.select_next_year();
            UpdateResult::none()
        }

        Message::SelectPreviousYear => {
            state.select_previous_year();
            UpdateResult::none()
        }

        Message::PageUp => {
            state.scroll_up(SCROLL_PAGE);
            UpdateResult::none()
        }

        Message::PageDown => {
            state.scroll_down(SCROLL_PAGE);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Completion Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchSucceeded { seq, details } => {
            if state.commit_success(seq, *details) {
                debug!(seq, "GST lookup committed");
            } else {
                debug!(seq, latest = state.latest_seq(), "discarding stale lookup result");
            }
            UpdateResult::none()
        }

        Message::FetchFailed { seq, error } => {
            if state.commit_failure(seq) {
                warn!(%error, "{FETCH_ERROR_LOG}");
            } else {
                debug!(seq, latest = state.latest_seq(), "discarding stale lookup failure");
            }
            UpdateResult::none()
        }
    }
}
