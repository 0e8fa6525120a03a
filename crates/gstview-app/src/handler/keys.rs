//! Key event handlers for the two focus targets

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.focus {
        Focus::Input => handle_key_input(state, key),
        Focus::Details => handle_key_details(state, key),
    }
}

/// Keys while the GSTIN field has focus. Characters edit the identifier
/// verbatim; there is no trimming or validation.
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Submit),

        InputKey::Backspace => {
            let mut text = state.input.clone();
            text.pop();
            Some(Message::IdentifierInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::IdentifierInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.input.clone();
            text.push(c);
            Some(Message::IdentifierInput { text })
        }

        InputKey::Tab | InputKey::BackTab | InputKey::Down => Some(Message::FocusNext),

        InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Keys while the details pane has focus
fn handle_key_details(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousYear),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextYear),

        InputKey::Enter | InputKey::Char(' ') => {
            // Only years that exist in the record can be toggled
            state.selected_year_key().map(|year| Message::ToggleYear {
                year: year.to_string(),
            })
        }

        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Tab | InputKey::BackTab => Some(Message::FocusNext),

        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}
