//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use gstview_core::GstDetails;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the stored identifier with `text` (no trimming, no validation)
    IdentifierInput { text: String },

    /// Submit the current identifier for lookup
    Submit,

    /// Move focus between the input field and the details pane
    FocusNext,

    // ─────────────────────────────────────────────────────────
    // Details Pane Messages
    // ─────────────────────────────────────────────────────────
    /// Flip a year's membership in the expanded set
    ToggleYear { year: String },

    /// Move the year selection down
    SelectNextYear,

    /// Move the year selection up
    SelectPreviousYear,

    /// Scroll the details pane up one page
    PageUp,

    /// Scroll the details pane down one page
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Fetch Completion Messages
    // ─────────────────────────────────────────────────────────
    /// Lookup resolved successfully. `seq` identifies the submission;
    /// completions for anything but the latest submission are discarded.
    FetchSucceeded { seq: u64, details: Box<GstDetails> },

    /// Lookup failed. `error` is the internal detail for the log file;
    /// the user sees one fixed sentence regardless.
    FetchFailed { seq: u64, error: String },
}
