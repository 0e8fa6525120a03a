//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// GSTIN input field
    pub input: Rect,

    /// Details pane (company, addresses, financial years)
    pub details: Rect,

    /// Bottom status line (key hints, fetch timestamp)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(3), // Header (bordered, one content row)
        Constraint::Length(3), // Input field (bordered, one content row)
        Constraint::Min(3),    // Details pane (remaining space)
        Constraint::Length(1), // Status line
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        details: chunks[2],
        status: chunks[3],
    }
}
