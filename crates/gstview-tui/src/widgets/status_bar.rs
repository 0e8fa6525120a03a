//! Bottom status line: key hints and fetch timestamp

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gstview_app::{AppState, Focus};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        let hints: &[(&str, &str)] = match self.state.focus {
            Focus::Input => &[
                ("Enter", "Fetch"),
                ("Tab", "Details"),
                ("Ctrl+U", "Clear"),
                ("Esc", "Quit"),
            ],
            Focus::Details => &[
                ("↑/↓", "Year"),
                ("Enter", "Toggle"),
                ("PgUp/PgDn", "Scroll"),
                ("Tab", "Input"),
                ("q", "Quit"),
            ],
        };
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }

        if let Some(fetched_at) = self.state.fetched_at {
            spans.push(Span::styled(
                format!("fetched {}", fetched_at.format("%H:%M:%S")),
                styles::text_muted(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
