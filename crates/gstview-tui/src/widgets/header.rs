//! Title bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Main header showing the application title and the lookup host
pub struct MainHeader<'a> {
    base_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::pane_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("GST Details Viewer", styles::heading()),
            Span::raw("  "),
            Span::styled(self.base_url, styles::text_muted()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
