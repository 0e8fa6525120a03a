//! GSTIN input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const PLACEHOLDER: &str = "Enter GST Number (e.g. 29AAACB2108H1ZI)";

/// Single-line identifier input with cursor and placeholder
pub struct IdentifierInput<'a> {
    value: &'a str,
    focused: bool,
}

impl<'a> IdentifierInput<'a> {
    pub fn new(value: &'a str, focused: bool) -> Self {
        Self { value, focused }
    }
}

impl Widget for IdentifierInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::pane_block(self.focused).title(" GSTIN ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        if self.value.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", styles::keybinding()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.value, styles::text_primary()));
            if self.focused {
                spans.push(Span::styled("_", styles::keybinding()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
