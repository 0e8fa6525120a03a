//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use gstview_app::{AppState, Focus};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{DetailsView, IdentifierInput, MainHeader, StatusBar};

/// Render the complete UI (View function in TEA).
///
/// Pure rendering: state is read, never modified.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(&state.settings.api.base_url), areas.header);
    frame.render_widget(
        IdentifierInput::new(&state.input, state.focus == Focus::Input),
        areas.input,
    );
    frame.render_widget(DetailsView::new(state), areas.details);
    frame.render_widget(StatusBar::new(state), areas.status);
}
