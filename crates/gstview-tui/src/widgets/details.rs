//! Details pane: company record, addresses, and collapsible filing years

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gstview_app::{AppState, Focus};
use gstview_core::{AddressEntry, FilingRecord};

use crate::theme::styles;

/// Shown on a collapsed year header
const COLLAPSED: &str = "▼";
/// Shown on an expanded year header
const EXPANDED: &str = "▲";

/// The main content pane. Renders, in order: the loading indicator, the
/// error sentence, and the record. Error and record are independent
/// branches, so a stale record stays visible next to a fresh error.
pub struct DetailsView<'a> {
    state: &'a AppState,
}

impl<'a> DetailsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for DetailsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Details;
        let block = styles::pane_block(focused).title(" Details ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = content_lines(self.state);
        Paragraph::new(lines)
            .scroll((self.state.scroll, 0))
            .render(inner, buf);
    }
}

/// Build the pane's text. Split out of `render` so tests can assert on
/// content without a terminal.
pub(crate) fn content_lines(state: &AppState) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    if state.loading {
        lines.push(Line::from(Span::styled("Loading...", styles::loading())));
    }

    if let Some(error) = state.error {
        lines.push(Line::from(Span::styled(error, styles::error())));
    }

    let Some(details) = state.details.as_ref() else {
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Enter a GST number and press Enter to fetch details.",
                styles::text_muted(),
            )));
        }
        return lines;
    };

    let company = &details.company_details;

    lines.push(Line::from(Span::styled("GST Details", styles::heading())));
    lines.push(Line::default());
    lines.push(field("Legal Name", &company.legal_name));
    lines.push(field("Trade Name", &company.trade_name));
    lines.push(field("GST Number", &company.gst_number));
    lines.push(field("Registration Date", &company.registration_date));

    // The whole section disappears when there are no addresses
    if !company.address.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Addresses", styles::heading())));
        for (index, entry) in company.address.iter().enumerate() {
            push_address(&mut lines, index, entry);
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Financial Details",
        styles::heading(),
    )));

    let focused = state.focus == Focus::Details;
    for (index, (year, filings)) in details.financial_details.filling_data.iter().enumerate() {
        let expanded = state.is_expanded(year);
        let indicator = if expanded { EXPANDED } else { COLLAPSED };

        let header_style = if focused && index == state.selected_year {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        lines.push(Line::from(Span::styled(
            format!("{indicator} {year}"),
            header_style,
        )));

        if expanded {
            if filings.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  Not found",
                    styles::text_muted(),
                )));
            } else {
                for filing in filings {
                    push_filing(&mut lines, filing);
                }
            }
        }
    }

    lines
}

/// One "Label: value" line
fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), styles::label()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn indented<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{label}: "), styles::label()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn push_address<'a>(lines: &mut Vec<Line<'a>>, index: usize, entry: &'a AddressEntry) {
    let address = &entry.address;
    lines.push(Line::from(Span::styled(
        format!("Address {}", index + 1),
        styles::label(),
    )));
    lines.push(indented("Building Name", &address.building_name));
    lines.push(indented("Street", &address.street));
    lines.push(indented("Location", &address.location));
    lines.push(indented("Building Number", &address.building_number));
    lines.push(indented("District", &address.district));
    lines.push(indented("Locality", &address.locality));
    lines.push(indented("Locationality", &address.locationality));
    lines.push(indented("Pincode", &address.pincode));
    lines.push(indented("Landmark", &address.land_mark));
    lines.push(indented("State Code", &address.state_code));
    lines.push(indented("GeoCode Level", &address.geo_code_level));
    lines.push(indented("Floor Number", &address.floor_number));
    lines.push(indented("Landmark Coordinates", &address.landmark));
    lines.push(indented("Nature", &entry.nature));
}

fn push_filing<'a>(lines: &mut Vec<Line<'a>>, filing: &'a FilingRecord) {
    lines.push(indented("Return Type", &filing.return_type));
    lines.push(indented("Return Period", &filing.return_period));
    lines.push(indented("Date of Filing", &filing.date_of_filing));
    lines.push(indented("Status", &filing.status));
    lines.push(indented("ARN", &filing.arn));
}
