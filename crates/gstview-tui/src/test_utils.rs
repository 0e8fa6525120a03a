//! Test utilities for TUI rendering verification
//!
//! Widget and full-frame tests run against ratatui's TestBackend; they are
//! fast and deterministic, no PTY involved.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use gstview_app::{AppState, Settings};
use gstview_core::{Address, AddressEntry, CompanyDetails, FilingRecord, FinancialDetails, GstDetails};

/// Standard test terminal size. Tall enough that a full record (company
/// fields, one address block, and the year list) fits without scrolling.
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 40;

/// Test utility wrapper around ratatui's TestBackend terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// Fresh empty state with default settings
pub fn sample_state() -> AppState {
    AppState::new(Settings::default())
}

/// State holding `record` as a committed successful fetch
pub fn state_with_record(record: GstDetails) -> AppState {
    let mut state = sample_state();
    let seq = state.begin_fetch();
    assert!(state.commit_success(seq, record));
    state
}

/// A record with one address, one filed year, and one empty year
pub fn test_record() -> GstDetails {
    let mut filling_data = indexmap::IndexMap::new();
    filling_data.insert(
        "2022-23".to_string(),
        vec![FilingRecord {
            return_type: "GSTR3B".to_string(),
            return_period: "042022".to_string(),
            date_of_filing: "20/05/2022".to_string(),
            status: "Filed".to_string(),
            arn: "AA290422123456A".to_string(),
        }],
    );
    filling_data.insert("2021-22".to_string(), Vec::new());

    GstDetails {
        company_details: CompanyDetails {
            legal_name: "BOSCH LIMITED".to_string(),
            trade_name: "BOSCH".to_string(),
            gst_number: "29AAACB2108H1ZI".to_string(),
            registration_date: "01/07/2017".to_string(),
            address: vec![AddressEntry {
                nature: "Principal Place of Business".to_string(),
                address: Address {
                    building_name: "Tower A".to_string(),
                    street: "Hosur Road".to_string(),
                    location: "Adugodi".to_string(),
                    building_number: "123".to_string(),
                    district: "Bengaluru Urban".to_string(),
                    locality: "Koramangala".to_string(),
                    locationality: "Urban".to_string(),
                    pincode: "560030".to_string(),
                    land_mark: "Near Forum Mall".to_string(),
                    state_code: "29".to_string(),
                    geo_code_level: "4".to_string(),
                    floor_number: "3".to_string(),
                    landmark: "12.93,77.61".to_string(),
                },
            }],
        },
        financial_details: FinancialDetails { filling_data },
    }
}
