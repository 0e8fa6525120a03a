//! Application state (Model in TEA pattern)

use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::config::Settings;
use gstview_core::GstDetails;

/// Internal log line for a failed lookup.
pub const FETCH_ERROR_LOG: &str = "Failed to fetch GST details";

/// User-visible error text. Deliberately a different hardcoded sentence
/// from [`FETCH_ERROR_LOG`]; both strings come from the original view and
/// are preserved as-is.
pub const FETCH_ERROR_DISPLAY: &str = "Error fetching GST details. Please try again later.";

/// Which pane receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The GSTIN input field
    #[default]
    Input,

    /// The details pane (year navigation and toggling)
    Details,
}

/// The whole view state. Created empty at startup, mutated only through
/// [`crate::handler::update`], discarded on exit. Nothing here is persisted.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Raw identifier as typed; no trimming, no validation
    pub input: String,

    pub focus: Focus,

    /// A lookup is in flight
    pub loading: bool,

    /// Fixed user-visible error sentence, if the last lookup failed
    pub error: Option<&'static str>,

    /// Last successfully fetched record
    pub details: Option<GstDetails>,

    /// Years whose filing lists are currently visible.
    /// Invariant: every member is a key of the current record's year map.
    pub expanded_years: HashSet<String>,

    /// Index of the selected year header (wire order)
    pub selected_year: usize,

    /// Vertical scroll offset of the details pane
    pub scroll: u16,

    /// When the current record was fetched
    pub fetched_at: Option<DateTime<Local>>,

    /// Monotonic submission counter. Only the completion carrying the
    /// latest value is committed; earlier completions are stale.
    fetch_seq: u64,

    should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            input: String::new(),
            focus: Focus::Input,
            loading: false,
            error: None,
            details: None,
            expanded_years: HashSet::new(),
            selected_year: 0,
            scroll: 0,
            fetched_at: None,
            fetch_seq: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Details,
            Focus::Details => Focus::Input,
        };
    }

    /// Latest submission sequence number (for stale-completion checks).
    pub fn latest_seq(&self) -> u64 {
        self.fetch_seq
    }

    /// Start a new lookup: clear any previous error, raise the in-flight
    /// flag, and return the sequence number identifying this submission.
    /// The previous record stays visible while the request runs.
    pub fn begin_fetch(&mut self) -> u64 {
        self.error = None;
        self.loading = true;
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Commit a successful lookup. Returns `false` (and changes nothing)
    /// when `seq` is not the latest submission.
    pub fn commit_success(&mut self, seq: u64, details: GstDetails) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.error = None;

        // Drop expanded years that the new record no longer has
        self.expanded_years
            .retain(|year| details.financial_details.filling_data.contains_key(year));

        let year_count = details.financial_details.filling_data.len();
        self.selected_year = self.selected_year.min(year_count.saturating_sub(1));
        self.scroll = 0;

        self.details = Some(details);
        self.fetched_at = Some(Local::now());
        true
    }

    /// Commit a failed lookup. Returns `false` (and changes nothing) when
    /// `seq` is not the latest submission. Whether the previous record
    /// survives is a configuration choice (`behavior.clear_on_error`).
    pub fn commit_failure(&mut self, seq: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(FETCH_ERROR_DISPLAY);
        if self.settings.behavior.clear_on_error {
            self.details = None;
            self.expanded_years.clear();
            self.selected_year = 0;
            self.fetched_at = None;
        }
        true
    }

    /// Flip `year`'s membership in the expanded set.
    pub fn toggle_year(&mut self, year: &str) {
        if !self.expanded_years.remove(year) {
            self.expanded_years.insert(year.to_string());
        }
    }

    pub fn is_expanded(&self, year: &str) -> bool {
        self.expanded_years.contains(year)
    }

    /// Number of year headers in the current record.
    pub fn year_count(&self) -> usize {
        self.details
            .as_ref()
            .map(|d| d.financial_details.filling_data.len())
            .unwrap_or(0)
    }

    /// Key of the currently selected year header, if any.
    pub fn selected_year_key(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.years().nth(self.selected_year))
    }

    pub fn select_next_year(&mut self) {
        let count = self.year_count();
        if self.selected_year + 1 < count {
            self.selected_year += 1;
        }
    }

    pub fn select_previous_year(&mut self) {
        self.selected_year = self.selected_year.saturating_sub(1);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }
}
