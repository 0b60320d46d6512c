//! History list state and the filter controller.
//!
//! DESIGN
//! ======
//! The record list is replaced wholesale on load and never edited in place.
//! Changing the filter only touches `filter`; rendering re-reads the held
//! records, so filtering never refetches.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::{HistoryRecord, Status};

/// Status filter selected from the filter controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    /// Exact match against the record's raw status string.
    Status(Status),
}

impl Filter {
    /// Parse a `data-filter` value. `"all"` shows everything; any other value
    /// is an exact status match, so an unrecognized value matches nothing
    /// unless a record carries exactly that status.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => Self::All,
            other => Self::Status(Status::from(other)),
        }
    }

    /// Value written to the control's `data-filter` attribute.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Status(status) => status.as_str(),
        }
    }

    pub fn matches(&self, record: &HistoryRecord) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => record.status.as_str() == status.as_str(),
        }
    }

    /// Records passing the filter, in original order.
    pub fn apply<'a>(&self, records: &'a [HistoryRecord]) -> Vec<&'a HistoryRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Filters offered in the control row, in display order.
pub const FILTER_OPTIONS: &[(&str, &str)] = &[
    ("all", "Все"),
    ("success", "Успешно"),
    ("error", "Ошибки"),
    ("pending", "В процессе"),
];

/// One filter control as it should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

/// Describe the control row with `active` set on exactly the control whose
/// filter equals `selected` (none when `selected` is not one of the offered
/// options).
pub fn filter_controls(selected: &Filter) -> Vec<FilterControl> {
    FILTER_OPTIONS
        .iter()
        .map(|&(raw, label)| {
            let filter = Filter::parse(raw);
            let active = filter == *selected;
            FilterControl { filter, label, active }
        })
        .collect()
}

/// Page-lifetime history state, provided as context by the app root.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub records: Vec<HistoryRecord>,
    pub filter: Filter,
    /// Set once the initial load has finished, successful or not.
    pub loaded: bool,
    /// Set while the initial load is in flight.
    pub loading: bool,
}

impl HistoryState {
    /// Claim the initial load. Returns `false` when it already ran or is
    /// running, so remounting the page does not refetch.
    pub fn begin_load(&mut self) -> bool {
        if self.loaded || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Replace the record list with a freshly loaded one.
    pub fn replace_records(&mut self, records: Vec<HistoryRecord>) {
        self.records = records;
        self.loaded = true;
        self.loading = false;
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&HistoryRecord> {
        self.filter.apply(&self.records)
    }
}
