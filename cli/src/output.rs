//! Terminal formatting for CLI results.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use check_history::net::types::HistoryRecord;
use check_history::state::history::Filter;
use check_history::util::history_view::{ListView, Rendered};

/// One tab-separated line per rendered item, or the empty-state message.
pub fn history_lines(rendered: &Rendered) -> Vec<String> {
    match &rendered.list {
        ListView::Empty { message } => vec![(*message).to_owned()],
        ListView::Items(items) => items
            .iter()
            .map(|item| format!("{}\t{}\t{}\t{}", item.id, item.target, item.date, item.badge.label))
            .collect(),
    }
}

/// Pretty JSON array of the records passing `filter`.
pub fn history_json(records: &[HistoryRecord], filter: &Filter) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&filter.apply(records))
}
