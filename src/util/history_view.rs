//! Declarative render model for the history list.
//!
//! DESIGN
//! ======
//! `render` is a pure function of `(records, filter)`: it returns the child
//! items for the container plus the click bindings to attach, and nothing is
//! diffed against a previous render. The Leptos `HistoryList` component turns
//! this into DOM; tests assert on it directly.
//!
//! Bindings are produced fresh on every render since the previous ones die
//! with the replaced subtree. `dispatch_click` replays DOM bubbling over them
//! (control first, then the enclosing row unless propagation is stopped).

#[cfg(test)]
#[path = "history_view_test.rs"]
mod history_view_test;

use crate::net::types::HistoryRecord;
use crate::state::history::Filter;
use crate::util::actions::Action;

/// Element id of the list container in the host page.
pub const HISTORY_LIST_ID: &str = "historyList";

/// Placeholder shown when no record passes the filter.
pub const EMPTY_MESSAGE: &str = "История проверок пуста";

/// Class of the empty-state placeholder element.
pub const EMPTY_CLASS: &str = "empty-history";

/// Explicit reference to the element the list renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: &'static str,
}

impl ContainerRef {
    pub const fn history_list() -> Self {
        Self { id: HISTORY_LIST_ID }
    }
}

/// Clickable parts of a history row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Row,
    View,
    Repeat,
}

impl Control {
    /// Class attribute of the element carrying this control.
    pub fn class(self) -> &'static str {
        match self {
            Self::Row => "history-item",
            Self::View => "action-btn view-btn",
            Self::Repeat => "action-btn repeat-btn",
        }
    }
}

/// A click handler to attach after rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub record_id: String,
    pub control: Control,
    pub action: Action,
    /// Stop the click from reaching the row handler.
    pub stop_propagation: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub class: String,
    pub label: &'static str,
}

/// One rendered history row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub target: String,
    pub date: String,
    pub badge: Badge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Empty { message: &'static str },
    Items(Vec<ItemView>),
}

/// Output of one render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub container: ContainerRef,
    pub list: ListView,
    pub bindings: Vec<Binding>,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        matches!(self.list, ListView::Empty { .. })
    }

    pub fn items(&self) -> &[ItemView] {
        match &self.list {
            ListView::Empty { .. } => &[],
            ListView::Items(items) => items,
        }
    }

    pub fn binding(&self, record_id: &str, control: Control) -> Option<&Binding> {
        find_binding(&self.bindings, record_id, control)
    }
}

/// Render `records` through `filter` into `container`.
pub fn render(container: ContainerRef, records: &[HistoryRecord], filter: &Filter) -> Rendered {
    let visible = filter.apply(records);
    if visible.is_empty() {
        return Rendered {
            container,
            list: ListView::Empty { message: EMPTY_MESSAGE },
            bindings: Vec::new(),
        };
    }

    let items: Vec<ItemView> = visible.iter().map(|record| item_view(record)).collect();
    let bindings = items.iter().flat_map(|item| item_bindings(&item.id)).collect();
    Rendered {
        container,
        list: ListView::Items(items),
        bindings,
    }
}

fn item_view(record: &HistoryRecord) -> ItemView {
    ItemView {
        id: record.id.clone(),
        target: record.target.clone(),
        date: record.date.clone(),
        badge: Badge {
            class: format!("status-badge status-{}", record.status.as_str()),
            label: record.status.label(),
        },
    }
}

fn item_bindings(id: &str) -> [Binding; 3] {
    let bind = |control, action, stop_propagation| Binding {
        record_id: id.to_owned(),
        control,
        action,
        stop_propagation,
    };
    [
        bind(Control::View, Action::ViewDetails(id.to_owned()), true),
        bind(Control::Repeat, Action::Repeat(id.to_owned()), true),
        bind(Control::Row, Action::ViewDetails(id.to_owned()), false),
    ]
}

fn find_binding<'a>(bindings: &'a [Binding], record_id: &str, control: Control) -> Option<&'a Binding> {
    bindings
        .iter()
        .find(|b| b.record_id == record_id && b.control == control)
}

/// Actions fired by a click on `control` inside the row for `record_id`.
///
/// A click on a row control runs the control's handler, then bubbles to the
/// row handler unless the control stopped propagation.
pub fn dispatch_click(bindings: &[Binding], record_id: &str, control: Control) -> Vec<Action> {
    let mut fired = Vec::new();
    let mut bubbles = true;
    if let Some(binding) = find_binding(bindings, record_id, control) {
        fired.push(binding.action.clone());
        bubbles = !binding.stop_propagation;
    }
    if control != Control::Row && bubbles {
        if let Some(row) = find_binding(bindings, record_id, Control::Row) {
            fired.push(row.action.clone());
        }
    }
    fired
}
