//! Row actions raised from the history list.
//!
//! The browser build only surfaces a notice for each action; opening a
//! detail view and re-submitting a check belong to other subsystems (the CLI
//! drives the real endpoints through `net::api`).

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

/// An action bound to a history row control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ViewDetails(String),
    Repeat(String),
}

impl Action {
    pub fn record_id(&self) -> &str {
        match self {
            Self::ViewDetails(id) | Self::Repeat(id) => id,
        }
    }

    /// Informational notice describing what the action will do.
    pub fn notice(&self) -> String {
        match self {
            Self::ViewDetails(id) => format!(
                "Просмотр деталей проверки {id}\n\nЗдесь будет открыто детальное представление результатов проверки."
            ),
            Self::Repeat(id) => {
                format!("Повтор проверки {id}\n\nБудет запущена новая проверка с теми же параметрами.")
            }
        }
    }
}
