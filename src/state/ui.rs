#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Transient UI state for the history page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Informational notice raised by a view/repeat action, until dismissed.
    pub notice: Option<String>,
}

impl UiState {
    pub fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
