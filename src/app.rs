//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{self, ApiConfig};
use crate::pages::history::HistoryPage;
use crate::state::{history::HistoryState, ui::UiState};

/// Root application component.
///
/// Owns the page-lifetime state (API config, history, UI) and provides it as
/// context; nothing below reads globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api_config = RwSignal::new(ApiConfig::from_override(config::read_override()));
    let history = RwSignal::new(HistoryState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(api_config);
    provide_context(history);
    provide_context(ui);

    view! {
        <Title text="История проверок"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HistoryPage/>
            </Routes>
        </Router>
    }
}
