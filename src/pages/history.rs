//! Check history page: filter buttons, notice banner and the history list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first mount loads history once and stores it in `HistoryState`;
//! later mounts reuse what is held. Filter changes and row actions never
//! touch the network.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::history_list::HistoryList;
use crate::components::notice_banner::NoticeBanner;
use crate::config::ApiConfig;
use crate::net::api::load_history;
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::state::history::HistoryState;
use crate::state::ui::UiState;
use crate::util::actions::Action;
use crate::util::diagnostics::Diagnostics;
use crate::util::history_view::{ContainerRef, render};

/// Initial page state: history loaded (empty on any failure), filter `all`.
pub async fn bootstrap<T: Transport, D: Diagnostics>(client: &ApiClient<T, D>) -> HistoryState {
    let mut state = HistoryState::default();
    state.replace_records(load_history(client).await);
    state
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<RwSignal<ApiConfig>>();

    #[cfg(feature = "csr")]
    {
        if history.try_update(HistoryState::begin_load).unwrap_or(false) {
            let client = ApiClient::new(config.get_untracked(), crate::net::transport::GlooTransport);
            leptos::task::spawn_local(async move {
                let initial = bootstrap(&client).await;
                history.update(|s| s.replace_records(initial.records));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let rendered = Memo::new(move |_| history.with(|s| render(ContainerRef::history_list(), &s.records, &s.filter)));
    let on_action = Callback::new(move |action: Action| ui.update(|u| u.show_notice(action.notice())));

    view! {
        <div class="history-page">
            <header class="history-page__header">
                <h1>"История проверок"</h1>
            </header>
            <FilterBar/>
            <NoticeBanner/>
            <Show
                when=move || history.get().loaded
                fallback=|| view! { <p class="history-page__loading">"Загрузка..."</p> }
            >
                <HistoryList rendered=rendered on_action=on_action/>
            </Show>
        </div>
    }
}
