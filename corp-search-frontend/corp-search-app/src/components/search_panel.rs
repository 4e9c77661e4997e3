use std::sync::Arc;

use icondata as i;
use leptos::{prelude::*, task::spawn_local};
use leptos_icons::*;

use crate::{
    api::{CorporationSearch, HttpCorporationSearch},
    components::result_list::*,
    config::SearchPanelConfig,
    search::SearchSession,
};

/// Searches corporations through the configured endpoint
#[component]
pub fn SearchPanel(config: SearchPanelConfig) -> impl IntoView {
    let client: Arc<dyn CorporationSearch> =
        Arc::new(HttpCorporationSearch::new(config.search_endpoint.clone()));
    view! { <SearchPanelWith config client /> }
}

/// [`SearchPanel`] with the search backend supplied by the caller
#[component]
pub fn SearchPanelWith(
    config: SearchPanelConfig,
    client: Arc<dyn CorporationSearch>,
) -> impl IntoView {
    let SearchPanelConfig {
        search_text,
        submit_text,
        choose_action,
        ..
    } = config;
    let session = SearchSession::new(client);
    let query = session.query;
    let results = session.results;
    let can_submit = {
        let session = session.clone();
        move || session.can_submit()
    };
    let on_input = {
        let session = session.clone();
        move |ev| session.set_query(event_target_value(&ev))
    };
    let on_search = move |_| {
        let session = session.clone();
        spawn_local(async move { session.submit().await });
    };
    view! {
        <div class="flex flex-col gap-2">
            <div class="flex flex-row gap-2">
                <input class="input w-full" type="text" prop:value=query on:input=on_input />
                <button class="btn-primary flex flex-row items-center gap-1" disabled=move || !can_submit() on:click=on_search>
                    <Icon icon=i::AiSearchOutlined />
                    {search_text}
                </button>
            </div>
            <ResultList results submit_text action=choose_action />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use async_trait::async_trait;
    use corp_search_api_types::CorporationSummary;

    struct NoSearch;

    #[async_trait(?Send)]
    impl CorporationSearch for NoSearch {
        async fn search(&self, _query: &str) -> AppResult<Vec<CorporationSummary>> {
            Ok(vec![])
        }
    }

    #[test]
    fn renders_disabled_search_button() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let config = SearchPanelConfig::new("Search", "Manage", "/corp/setup/search");
            let client: Arc<dyn CorporationSearch> = Arc::new(NoSearch);
            view! { <SearchPanelWith config client /> }.to_html()
        });
        assert!(html.contains("Search"));
        assert!(html.contains("disabled"));
        assert_eq!(html.matches("<form").count(), 0);
    }
}
