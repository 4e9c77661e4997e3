use leptos::prelude::*;

const MOUNT_SCRIPT: &str = r#"import init, { mount } from "/pkg/corp_search.js";
await init();
mount("corporation-search");"#;

fn error_message(err: &str) -> &'static str {
    match err {
        "unknownCorporation" => "That corporation could not be found. Please search again.",
        _ => "Something went wrong. Please try again.",
    }
}

#[component]
fn ChooseCorpPage(chosen: Option<String>, err: Option<String>) -> impl IntoView {
    view! {
        <main class="main-content flex flex-col gap-2">
            <h1>"Choose a corporation to manage"</h1>
            {chosen.map(|name| view! { <p class="panel">"Managing " {name}</p> })}
            {err.map(|err| view! { <p class="panel text-red-400">{error_message(&err)}</p> })}
            <div
                id="corporation-search"
                data-search-endpoint="/corp/setup/search"
                data-search-text="Search"
                data-submit-text="Manage"
                data-choose-action="/corp/choose"
            ></div>
            <script type="module" inner_html=MOUNT_SCRIPT></script>
        </main>
    }
}

/// Renders the page hosting the search widget
pub(crate) fn render_choose_corp_page(chosen: Option<String>, err: Option<String>) -> String {
    let owner = Owner::new();
    let body = owner.with(|| view! { <ChooseCorpPage chosen err /> }.to_html());
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"/><title>Corporation search</title></head><body>{body}</body></html>"
    )
}
