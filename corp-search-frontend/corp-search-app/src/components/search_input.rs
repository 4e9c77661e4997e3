use leptos::prelude::*;

use crate::search::is_acceptable_query;

/// Returns false when the edit was dropped.
fn notify_if_acceptable(candidate: String, on_update: Callback<String>) -> bool {
    if is_acceptable_query(&candidate) {
        on_update.run(candidate);
        true
    } else {
        false
    }
}

/// Controlled text field. Edits are only reported when they are empty or long enough to search.
#[component]
pub fn SearchInput(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_update: Callback<String>,
) -> impl IntoView {
    // rewrites the field with the owner's value after a dropped edit
    let revert = Trigger::new();
    view! {
        <input
            class="input"
            type="text"
            prop:value=move || {
                revert.track();
                query.get()
            }
            on:input=move |ev| {
                if !notify_if_acceptable(event_target_value(&ev), on_update) {
                    revert.notify();
                }
            }
        />
    }
}
