use corp_search_api_types::CorporationSummary;
use leptos::prelude::*;

#[component]
fn CorporationChoice(
    corporation: CorporationSummary,
    submit_text: Signal<String>,
    action: Option<String>,
) -> impl IntoView {
    let CorporationSummary {
        id,
        name,
        ticker,
        ceo,
    } = corporation;
    view! {
        <form method="post" action=action class="panel p-2 flex flex-row items-center gap-2">
            <p class="grow">{name}", ["{ticker}"]: "{ceo.name}</p>
            <input type="hidden" name="corporation_id" value=id.to_string() />
            <button class="btn-primary">{submit_text}</button>
        </form>
    }
}

/// One standalone form per corporation, each posting `corporation_id` back to the page.
#[component]
pub fn ResultList(
    #[prop(into)] results: Signal<Vec<CorporationSummary>>,
    #[prop(into)] submit_text: Signal<String>,
    /// where the forms post to, defaults to the current page
    #[prop(optional, into)]
    action: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            {move || {
                let action = action.get();
                results
                    .get()
                    .into_iter()
                    .map(|corporation| {
                        view! {
                            <CorporationChoice
                                corporation
                                submit_text
                                action=action.clone()
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
