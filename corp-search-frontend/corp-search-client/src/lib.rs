use wasm_bindgen::prelude::wasm_bindgen;

/// Element id the host page renders for the widget
pub const DEFAULT_ANCHOR: &str = "corporation-search";

/// Entry point called by the host page once the wasm bundle is loaded.
#[wasm_bindgen]
pub fn mount(anchor_id: Option<String>) {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let anchor_id = anchor_id.unwrap_or_else(|| DEFAULT_ANCHOR.to_string());
    if let Err(e) = corp_search_app::mount(&anchor_id) {
        log::error!("corporation search not mounted: {e}");
    }
}
