pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod search;

pub use components::{result_list::*, search_input::*, search_panel::*};
pub use config::SearchPanelConfig;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "csr")] {
        use leptos::prelude::*;
        use wasm_bindgen::JsCast;

        use crate::error::{AppError, AppResult};

        /// Mounts a search panel into the element with the given id, configured from its `data-*` attributes.
        pub fn mount(anchor_id: &str) -> AppResult<()> {
            let anchor = leptos::prelude::document()
                .get_element_by_id(anchor_id)
                .ok_or_else(|| AppError::NoMountPoint(anchor_id.to_string()))?;
            let config = SearchPanelConfig::from_element(&anchor)?;
            log::info!("mounting corporation search into #{anchor_id}, searching {}", config.search_endpoint);
            let anchor = anchor
                .dyn_into::<web_sys::HtmlElement>()
                .map_err(|_| AppError::NoMountPoint(anchor_id.to_string()))?;
            // the panel lives as long as the page
            leptos::mount::mount_to(anchor, move || view! { <SearchPanel config /> }).forget();
            Ok(())
        }
    }
}
