#[cfg(feature = "csr")]
use crate::error::{AppError, AppResult};

/// Everything a host provides to a [`crate::components::search_panel::SearchPanel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPanelConfig {
    /// Label of the panel's search button
    pub search_text: String,
    /// Label of the submit button on every result
    pub submit_text: String,
    pub search_endpoint: String,
    /// Form action used by the results. The current page when unset.
    pub choose_action: Option<String>,
}

impl SearchPanelConfig {
    pub const SEARCH_ENDPOINT_ATTR: &'static str = "data-search-endpoint";
    pub const SEARCH_TEXT_ATTR: &'static str = "data-search-text";
    pub const SUBMIT_TEXT_ATTR: &'static str = "data-submit-text";
    pub const CHOOSE_ACTION_ATTR: &'static str = "data-choose-action";

    pub fn new(
        search_text: impl Into<String>,
        submit_text: impl Into<String>,
        search_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            submit_text: submit_text.into(),
            search_endpoint: search_endpoint.into(),
            choose_action: None,
        }
    }

    pub fn with_choose_action(mut self, action: impl Into<String>) -> Self {
        self.choose_action = Some(action.into());
        self
    }

    /// Builds the configuration from an attribute lookup, the shape used by the mount anchor.
    pub fn from_attributes(
        attribute: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, &'static str> {
        let required = |name| attribute(name).ok_or(name);
        Ok(Self {
            search_text: required(Self::SEARCH_TEXT_ATTR)?,
            submit_text: required(Self::SUBMIT_TEXT_ATTR)?,
            search_endpoint: required(Self::SEARCH_ENDPOINT_ATTR)?,
            choose_action: attribute(Self::CHOOSE_ACTION_ATTR),
        })
    }

    #[cfg(feature = "csr")]
    pub fn from_element(element: &web_sys::Element) -> AppResult<Self> {
        Self::from_attributes(|name| element.get_attribute(name)).map_err(AppError::MissingConfig)
    }
}
