pub mod corporation;
pub mod result;

pub use corporation::{Ceo, CorporationSummary};

use serde::{Deserialize, Serialize};

/// A search query must be strictly longer than this, in characters.
pub const MIN_QUERY_LEN: usize = 3;

/// Body of `POST <search endpoint>`. Sent form encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporationSearchRequest {
    pub query: String,
}

/// Response of the search endpoint. A response without `corporations` is an empty result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporationSearchResponse {
    #[serde(default)]
    pub corporations: Vec<CorporationSummary>,
}

/// Form posted by each rendered search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseCorporation {
    pub corporation_id: i32,
}
