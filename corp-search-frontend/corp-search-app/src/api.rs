use async_trait::async_trait;
use corp_search_api_types::{CorporationSearchResponse, CorporationSummary};

use crate::error::AppResult;

/// Anything that can answer a corporation search.
#[async_trait(?Send)]
pub trait CorporationSearch: Send + Sync {
    async fn search(&self, query: &str) -> AppResult<Vec<CorporationSummary>>;
}

/// Decodes the body of the search endpoint. Bodies that don't match the expected shape are errors.
pub fn decode_search_response(json: &str) -> AppResult<Vec<CorporationSummary>> {
    let response: CorporationSearchResponse = serde_json::from_str(json)?;
    Ok(response.corporations)
}

/// Posts the query to the configured search endpoint
#[derive(Clone, Debug)]
pub struct HttpCorporationSearch {
    endpoint: String,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

impl HttpCorporationSearch {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(not(feature = "ssr"))]
#[async_trait(?Send)]
impl CorporationSearch for HttpCorporationSearch {
    async fn search(&self, query: &str) -> AppResult<Vec<CorporationSummary>> {
        use crate::error::{AppError, SystemError};

        let body = web_sys::UrlSearchParams::new()
            .map_err(|e| SystemError::Message(format!("{e:?}")))?;
        body.append("query", query);
        let response = gloo_net::http::Request::post(&self.endpoint)
            .body(body)?
            .send()
            .await?;
        if !response.ok() {
            return Err(AppError::Status(response.status()));
        }
        let json = response.text().await?;
        decode_search_response(&json)
    }
}

#[cfg(feature = "ssr")]
#[async_trait(?Send)]
impl CorporationSearch for HttpCorporationSearch {
    async fn search(&self, query: &str) -> AppResult<Vec<CorporationSummary>> {
        use crate::error::AppError;
        use corp_search_api_types::CorporationSearchRequest;

        let response = self
            .client
            .post(&self.endpoint)
            .form(&CorporationSearchRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                log::error!("Response {e}. {}", self.endpoint);
                e
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }
        let json = response.text().await?;
        decode_search_response(&json)
            .inspect_err(|e| log::error!("{e} {} returned: json text {json}", self.endpoint))
    }
}
