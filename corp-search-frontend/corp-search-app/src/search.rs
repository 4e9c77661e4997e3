use std::sync::Arc;

pub use corp_search_api_types::MIN_QUERY_LEN;

use corp_search_api_types::CorporationSummary;
use leptos::prelude::*;

use crate::api::CorporationSearch;

/// Gate used by [`crate::components::search_input::SearchInput`]: an empty field or a usable query.
pub fn is_acceptable_query(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len == 0 || len > MIN_QUERY_LEN
}

pub fn can_submit(query: &str) -> bool {
    query.chars().count() > MIN_QUERY_LEN
}

/// The state owned by a single search panel.
///
/// `query` follows the text field on every keystroke. `results` only ever holds
/// the corporations from the last search that completed successfully; failed
/// searches are logged and leave it untouched.
#[derive(Clone)]
pub struct SearchSession {
    pub query: RwSignal<String>,
    pub results: RwSignal<Vec<CorporationSummary>>,
    client: Arc<dyn CorporationSearch>,
}

impl SearchSession {
    pub fn new(client: Arc<dyn CorporationSearch>) -> Self {
        Self {
            query: RwSignal::new(String::new()),
            results: RwSignal::new(Vec::new()),
            client,
        }
    }

    pub fn set_query(&self, candidate: String) {
        self.query.set(candidate);
    }

    pub fn can_submit(&self) -> bool {
        self.query.with(|query| can_submit(query))
    }

    /// Runs one search with the current query.
    ///
    /// Does not check [`Self::can_submit`]. Concurrent calls are not sequenced,
    /// whichever finishes last wins.
    pub async fn submit(&self) {
        let query = self.query.get_untracked();
        match self.client.search(&query).await {
            Ok(corporations) => {
                log::debug!("search {query:?} returned {} corporations", corporations.len());
                self.results.set(corporations);
            }
            Err(e) => {
                log::error!("Search failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::decode_search_response,
        error::{AppError, AppResult, SystemError},
    };
    use async_trait::async_trait;
    use corp_search_api_types::Ceo;
    use futures::executor::block_on;
    use std::sync::Mutex;

    /// What the fake endpoint answers with
    enum Reply {
        Body(&'static str),
        Status(u16),
        Unreachable(&'static str),
    }

    /// Replays canned replies and records the queries it was sent
    struct CannedSearch {
        replies: Mutex<Vec<Reply>>,
        queries: Mutex<Vec<String>>,
    }

    impl CannedSearch {
        fn new(replies: Vec<Reply>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl CorporationSearch for CannedSearch {
        async fn search(&self, query: &str) -> AppResult<Vec<CorporationSummary>> {
            self.queries.lock().unwrap().push(query.to_string());
            match self.replies.lock().unwrap().remove(0) {
                Reply::Body(body) => decode_search_response(body),
                Reply::Status(status) => Err(AppError::Status(status)),
                Reply::Unreachable(message) => {
                    Err(SystemError::Message(message.to_string()).into())
                }
            }
        }
    }

    const ACME: &str =
        r#"{"corporations":[{"id":1,"name":"Acme","ticker":"ACM","ceo":{"name":"J. Doe"}}]}"#;

    fn acme() -> CorporationSummary {
        CorporationSummary {
            id: 1,
            name: "Acme".to_string(),
            ticker: "ACM".to_string(),
            ceo: Ceo {
                name: "J. Doe".to_string(),
            },
        }
    }

    #[test]
    fn acceptable_queries() {
        assert!(is_acceptable_query(""));
        assert!(!is_acceptable_query("a"));
        assert!(!is_acceptable_query("abc"));
        assert!(is_acceptable_query("abcd"));
        // counted in characters, not bytes
        assert!(!is_acceptable_query("äöü"));
    }

    #[test]
    fn submit_gate() {
        assert!(!can_submit(""));
        assert!(!can_submit("Acm"));
        assert!(can_submit("Acme"));

        let session = SearchSession::new(CannedSearch::new(vec![]));
        assert!(!session.can_submit());
        session.set_query("Acme".to_string());
        assert!(session.can_submit());
    }

    #[test]
    fn successful_search_replaces_results() {
        let client = CannedSearch::new(vec![Reply::Body(ACME), Reply::Body("{}")]);
        let session = SearchSession::new(client.clone());
        session.set_query("Acme".to_string());
        block_on(session.submit());
        assert_eq!(session.results.get_untracked(), vec![acme()]);
        // the query is kept after a search
        assert_eq!(session.query.get_untracked(), "Acme");

        block_on(session.submit());
        assert!(session.results.get_untracked().is_empty());
        assert_eq!(*client.queries.lock().unwrap(), vec!["Acme", "Acme"]);
    }

    #[test]
    fn failed_search_keeps_results() {
        let client = CannedSearch::new(vec![
            Reply::Body(ACME),
            Reply::Unreachable("connection reset"),
            Reply::Body("<html>bad gateway</html>"),
            Reply::Body(r#"{"corporations":[{"id":2}]}"#),
            Reply::Status(500),
        ]);
        let session = SearchSession::new(client);
        session.set_query("Acme".to_string());
        block_on(session.submit());
        for _ in 0..4 {
            block_on(session.submit());
            assert_eq!(session.results.get_untracked(), vec![acme()]);
        }
    }

    #[test]
    fn submit_ignores_gate() {
        let client = CannedSearch::new(vec![Reply::Body(ACME)]);
        let session = SearchSession::new(client.clone());
        session.set_query("ab".to_string());
        block_on(session.submit());
        assert_eq!(*client.queries.lock().unwrap(), vec!["ab"]);
        assert_eq!(session.results.get_untracked().len(), 1);
    }
}
