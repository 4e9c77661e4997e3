pub mod error;
mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use corp_search_api_types::{
    ChooseCorporation, CorporationSearchRequest, CorporationSearchResponse, MIN_QUERY_LEN,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use self::error::ApiError;
use crate::config::HostConfig;
use crate::directory::CorporationDirectory;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) directory: Arc<CorporationDirectory>,
    /// id of the corporation picked from the search results
    pub(crate) chosen: Arc<RwLock<Option<i32>>>,
}

impl WebState {
    pub(crate) fn new(directory: CorporationDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
            chosen: Arc::default(),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct ChooseCorpQuery {
    err: Option<String>,
}

async fn choose_corp_page(
    State(state): State<WebState>,
    Query(query): Query<ChooseCorpQuery>,
) -> Html<String> {
    let chosen = *state.chosen.read().await;
    let chosen = chosen
        .and_then(|id| state.directory.get(id))
        .map(|corporation| corporation.name.clone());
    Html(page::render_choose_corp_page(chosen, query.err))
}

#[instrument(skip(state, form))]
pub(crate) async fn search_corporations(
    State(state): State<WebState>,
    form: Result<Form<CorporationSearchRequest>, FormRejection>,
) -> Result<Json<CorporationSearchResponse>, ApiError> {
    let Form(CorporationSearchRequest { query }) = form?;
    let query = query.trim();
    if query.chars().count() <= MIN_QUERY_LEN {
        return Err(ApiError::QueryTooShort);
    }
    let corporations = state.directory.search(query);
    info!("search {query:?} matched {} corporations", corporations.len());
    Ok(Json(CorporationSearchResponse { corporations }))
}

#[instrument(skip(state, form))]
pub(crate) async fn choose_corporation(
    State(state): State<WebState>,
    form: Result<Form<ChooseCorporation>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(ChooseCorporation { corporation_id }) = form?;
    let Some(corporation) = state.directory.get(corporation_id) else {
        warn!("unknown corporation {corporation_id} chosen");
        return Ok(Redirect::to("/?err=unknownCorporation"));
    };
    info!("managing {} [{}]", corporation.name, corporation.ticker);
    *state.chosen.write().await = Some(corporation_id);
    Ok(Redirect::to("/"))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

pub(crate) fn router(state: WebState, config: &HostConfig) -> Router {
    Router::new()
        .route("/", get(choose_corp_page))
        .route("/corp/setup/search", post(search_corporations))
        .route("/corp/choose", post(choose_corporation))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, config: HostConfig) -> anyhow::Result<()> {
    let app = router(state, &config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn state() -> WebState {
        WebState::new(CorporationDirectory::builtin().unwrap())
    }

    fn search_form(query: &str) -> Result<Form<CorporationSearchRequest>, FormRejection> {
        Ok(Form(CorporationSearchRequest {
            query: query.to_string(),
        }))
    }

    #[tokio::test]
    async fn search_trims_and_matches() {
        let Json(response) = search_corporations(State(state()), search_form("  acme  "))
            .await
            .unwrap();
        assert_eq!(response.corporations[0].ticker, "ACME");
    }

    #[tokio::test]
    async fn search_rejects_short_query() {
        let err = search_corporations(State(state()), search_form("  abc "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::QueryTooShort));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn choosing_records_corporation() {
        let state = state();
        let redirect = choose_corporation(
            State(state.clone()),
            Ok(Form(ChooseCorporation {
                corporation_id: 98000003,
            })),
        )
        .await
        .unwrap();
        assert_eq!(
            redirect.into_response().headers()["location"],
            "/"
        );
        assert_eq!(*state.chosen.read().await, Some(98000003));

        let Html(page) = choose_corp_page(State(state), Query(ChooseCorpQuery { err: None })).await;
        assert!(page.contains("Caldari Provisions"));
    }

    #[tokio::test]
    async fn choosing_unknown_corporation_redirects_with_error() {
        let state = state();
        let redirect = choose_corporation(
            State(state.clone()),
            Ok(Form(ChooseCorporation { corporation_id: 1 })),
        )
        .await
        .unwrap();
        assert_eq!(
            redirect.into_response().headers()["location"],
            "/?err=unknownCorporation"
        );
        assert_eq!(*state.chosen.read().await, None);
    }
}
