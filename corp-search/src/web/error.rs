use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use corp_search_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query must be longer than 3 characters")]
    QueryTooShort,
    #[error("Bad form {0}")]
    BadForm(#[from] FormRejection),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::QueryTooShort | ApiError::BadForm(_) => StatusCode::BAD_REQUEST,
            ApiError::AnyhowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}
