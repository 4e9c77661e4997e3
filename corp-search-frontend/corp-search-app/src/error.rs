use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Search endpoint responded with status {0}")]
    Status(u16),
    #[error("Mount point is missing the {0} attribute")]
    MissingConfig(&'static str),
    #[error("No element with id {0} to mount into")]
    NoMountPoint(String),
}

/// Wraps the non-cloneable transport errors so `AppError` can stay `Clone`
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "ssr")]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(not(feature = "ssr"))]
    GlooError(Rc<gloo_net::Error>),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        // gloo reports body decode failures as its own error kind
        match value {
            gloo_net::Error::SerdeError(e) => Self::Json(e.to_string()),
            other => Self::SystemError(other.into()),
        }
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_keep_message() {
        let err = serde_json::from_str::<u32>("<html>").unwrap_err();
        let app_error = AppError::from(err);
        assert!(matches!(app_error, AppError::Json(_)));
        assert!(app_error.to_string().starts_with("JSON "));
    }

    #[test]
    fn message_errors_are_system_errors() {
        let app_error = AppError::from(SystemError::Message("connection refused".to_string()));
        assert_eq!(
            app_error.to_string(),
            "System error connection refused"
        );
    }
}
