use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repository::StoreError;

pub type ClanResult<T> = Result<T, ClanError>;

#[derive(Debug, Error)]
pub enum ClanError {
    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("invalid request body: {0}")]
    InvalidBody(&'static str),

    #[error("Clan not found")]
    NotFound,

    /// a freshly generated id collided twice in a row
    #[error("clan id collision")]
    Conflict,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ClanError {
    pub fn invalid_field(field: impl Into<String>) -> Self {
        ClanError::InvalidField(field.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ClanError::InvalidField(_) | ClanError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ClanError::NotFound => StatusCode::NOT_FOUND,
            ClanError::Conflict | ClanError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ClanError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ClanError::InvalidField(field) => json!({
                "error": self.to_string(),
                "field": field,
            }),
            ClanError::InvalidBody(_) | ClanError::NotFound => json!({
                "error": self.to_string(),
            }),
            // details were logged where they happened, the client only gets this
            ClanError::Conflict | ClanError::Storage(_) => json!({
                "error": "Database operation failed",
            }),
        };

        (status, Json(body)).into_response()
    }
}
