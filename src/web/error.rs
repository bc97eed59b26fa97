use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::activities_service::ActivityError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error("Missing required query parameter: email")]
    MissingEmail,

    #[error("{0}")]
    InvalidPath(String),

    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Activity(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Activity(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail | ApiError::InvalidPath(_) | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
