use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::debug;
use models::{BookingError, ErrorKind};
use serde::Serialize;
use utoipa::ToSchema;

/// Error returned by every handler; wraps the domain error and picks the status code
#[derive(Debug)]
pub struct ApiError(BookingError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput
            | ErrorKind::DuplicateName
            | ErrorKind::UnknownRoom
            | ErrorKind::InvalidInterval => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(error: BookingError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(BookingError::invalid_input(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(BookingError::invalid_input(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(BookingError::invalid_input(rejection.body_text()))
    }
}

/// JSON body of every 4xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// One of `INVALID_INPUT`, `DUPLICATE_NAME`, `UNKNOWN_ROOM`, `INVALID_INTERVAL`, `NOT_FOUND`
    pub kind: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("Request rejected with {status}: {}", self.0);

        let body = ErrorResponse {
            kind: self.0.kind().as_str().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
