use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::NotFound => {
                warn!("Resource not found");
                (StatusCode::NOT_FOUND, "Resource not found")
            }
            ApplicationError::BadRequest(ref msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            ApplicationError::Unauthorized => {
                warn!("Request without caller identity");
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            ApplicationError::PayloadTooLarge => {
                warn!("Upload too large");
                (StatusCode::PAYLOAD_TOO_LARGE, "File too large")
            }
            ApplicationError::MalformedUrl(ref msg) => {
                error!("Could not build download URL: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApplicationError::ExternalService(ref msg) => {
                error!("External dependency failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream service unavailable")
            }
            ApplicationError::InternalError(ref msg) => {
                error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApplicationError::DatabaseError(ref msg) => {
                error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApplicationError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => ApplicationError::NotFound,
            other => ApplicationError::DatabaseError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApplicationError::PayloadTooLarge
        } else {
            ApplicationError::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApplicationError {
    fn from(rejection: QueryRejection) -> Self {
        ApplicationError::BadRequest(rejection.body_text())
    }
}
