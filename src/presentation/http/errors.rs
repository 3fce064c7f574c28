use poem::{IntoResponse, Response, http::StatusCode, web::Json as JsonBody};
use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::errors::DomainError;

#[derive(Object, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Every failure an operation can report, each carrying `{"error": ...}`.
#[derive(ApiResponse)]
pub enum ApiError {
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
}

fn body(message: String) -> Json<ErrorDto> {
    Json(ErrorDto { error: message })
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_)
            | DomainError::UnknownUser(_)
            | DomainError::TodoNotFound(_) => ApiError::NotFound(body(err.to_string())),
            DomainError::InvalidId(_)
            | DomainError::DuplicateUsername(_)
            | DomainError::AlreadyPro
            | DomainError::InvalidDeadline(_) => ApiError::BadRequest(body(err.to_string())),
            DomainError::QuotaExceeded { .. } => ApiError::Forbidden(body(err.to_string())),
        }
    }
}

/// Rewrites errors raised outside the operations (payload parsing, unknown
/// routes) into the same `{"error": ...}` shape, keeping their status.
/// Responses that are already JSON pass through untouched.
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    let response = err.into_response();
    if response
        .content_type()
        .is_some_and(|ct| ct.starts_with("application/json"))
    {
        return response;
    }

    let message = match response.into_body().into_string().await {
        Ok(text) if !text.is_empty() => text,
        _ => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    if status.is_server_error() {
        error!(%status, error = %message, "request failed");
    } else {
        debug!(%status, error = %message, "request rejected");
    }

    (status, JsonBody(ErrorDto { error: message })).into_response()
}
