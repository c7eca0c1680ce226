// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error body shared by every route: `{ "error": "<message>" }`.
#[derive(Debug, Serialize, Clone)]
pub struct ApiError {
    pub error: String,
}

/// Successful bodies are the resource itself (document, list or `{}`),
/// so only the status differs between helpers.
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    /// `{}` is what singleton reads return when nothing has been written yet.
    pub fn empty_object() -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({}))
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: message.to_string(),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn method_not_allowed(message: &str) -> HttpResponse {
        Self::error(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
