use actix_web::HttpResponse;
use tracing::error;
use uuid::Uuid;

use crate::{
    content::{application::ports::incoming::ContentError, domain::Resource},
    shared::api::ApiResponse,
};

pub fn map_content_error<R: Resource>(err: ContentError) -> HttpResponse {
    match err {
        ContentError::Validation(e) => ApiResponse::bad_request(e.message()),
        ContentError::NotFound(message) => ApiResponse::not_found(&message),
        ContentError::Persistence(cause) => {
            error!(resource = R::NAME, %cause, "persistence failure");
            ApiResponse::internal_error()
        }
    }
}

/// A path id that is not a UUID cannot name a stored document.
pub fn parse_id<R: Resource>(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| ApiResponse::not_found(&R::not_found_message()))
}
