use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    media::{application::ports::outgoing::ImageStoreError, domain::ImageSlot},
    shared::api::ApiResponse,
    AppState,
};

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Uploaded SVG is markup; opened directly it must not run script on this origin.
const UPLOAD_CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; sandbox";

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/{folder:about-images|project-images}/{file_name}")]
pub async fn serve_image_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (folder, file_name) = path.into_inner();

    let Some(slot) = ImageSlot::for_folder(&folder) else {
        return ApiResponse::not_found("Image not found");
    };

    match data.image_store.open(slot, file_name.clone()).await {
        Ok(Some(bytes)) => HttpResponse::Ok()
            .content_type(content_type_for(&file_name))
            .insert_header((header::CONTENT_SECURITY_POLICY, UPLOAD_CSP))
            .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .body(bytes),
        Ok(None) | Err(ImageStoreError::InvalidFileName(_)) => {
            ApiResponse::not_found("Image not found")
        }
        Err(err) => {
            error!(%folder, %file_name, error = %err, "failed to read image");
            ApiResponse::internal_error()
        }
    }
}
